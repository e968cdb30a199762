//! Heuristic algorithms
//!
//! Everything here may fail to find a structure that exists. A `None` from these
//! functions means "the heuristic found nothing", never "nothing exists". Exact
//! algorithms live in the sibling modules.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;

/// Tries to find a Hamiltonian cycle (heuristic, no optimality or completeness guarantee)
///
/// A tour is grown greedily from every start vertex: the next vertex is the unvisited
/// neighbor with the fewest unvisited onward neighbors (Warnsdorff's rule), then the
/// lightest edge, then the lowest ID. A tour that closes back to its start is then
/// shortened with 2-opt moves that only use existing edges. The cheapest closed tour
/// is returned, as the vertex sequence without repeating the start.
///
/// Returns `None` for graphs with fewer than 3 vertices, or when no start vertex
/// produced a closed tour that passes [`is_hamiltonian_cycle`].
pub fn hamiltonian_cycle<W, G>(graph: &G) -> Option<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if n < 3 {
        return None;
    }

    let mut best: Option<(W, Vec<usize>)> = None;

    for start in graph.vertices() {
        let Some(mut tour) = greedy_tour(graph, start) else {
            continue;
        };
        two_opt(graph, &mut tour);

        let Some(cost) = tour_weight(graph, &tour) else {
            continue;
        };
        if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
            best = Some((cost, tour));
        }
    }

    match best {
        Some((cost, tour)) if is_hamiltonian_cycle(graph, &tour) => {
            debug!("hamiltonian heuristic: closed tour of weight {:?}", cost);
            Some(tour)
        }
        _ => {
            debug!("hamiltonian heuristic: no closed tour found over {} vertices", n);
            None
        }
    }
}

/// Checks that `cycle` visits every vertex of `graph` exactly once and that each
/// consecutive pair, including last -> first, is an edge
pub fn is_hamiltonian_cycle<W, G>(graph: &G, cycle: &[usize]) -> bool
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if n < 3 || cycle.len() != n {
        return false;
    }

    let distinct: HashSet<usize> = cycle.iter().copied().collect();
    if distinct.len() != n || !distinct.iter().all(|&v| graph.has_vertex(v)) {
        return false;
    }

    (0..n).all(|i| graph.has_edge(cycle[i], cycle[(i + 1) % n]))
}

/// Greedy walk from `start`; returns the vertex order if it covers every vertex and closes
fn greedy_tour<W, G>(graph: &G, start: usize) -> Option<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut visited = HashSet::with_capacity(n);
    let mut tour = Vec::with_capacity(n);

    visited.insert(start);
    tour.push(start);
    let mut current = start;

    while tour.len() < n {
        let onward = |v: usize| {
            graph
                .neighbors(v)
                .filter(|(u, _)| !visited.contains(u))
                .count()
        };

        let next = graph
            .neighbors(current)
            .filter(|(v, _)| !visited.contains(v))
            .map(|(v, weight)| (onward(v), weight, v))
            .min_by(|a, b| {
                a.0.cmp(&b.0)
                    .then(a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
                    .then(a.2.cmp(&b.2))
            })
            .map(|(_, _, v)| v)?;

        visited.insert(next);
        tour.push(next);
        current = next;
    }

    graph.has_edge(current, start).then_some(tour)
}

/// Repeatedly reverses tour segments while that lowers the weight and keeps every edge real
fn two_opt<W, G>(graph: &G, tour: &mut [usize])
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = tour.len();
    let mut improved = true;

    while improved {
        improved = false;

        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n {
                // Edges (i, i+1) and (j, j+1) share a vertex when they wrap around
                if i == 0 && j == n - 1 {
                    continue;
                }

                let (a, b) = (tour[i], tour[i + 1]);
                let (c, d) = (tour[j], tour[(j + 1) % n]);

                let (Some(ab), Some(cd), Some(ac), Some(bd)) = (
                    graph.get_edge_weight(a, b),
                    graph.get_edge_weight(c, d),
                    graph.get_edge_weight(a, c),
                    graph.get_edge_weight(b, d),
                ) else {
                    continue;
                };

                if ac + bd < ab + cd {
                    tour[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
    }
}

fn tour_weight<W, G>(graph: &G, tour: &[usize]) -> Option<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = tour.len();
    (0..n).try_fold(W::zero(), |acc, i| {
        graph
            .get_edge_weight(tour[i], tour[(i + 1) % n])
            .map(|weight| acc + weight)
    })
}
