use std::collections::HashMap;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::components::connected_components;
use crate::graph::Graph;

/// Returns true if the graph has an Eulerian circuit
///
/// That requires at least one edge, an even degree at every vertex, and all vertices
/// with edges in a single connected component. Isolated vertices are ignored.
pub fn has_eulerian_circuit<W, G>(graph: &G) -> bool
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if graph.edge_count() == 0 {
        return false;
    }
    if graph.vertices().any(|v| graph.degree(v) % 2 == 1) {
        return false;
    }

    connected_components(graph)
        .iter()
        .filter(|component| component.iter().any(|&v| graph.degree(v) > 0))
        .count()
        == 1
}

/// Finds an Eulerian circuit with Hierholzer's algorithm
///
/// Returns the ordered edge traversals `(from, to)` of a closed walk that uses every
/// edge exactly once, starting and ending at the smallest vertex that has an edge.
/// Returns `None` when no circuit exists (see [`has_eulerian_circuit`]).
pub fn eulerian_tour<W, G>(graph: &G) -> Option<Vec<(usize, usize)>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !has_eulerian_circuit(graph) {
        debug!("no eulerian circuit: odd degree, disconnected edges or no edges");
        return None;
    }

    // Index edges so each undirected edge is consumed once from either side
    let edges = graph.edges();
    let mut incident: HashMap<usize, Vec<(usize, usize)>> = HashMap::new();
    for (id, &(u, v, _)) in edges.iter().enumerate() {
        incident.entry(u).or_default().push((v, id));
        incident.entry(v).or_default().push((u, id));
    }

    let start = edges.iter().map(|&(u, _, _)| u).min()?;
    let mut used = vec![false; edges.len()];
    let mut cursor: HashMap<usize, usize> = HashMap::new();
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(edges.len() + 1);

    while let Some(&v) = stack.last() {
        let next = cursor.entry(v).or_insert(0);
        let adjacent = &incident[&v];

        while *next < adjacent.len() && used[adjacent[*next].1] {
            *next += 1;
        }

        match adjacent.get(*next) {
            Some(&(w, id)) => {
                used[id] = true;
                stack.push(w);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }

    circuit.reverse();
    Some(circuit.windows(2).map(|pair| (pair[0], pair[1])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::{generate_complete, generate_cycle};
    use crate::graph::{MutableGraph, UndirectedGraph};
    use ordered_float::OrderedFloat;

    #[test]
    fn four_cycle_tour() {
        let tour = eulerian_tour(&generate_cycle(4)).unwrap();
        assert_eq!(tour.len(), 4);
        assert_eq!(tour[0].0, 1);
        assert_eq!(tour[3].1, 1);
        for pair in tour.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn odd_degree_has_no_tour() {
        // K4: every vertex has degree 3
        assert_eq!(eulerian_tour(&generate_complete(4)), None);
    }

    #[test]
    fn edgeless_graph_has_no_tour() {
        let graph: UndirectedGraph<OrderedFloat<f64>> = UndirectedGraph::with_vertices(3);
        assert_eq!(eulerian_tour(&graph), None);
    }

    #[test]
    fn isolated_vertices_are_ignored_but_two_cycles_are_not() {
        let mut graph = generate_cycle(3);
        graph.add_vertex();
        assert_eq!(eulerian_tour(&graph).map(|t| t.len()), Some(3));

        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let c = graph.add_vertex();
        graph.add_edge(a, b, OrderedFloat(1.0));
        graph.add_edge(b, c, OrderedFloat(1.0));
        graph.add_edge(c, a, OrderedFloat(1.0));
        assert_eq!(eulerian_tour(&graph), None);
    }

    #[test]
    fn bowtie_uses_every_edge_once() {
        // Two triangles sharing vertex 3
        let graph = UndirectedGraph::from_edges(
            5,
            [
                (1, 2, OrderedFloat(1.0)),
                (2, 3, OrderedFloat(1.0)),
                (3, 1, OrderedFloat(1.0)),
                (3, 4, OrderedFloat(1.0)),
                (4, 5, OrderedFloat(1.0)),
                (5, 3, OrderedFloat(1.0)),
            ],
        );
        let tour = eulerian_tour(&graph).unwrap();
        assert_eq!(tour.len(), 6);

        let mut covered: Vec<(usize, usize)> =
            tour.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        covered.sort_unstable();
        covered.dedup();
        assert_eq!(covered.len(), 6);
        assert_eq!(tour.first().map(|e| e.0), tour.last().map(|e| e.1));
    }
}
