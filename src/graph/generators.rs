use crate::graph::{MutableGraph, UndirectedGraph, DEFAULT_WEIGHT};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a cycle 1 - 2 - ... - n - 1 with unit weights
/// Returns an empty edge set for n < 3, since a simple cycle needs three vertices
pub fn generate_cycle(n: usize) -> UndirectedGraph<OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_vertices(n);
    if n < 3 {
        return graph;
    }

    for v in 1..=n {
        let next = if v == n { 1 } else { v + 1 };
        graph.add_edge(v, next, OrderedFloat(DEFAULT_WEIGHT));
    }

    graph
}

/// Generates the complete graph K_n with unit weights
pub fn generate_complete(n: usize) -> UndirectedGraph<OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_vertices(n);

    for u in 1..=n {
        for v in (u + 1)..=n {
            graph.add_edge(u, v, OrderedFloat(DEFAULT_WEIGHT));
        }
    }

    graph
}

/// Generates a width x height grid (4-connectivity) with unit weights
/// Vertex (x, y) gets ID `y * width + x + 1`
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_vertices(width * height);

    // Helper function to get vertex ID from grid coordinates
    let get_id = |x: usize, y: usize| -> usize { y * width + x + 1 };

    for y in 0..height {
        for x in 0..width {
            let current = get_id(x, y);

            if x + 1 < width {
                graph.add_edge(current, get_id(x + 1, y), OrderedFloat(DEFAULT_WEIGHT));
            }
            if y + 1 < height {
                graph.add_edge(current, get_id(x, y + 1), OrderedFloat(DEFAULT_WEIGHT));
            }
        }
    }

    graph
}

/// Generates an Erdos-Renyi G(n, p) graph
/// Every pair of vertices is connected with probability `p`, weights are uniform in [1, 10)
pub fn generate_random<R: Rng>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> UndirectedGraph<OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_vertices(n);
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };

    for u in 1..=n {
        for v in (u + 1)..=n {
            if rng.gen_bool(p) {
                let weight = OrderedFloat(rng.gen_range(1.0..10.0));
                graph.add_edge(u, v, weight);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;

    #[test]
    fn cycle_has_n_edges_and_even_degrees() {
        let graph = generate_cycle(6);
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.vertices().all(|v| graph.degree(v) == 2));
        assert!(graph.has_edge(6, 1));

        assert_eq!(generate_cycle(2).edge_count(), 0);
    }

    #[test]
    fn complete_graph_edge_count() {
        let graph = generate_complete(5);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn grid_edge_count() {
        let graph = generate_grid(4, 3);
        assert_eq!(graph.vertex_count(), 12);
        // (w - 1) * h horizontal + w * (h - 1) vertical
        assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
    }

    #[test]
    fn random_graph_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_random(8, 0.0, &mut rng).edge_count(), 0);
        let full = generate_random(8, 1.0, &mut rng);
        assert_eq!(full.edge_count(), 28);
        assert!(full
            .edges()
            .iter()
            .all(|(_, _, w)| w.into_inner() >= 1.0 && w.into_inner() < 10.0));
    }
}
