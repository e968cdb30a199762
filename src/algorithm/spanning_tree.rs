use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::data_structures::DisjointSet;
use crate::graph::{Graph, MutableGraph, UndirectedGraph};

/// Computes a minimum spanning forest with Kruskal's algorithm
///
/// The result contains every vertex of `graph` (same IDs) and one minimum spanning
/// tree per connected component, i.e. exactly `|V| - c` edges for `c` components.
/// Callers must not assume the result is connected.
pub fn minimum_spanning_tree<W, G>(graph: &G) -> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut forest = UndirectedGraph::new();
    let mut index = HashMap::with_capacity(graph.vertex_count());

    for (i, v) in graph.vertices().enumerate() {
        forest.insert_vertex(v);
        index.insert(v, i);
    }

    let mut edges = graph.edges();
    // Stable sort keeps ties in (u, v) order
    edges.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

    let mut sets = DisjointSet::new(index.len());
    let target = index.len().saturating_sub(1);

    for (u, v, weight) in edges {
        if forest.edge_count() == target {
            break;
        }
        if sets.union(index[&u], index[&v]) {
            forest.add_edge(u, v, weight);
        }
    }

    debug!(
        "minimum spanning forest: {} edges over {} components",
        forest.edge_count(),
        sets.set_count()
    );

    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn drops_the_heaviest_triangle_edge() {
        let graph = UndirectedGraph::from_edges(
            3,
            [
                (1, 2, OrderedFloat(1.0)),
                (2, 3, OrderedFloat(2.0)),
                (1, 3, OrderedFloat(5.0)),
            ],
        );
        let tree = minimum_spanning_tree(&graph);
        assert_eq!(tree.vertex_count(), 3);
        assert_eq!(tree.edge_count(), 2);
        assert!(!tree.has_edge(1, 3));
        assert_eq!(tree.total_weight(), OrderedFloat(3.0));
    }

    #[test]
    fn disconnected_input_gives_a_forest() {
        let graph = UndirectedGraph::from_edges(
            5,
            [
                (1, 2, OrderedFloat(4.0)),
                (3, 4, OrderedFloat(1.0)),
                (4, 5, OrderedFloat(1.0)),
                (3, 5, OrderedFloat(3.0)),
            ],
        );
        let forest = minimum_spanning_tree(&graph);
        // 5 vertices, 2 components
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(forest.total_weight(), OrderedFloat(6.0));
    }

    #[test]
    fn keeps_isolated_vertices() {
        let graph: UndirectedGraph<OrderedFloat<f64>> = UndirectedGraph::with_vertices(2);
        let forest = minimum_spanning_tree(&graph);
        assert_eq!(forest.vertex_count(), 2);
        assert_eq!(forest.edge_count(), 0);
    }
}
