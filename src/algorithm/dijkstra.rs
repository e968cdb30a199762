use std::collections::HashMap;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::reconstruct_path;
use crate::algorithm::{DistanceMap, ShortestPath, ShortestPathAlgorithm};
use crate::data_structures::MinFrontier;
use crate::graph::Graph;

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the search from `source`, stopping early once `target` is settled.
    /// Returns tentative distances and the predecessor tree.
    fn search<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> (HashMap<usize, W>, HashMap<usize, usize>)
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let mut distances: HashMap<usize, W> = HashMap::new();
        let mut predecessors: HashMap<usize, usize> = HashMap::new();

        distances.insert(source, W::zero());

        let mut frontier = MinFrontier::new();
        frontier.push(source, W::zero());
        let mut settled = 0usize;

        while let Some((u, dist_u)) = frontier.pop() {
            // Stale entry: a shorter distance to u was already recorded
            if distances.get(&u).is_some_and(|&best| best < dist_u) {
                continue;
            }
            settled += 1;

            if Some(u) == target {
                break;
            }

            for (v, weight) in graph.neighbors(u) {
                let new_dist = dist_u + weight;

                let should_update = match distances.get(&v) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    frontier.push(v, new_dist);
                }
            }
        }

        debug!(
            "dijkstra from {}: settled {} vertices, {} reached",
            source,
            settled,
            distances.len()
        );

        (distances, predecessors)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn distances_from(&self, graph: &G, source: usize) -> DistanceMap<W> {
        if !graph.has_vertex(source) {
            return DistanceMap::new();
        }

        let (reached, _) = self.search(graph, source, None);
        graph
            .vertices()
            .map(|v| (v, reached.get(&v).copied().unwrap_or_else(W::infinity)))
            .collect()
    }

    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> ShortestPath<W> {
        if !graph.has_vertex(source) || !graph.has_vertex(target) {
            return ShortestPath::unreachable();
        }

        if source == target {
            return ShortestPath {
                path: vec![source],
                distance: W::zero(),
            };
        }

        let (distances, predecessors) = self.search(graph, source, Some(target));

        match (
            reconstruct_path(&predecessors, source, target),
            distances.get(&target),
        ) {
            (Some(path), Some(&distance)) => ShortestPath { path, distance },
            _ => ShortestPath::unreachable(),
        }
    }
}

/// Shortest path between two vertices using [`Dijkstra`]
///
/// Weights must be non-negative. Returns an empty path and infinite distance when
/// either vertex is missing or `target` is unreachable.
pub fn shortest_path<W, G>(graph: &G, source: usize, target: usize) -> ShortestPath<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Dijkstra::new().shortest_path(graph, source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MutableGraph, UndirectedGraph};
    use ordered_float::OrderedFloat;

    fn triangle() -> UndirectedGraph<OrderedFloat<f64>> {
        UndirectedGraph::from_edges(
            3,
            [
                (1, 2, OrderedFloat(1.0)),
                (2, 3, OrderedFloat(2.0)),
                (1, 3, OrderedFloat(5.0)),
            ],
        )
    }

    #[test]
    fn triangle_prefers_the_two_hop_route() {
        let result = shortest_path(&triangle(), 1, 3);
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.distance, OrderedFloat(3.0));
    }

    #[test]
    fn source_equals_target() {
        let result = shortest_path(&triangle(), 2, 2);
        assert_eq!(result.path, vec![2]);
        assert_eq!(result.distance, OrderedFloat(0.0));
    }

    #[test]
    fn unreachable_and_missing_vertices() {
        let mut graph = triangle();
        let isolated = graph.add_vertex();

        let result = shortest_path(&graph, 1, isolated);
        assert!(!result.is_found());
        assert!(result.distance.is_infinite());

        assert_eq!(shortest_path(&graph, 1, 42), ShortestPath::unreachable());
        assert_eq!(shortest_path(&graph, 42, 42), ShortestPath::unreachable());
    }

    #[test]
    fn distance_map_marks_unreachable_as_infinite() {
        let mut graph = triangle();
        let isolated = graph.add_vertex();

        let distances = Dijkstra::new().distances_from(&graph, 1);
        assert_eq!(distances.len(), 4);
        assert_eq!(distances[&1], OrderedFloat(0.0));
        assert_eq!(distances[&2], OrderedFloat(1.0));
        assert_eq!(distances[&3], OrderedFloat(3.0));
        assert!(distances[&isolated].is_infinite());

        assert!(Dijkstra::new().distances_from(&graph, 99).is_empty());
    }
}
