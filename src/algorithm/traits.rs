use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;

/// Distance from a fixed source to each vertex; unreachable vertices map to infinity
pub type DistanceMap<W> = HashMap<usize, W>;

/// Result of a single-pair shortest path query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertices from source to target; empty when no path exists
    pub path: Vec<usize>,

    /// Sum of edge weights along `path`; infinity when no path exists
    pub distance: W,
}

impl<W> ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The "no path" result: empty path, infinite distance
    pub fn unreachable() -> Self {
        ShortestPath {
            path: Vec::new(),
            distance: W::infinity(),
        }
    }

    /// Returns true if a path was found
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Trait for shortest path algorithms
///
/// Edge weights must be non-negative. This is a precondition, not something the
/// algorithms check: negative weights give unspecified results.
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute distances from `source` to every vertex.
    /// Returns an empty map if `source` is not in the graph.
    fn distances_from(&self, graph: &G, source: usize) -> DistanceMap<W>;

    /// Compute a minimum-weight path from `source` to `target`.
    /// Missing vertices and unreachable targets both yield [`ShortestPath::unreachable`].
    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> ShortestPath<W>;
}

/// Walks predecessor links back from `target` to `source`
///
/// Returns `None` if `target` has no predecessor chain leading to `source`.
pub fn reconstruct_path(
    predecessors: &HashMap<usize, usize>,
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    if source == target {
        return Some(vec![source]);
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        current = *predecessors.get(&current)?;
        path.push(current);

        // A predecessor tree never has more links than vertices
        if path.len() > predecessors.len() + 1 {
            return None;
        }
    }

    path.reverse();
    Some(path)
}
