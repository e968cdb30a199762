use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;

/// Partitions the vertices into connected components using breadth-first search
///
/// Each component is sorted ascending, and components are ordered by their smallest
/// vertex. Isolated vertices form singleton components.
pub fn connected_components<W, G>(graph: &G) -> Vec<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut seen = HashSet::with_capacity(graph.vertex_count());
    let mut components = Vec::new();

    for start in graph.vertices() {
        if !seen.insert(start) {
            continue;
        }

        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.neighbors(u) {
                if seen.insert(v) {
                    component.push(v);
                    queue.push_back(v);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Number of connected components
pub fn component_count<W, G>(graph: &G) -> usize
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    connected_components(graph).len()
}
