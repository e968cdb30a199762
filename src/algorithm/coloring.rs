use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;

/// Greedy vertex coloring with the largest-first strategy
///
/// Vertices are visited by descending degree (ties by ascending ID) and each gets the
/// smallest color index not used by an already colored neighbor. The coloring is
/// always proper but is only an upper bound on the chromatic number.
pub fn vertex_coloring<W, G>(graph: &G) -> BTreeMap<usize, usize>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut order: Vec<usize> = graph.vertices().collect();
    order.sort_by_key(|&v| (Reverse(graph.degree(v)), v));

    let mut colors = BTreeMap::new();

    for v in order {
        let taken: HashSet<usize> = graph
            .neighbors(v)
            .filter_map(|(u, _)| colors.get(&u).copied())
            .collect();

        let color = (0..).find(|c| !taken.contains(c)).unwrap_or_default();
        colors.insert(v, color);
    }

    debug!(
        "largest-first coloring used {} colors for {} vertices",
        color_count(&colors),
        colors.len()
    );

    colors
}

/// Number of distinct colors in a coloring
pub fn color_count(colors: &BTreeMap<usize, usize>) -> usize {
    colors.values().collect::<HashSet<_>>().len()
}
