use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for label-setting searches
///
/// There is no decrease-key: a vertex whose tentative distance improves is simply
/// pushed again. Callers skip stale entries when they are popped, because the
/// first extraction of a vertex always carries its final distance.
#[derive(Debug)]
pub struct MinFrontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for MinFrontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> MinFrontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        MinFrontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_ascending_priority_and_keeps_duplicates() {
        let mut frontier = MinFrontier::new();
        frontier.push(3usize, OrderedFloat(5.0));
        frontier.push(1, OrderedFloat(2.0));
        frontier.push(3, OrderedFloat(1.5));
        assert_eq!(frontier.len(), 3);

        assert_eq!(frontier.pop(), Some((3, OrderedFloat(1.5))));
        assert_eq!(frontier.pop(), Some((1, OrderedFloat(2.0))));
        assert_eq!(frontier.pop(), Some((3, OrderedFloat(5.0))));
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
