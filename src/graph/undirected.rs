use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Weight given to an edge when the caller does not specify one
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An undirected graph implementation using adjacency maps
///
/// Vertex IDs are handed out sequentially starting at 1 and are never reused,
/// so IDs stay stable for a front end while nodes are removed.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adjacency lists: vertex_id -> [(neighbor, weight)]
    adjacency: BTreeMap<usize, Vec<(usize, W)>>,

    /// Number of undirected edges
    edge_count: usize,

    /// ID handed out by the next call to `add_vertex`
    next_id: usize,
}

impl<W> Default for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: BTreeMap::new(),
            edge_count: 0,
            next_id: 1,
        }
    }

    /// Creates a graph with vertices `1..=vertices` and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        let mut graph = UndirectedGraph::new();
        for _ in 0..vertices {
            graph.add_vertex();
        }
        graph
    }

    /// Builds a graph with vertices `1..=vertices` and the given edges.
    /// Edges referring to unknown vertices are ignored.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = UndirectedGraph::with_vertices(vertices);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight);
        }
        graph
    }

    /// Inserts a vertex with a caller-chosen ID. Returns false if it already exists.
    pub fn insert_vertex(&mut self, vertex: usize) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        self.next_id = self.next_id.max(vertex + 1);
        true
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> W {
        self.edges()
            .into_iter()
            .fold(W::zero(), |acc, (_, _, weight)| acc + weight)
    }

    /// Removes every vertex and edge. ID assignment restarts at 1.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
        self.next_id = 1;
    }

    fn set_directed_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        let Some(edges) = self.adjacency.get_mut(&from) else {
            return false;
        };
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }

    fn detach(&mut self, from: usize, to: usize) -> bool {
        let Some(edges) = self.adjacency.get_mut(&from) else {
            return false;
        };
        let len_before = edges.len();
        edges.retain(|(target, _)| *target != to);
        len_before > edges.len()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(&vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(&vertex).map_or(0, |edges| edges.len())
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn get_edge_weight(&self, u: usize, v: usize) -> Option<W> {
        self.adjacency
            .get(&u)?
            .iter()
            .find(|(target, _)| *target == v)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.next_id;
        self.adjacency.insert(new_id, Vec::new());
        self.next_id += 1;
        new_id
    }

    fn remove_vertex(&mut self, vertex: usize) -> bool {
        let Some(edges) = self.adjacency.remove(&vertex) else {
            return false;
        };

        for (neighbor, _) in &edges {
            self.detach(*neighbor, vertex);
        }
        self.edge_count -= edges.len();

        true
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: W) -> bool {
        if u == v || !self.has_vertex(u) || !self.has_vertex(v) || weight < W::zero() {
            return false;
        }

        // Existing edge: replace the weight on both sides
        if self.set_directed_weight(u, v, weight) {
            self.set_directed_weight(v, u, weight);
            return true;
        }

        if let Some(edges) = self.adjacency.get_mut(&u) {
            edges.push((v, weight));
        }
        if let Some(edges) = self.adjacency.get_mut(&v) {
            edges.push((u, weight));
        }
        self.edge_count += 1;

        true
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let removed = self.detach(u, v);
        if removed {
            self.detach(v, u);
            self.edge_count -= 1;
        }
        removed
    }

    fn update_edge_weight(&mut self, u: usize, v: usize, weight: W) -> bool {
        if weight < W::zero() || !self.has_edge(u, v) {
            return false;
        }
        self.set_directed_weight(u, v, weight) && self.set_directed_weight(v, u, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    type G = UndirectedGraph<OrderedFloat<f64>>;

    #[test]
    fn ids_are_sequential_from_one_and_not_reused() {
        let mut graph = G::new();
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert!(graph.remove_vertex(2));
        assert_eq!(graph.add_vertex(), 3);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn edges_are_symmetric() {
        let mut graph = G::with_vertices(3);
        assert!(graph.add_edge(1, 2, OrderedFloat(2.5)));
        assert_eq!(graph.get_edge_weight(1, 2), Some(OrderedFloat(2.5)));
        assert_eq!(graph.get_edge_weight(2, 1), Some(OrderedFloat(2.5)));
        assert_eq!(graph.edge_count(), 1);

        // Re-adding replaces the weight rather than duplicating the edge
        assert!(graph.add_edge(2, 1, OrderedFloat(4.0)));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge_weight(1, 2), Some(OrderedFloat(4.0)));
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn rejects_self_loops_negative_weights_and_unknown_vertices() {
        let mut graph = G::with_vertices(2);
        assert!(!graph.add_edge(1, 1, OrderedFloat(1.0)));
        assert!(!graph.add_edge(1, 2, OrderedFloat(-1.0)));
        assert!(!graph.add_edge(1, 9, OrderedFloat(1.0)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn removing_a_vertex_drops_incident_edges() {
        let mut graph = G::from_edges(
            3,
            [
                (1, 2, OrderedFloat(1.0)),
                (2, 3, OrderedFloat(1.0)),
                (1, 3, OrderedFloat(1.0)),
            ],
        );
        assert!(graph.remove_vertex(2));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.has_edge(1, 2));
        assert!(!graph.has_edge(3, 2));
        assert_eq!(graph.edges(), vec![(1, 3, OrderedFloat(1.0))]);
    }

    #[test]
    fn remove_and_update_edges() {
        let mut graph = G::from_edges(2, [(1, 2, OrderedFloat(1.0))]);
        assert!(graph.update_edge_weight(2, 1, OrderedFloat(3.0)));
        assert_eq!(graph.total_weight(), OrderedFloat(3.0));
        assert!(graph.remove_edge(2, 1));
        assert!(!graph.remove_edge(1, 2));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.update_edge_weight(1, 2, OrderedFloat(1.0)));
    }
}
