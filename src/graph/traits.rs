use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted undirected graph
///
/// This is the capability interface the algorithms are written against. Edges are
/// symmetric: `neighbors(u)` yields `(v, w)` exactly when `neighbors(v)` yields `(u, w)`.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of (undirected) edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertex IDs, in ascending order
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over the neighbors of a vertex and the connecting edge weights
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns the number of edges incident to a vertex (0 for unknown vertices)
    fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.get_edge_weight(u, v).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, u: usize, v: usize) -> Option<W>;

    /// Returns every edge once as `(u, v, weight)` with `u < v`
    fn edges(&self) -> Vec<(usize, usize, W)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in self.vertices() {
            for (v, weight) in self.neighbors(u) {
                if u < v {
                    edges.push((u, v, weight));
                }
            }
        }
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        edges
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Removes a vertex and its incident edges from the graph
    fn remove_vertex(&mut self, vertex: usize) -> bool;

    /// Adds an undirected edge between vertices with the given weight.
    /// An existing edge has its weight replaced.
    fn add_edge(&mut self, u: usize, v: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, u: usize, v: usize, weight: W) -> bool;
}
