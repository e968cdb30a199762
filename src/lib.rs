//! Graph Lab - interactive graph editing with classic graph algorithms
//!
//! The core of this crate is a small library of graph algorithms operating on a
//! caller-owned, undirected, weighted graph:
//!
//! - shortest path (Dijkstra)
//! - minimum spanning tree / forest (Kruskal)
//! - vertex coloring (largest-first greedy)
//! - Eulerian tour (Hierholzer)
//! - Hamiltonian cycle (heuristic only, see [`algorithm::heuristic`])
//! - maximum matching (Edmonds blossom)
//!
//! The algorithms borrow the graph for the duration of a call and never mutate it.
//! The [`web`] module wraps them in an HTTP editing service where a front end adds
//! and removes nodes and edges and asks for results to highlight.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{
    coloring::vertex_coloring, components::connected_components, dijkstra::shortest_path,
    dijkstra::Dijkstra, euler::eulerian_tour, heuristic::hamiltonian_cycle,
    matching::maximum_matching, spanning_tree::minimum_spanning_tree, DistanceMap,
    ShortestPath, ShortestPathAlgorithm,
};
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Self-loops are not allowed: {0}")]
    SelfLoop(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Missing parameter `{parameter}` for {algorithm}")]
    MissingParameter {
        algorithm: &'static str,
        parameter: &'static str,
    },

    #[error("Unknown graph type: {0}")]
    UnknownGraphType(String),

    #[error("Session not found: {0}")]
    SessionNotFound(uuid::Uuid),

    #[error("Session limit of {0} reached")]
    SessionLimitReached(usize),

    #[error("Graph of {requested} nodes exceeds the limit of {limit}")]
    GraphTooLarge { requested: usize, limit: usize },

    #[error("Grid width {width} is out of range for {node_count} nodes")]
    InvalidGridWidth { width: usize, node_count: usize },

    #[error("Session store lock poisoned")]
    LockPoisoned,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
