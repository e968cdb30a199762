pub mod traits;
pub mod dijkstra;
pub mod components;
pub mod spanning_tree;
pub mod coloring;
pub mod euler;
pub mod heuristic;
pub mod matching;

pub use traits::{DistanceMap, ShortestPath, ShortestPathAlgorithm};
