pub mod priority_queue;
pub mod union_find;

pub use priority_queue::MinFrontier;
pub use union_find::DisjointSet;
