pub mod cycle;
pub mod dijkstra;
pub mod mst;
pub mod paths;
pub mod traits;
pub mod traversal;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm};
