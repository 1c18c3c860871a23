pub mod engine;
pub mod generators;
pub mod kind;
pub mod snapshot;
pub mod store;
pub mod traits;

pub use engine::Graph;
pub use kind::{CycleDetection, EdgeInsertion, GraphKind};
pub use snapshot::{GraphSnapshot, NodeSnapshot};
pub use store::{Attributes, GraphStore, Neighbors, Node};
pub use traits::{GraphView, MutableGraph};
