//! Graph Engine - classic graph algorithms over string-keyed adjacency lists
//!
//! This library provides directed and undirected graphs whose nodes are
//! identified by caller-supplied string keys, together with the algorithms
//! usually taught alongside them: depth-first and breadth-first traversal,
//! all-paths enumeration, cycle detection, Dijkstra's single-source shortest
//! path, and Prim's and Kruskal's minimum spanning trees.
//!
//! Graphs are append-only: nodes and edges can be added but never removed.
//! An undirected edge is stored as two mirrored adjacency entries and counted
//! once.

pub mod algorithm;
pub mod api;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    mst::{Kruskal, Prim, SpanningTree},
    paths::{Path, PathFinder},
    traversal::{TraversalStrategy, Walk, WalkOrder},
    ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm,
};
pub use data_structures::DisjointSet;
/// Re-export main types for convenient use
pub use graph::{Attributes, Graph, GraphKind, GraphSnapshot, GraphStore, Neighbors};

use std::fmt;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Node with key [{0}] does not exist in the graph")]
    NodeNotFound(String),

    #[error("Node with key [{adjacent}] is not an adjacent node to [{node}]")]
    AdjacentNodeNotFound { node: String, adjacent: String },

    #[error("Node with key [{0}] already exists in the graph")]
    DuplicateNode(String),

    #[error("{kind} graph does not support this operation - {reason}")]
    UnsupportedOperation { kind: GraphKind, reason: &'static str },

    #[error("Graph type [{0}] is not supported")]
    UnsupportedGraphType(String),

    #[error("Traversal strategy [{0}] is not supported, expected `recursive` or `iterative`")]
    InvalidTraversalStrategy(String),

    #[error("Key [{0}] is not registered in the disjoint set")]
    NotInSet(String),

    #[error("Graph has no nodes to start from")]
    EmptyGraph,

    #[error("Negative edge weight {weight} on edge [{from}] -> [{to}]")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Graph contains a cycle through {0:?}, path enumeration would not terminate")]
    CyclicGraph(Vec<String>),
}

/// Broad classes of failure an [`Error`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced node or adjacency entry does not exist
    NotFound,
    /// A node key is already taken
    Conflict,
    /// The operation is not defined for this graph variant
    UnsupportedForGraphType,
    /// An unrecognized graph type or traversal strategy was requested
    InvalidConfiguration,
    /// The input breaks a documented precondition of the algorithm
    PreconditionViolation,
}

impl Error {
    /// Returns the class of failure this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NodeNotFound(_) | Error::AdjacentNodeNotFound { .. } | Error::NotInSet(_) => {
                ErrorKind::NotFound
            }
            Error::DuplicateNode(_) => ErrorKind::Conflict,
            Error::UnsupportedOperation { .. } => ErrorKind::UnsupportedForGraphType,
            Error::UnsupportedGraphType(_) | Error::InvalidTraversalStrategy(_) => {
                ErrorKind::InvalidConfiguration
            }
            Error::EmptyGraph | Error::NegativeWeight { .. } | Error::CyclicGraph(_) => {
                ErrorKind::PreconditionViolation
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::UnsupportedForGraphType => "unsupported for graph type",
            ErrorKind::InvalidConfiguration => "invalid configuration",
            ErrorKind::PreconditionViolation => "precondition violation",
        };
        f.write_str(name)
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
