use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// The two graph variants sharing the adjacency-list representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// How `add_edge` writes adjacency entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// One entry, on the source node
    Single,
    /// One entry on each endpoint, same weight
    Mirrored,
}

/// How `has_loop` searches for a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDetection {
    /// A DFS from every node, looking for a node already on the current path
    PathStack,
    /// A single DFS per component, merging endpoints in a disjoint set
    DisjointSet,
}

impl GraphKind {
    pub fn edge_insertion(self) -> EdgeInsertion {
        match self {
            GraphKind::Directed => EdgeInsertion::Single,
            GraphKind::Undirected => EdgeInsertion::Mirrored,
        }
    }

    pub fn cycle_detection(self) -> CycleDetection {
        match self {
            GraphKind::Directed => CycleDetection::PathStack,
            GraphKind::Undirected => CycleDetection::DisjointSet,
        }
    }

    /// Number of adjacency entries stored per logical edge
    pub fn entries_per_edge(self) -> usize {
        match self.edge_insertion() {
            EdgeInsertion::Single => 1,
            EdgeInsertion::Mirrored => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
        }
    }
}

impl Default for GraphKind {
    fn default() -> Self {
        GraphKind::Directed
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            _ => Err(Error::UnsupportedGraphType(s.to_string())),
        }
    }
}
