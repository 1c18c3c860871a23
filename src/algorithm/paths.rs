use std::fmt;

use log::debug;

use crate::graph::{Graph, GraphKind, GraphStore};
use crate::{Error, Result};

/// An ordered sequence of node keys from a source to a destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<String>);

impl Path {
    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Path {
    fn from(nodes: Vec<String>) -> Self {
        Path(nodes)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Enumerates every path between two nodes of a directed graph.
///
/// The search does not remember visited nodes, since a node may lie on many
/// paths; it only keeps the path currently being explored. On a cyclic graph
/// that search never ends, so by default the graph is checked for cycles first
/// and rejected with [`Error::CyclicGraph`]. Setting a maximum depth replaces
/// that check with a bound on the number of nodes per path.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    max_depth: Option<usize>,
}

impl PathFinder {
    pub fn new() -> Self {
        PathFinder::default()
    }

    /// Prune paths longer than `max_depth` nodes and allow cyclic graphs
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Returns every path from `source` to `destination`, in discovery order
    pub fn find_all(&self, graph: &Graph, destination: &str, source: &str) -> Result<Vec<Path>> {
        graph.require_kind(GraphKind::Directed, "the graph may lead to infinite paths")?;
        for key in [source, destination] {
            if !graph.contains(key) {
                return Err(Error::NodeNotFound(key.to_string()));
            }
        }

        if self.max_depth.is_none() {
            if let Some(cycle) = graph.find_cycle()? {
                return Err(Error::CyclicGraph(cycle));
            }
        }

        let mut paths = Vec::new();
        let mut stack = Vec::new();
        self.collect(graph.store(), source, destination, &mut stack, &mut paths)?;
        debug!("Found {} paths from {} to {}", paths.len(), source, destination);
        Ok(paths)
    }

    fn collect<'a>(
        &self,
        store: &'a GraphStore,
        node: &'a str,
        destination: &str,
        stack: &mut Vec<&'a str>,
        paths: &mut Vec<Path>,
    ) -> Result<()> {
        stack.push(node);

        if node == destination {
            paths.push(Path(stack.iter().map(|key| key.to_string()).collect()));
        } else if self.max_depth.map_or(true, |depth| stack.len() < depth) {
            for next in store.find_adjacent(node)? {
                self.collect(store, next, destination, stack, paths)?;
            }
        }

        stack.pop();
        Ok(())
    }
}
