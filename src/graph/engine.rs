use std::collections::HashMap;

use crate::algorithm::cycle;
use crate::graph::kind::{CycleDetection, EdgeInsertion, GraphKind};
use crate::graph::snapshot::GraphSnapshot;
use crate::graph::store::{Attributes, GraphStore, Neighbors, Node};
use crate::graph::traits::{GraphView, MutableGraph};
use crate::{Error, Result};

/// A directed or undirected graph.
///
/// Both variants share one [`GraphStore`]; the [`GraphKind`] picked at
/// construction decides whether `add_edge` writes one entry or a mirrored
/// pair, how edges are counted, and which cycle detector `has_loop` runs.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    store: GraphStore,
}

impl Graph {
    /// Creates a new empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            store: GraphStore::new(),
        }
    }

    pub fn directed() -> Self {
        Graph::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Graph::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// The underlying adjacency storage
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Fails with `UnsupportedOperation` unless this graph is of `kind`
    pub(crate) fn require_kind(&self, kind: GraphKind, reason: &'static str) -> Result<()> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(Error::UnsupportedOperation {
                kind: self.kind,
                reason,
            })
        }
    }

    pub fn add_node(&mut self, key: impl Into<String>, attributes: Option<Attributes>) -> Result<()> {
        self.store.add_node(key, attributes)
    }

    /// Connects two existing nodes.
    ///
    /// On an undirected graph the mirrored `destination -> source` entry is
    /// written too, with the same weight.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: f64) -> Result<()> {
        self.store.add_edge(source, destination, weight)?;
        if self.kind.edge_insertion() == EdgeInsertion::Mirrored {
            self.store.add_edge(destination, source, weight)?;
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    /// Number of logical edges; mirrored pairs count once
    pub fn edge_count(&self) -> usize {
        self.store.adjacency_entries() / self.kind.entries_per_edge()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.store.keys()
    }

    pub fn get_all_nodes(&self) -> Vec<String> {
        self.store.get_all_nodes()
    }

    pub fn get_node(&self, key: &str) -> Result<&Node> {
        self.store.get_node(key)
    }

    pub fn get_attr(&self, key: &str) -> Result<&Attributes> {
        self.store.get_attr(key)
    }

    pub fn attr_mut(&mut self, key: &str) -> Result<&mut Attributes> {
        self.store.attr_mut(key)
    }

    pub fn set_attr(&mut self, key: &str, attributes: Attributes) -> Result<()> {
        self.store.set_attr(key, attributes)
    }

    pub fn find_adjacent(&self, key: &str) -> Result<Vec<&str>> {
        self.store.find_adjacent(key)
    }

    pub fn find_adjacent_weighted(&self, key: &str) -> Result<Vec<(&str, f64)>> {
        self.store.find_adjacent_weighted(key)
    }

    pub fn neighbors(&self, key: &str, with_weights: bool) -> Result<Neighbors<'_>> {
        self.store.neighbors(key, with_weights)
    }

    pub fn get_edge_weight(&self, source: &str, destination: &str) -> Result<f64> {
        self.store.get_edge_weight(source, destination)
    }

    /// Logical edges as `(source, destination, weight)`.
    ///
    /// For an undirected graph each mirrored pair is reported once, from the
    /// endpoint inserted first.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        let mirrored = self.kind.edge_insertion() == EdgeInsertion::Mirrored;
        let mut pending_self_loops = HashMap::new();
        self.store.edges().filter(move |&(source, destination, _)| {
            if !mirrored {
                return true;
            }
            if source == destination {
                // A self loop is stored as two entries on the same node.
                let seen = pending_self_loops.entry(source).or_insert(false);
                *seen = !*seen;
                return *seen;
            }
            self.store.position(source) < self.store.position(destination)
        })
    }

    /// Absorbs all nodes and edges of `other`, then connects
    /// `source` to `destination`.
    ///
    /// Keys present in both graphs take the donor's attributes and adjacency.
    /// `other` is left as it was. Mixing graph kinds is rejected.
    pub fn connect_graph(&mut self, other: &Graph, source: &str, destination: &str, weight: f64) -> Result<()> {
        self.require_kind(other.kind, "cannot absorb a graph of a different kind")?;
        self.store.merge_from(&other.store, source, destination, weight)?;
        if self.kind.edge_insertion() == EdgeInsertion::Mirrored {
            self.store.add_edge(destination, source, weight)?;
        }
        Ok(())
    }

    /// Structural copy of the graph
    pub fn as_dict(&self) -> GraphSnapshot {
        self.store.snapshot()
    }

    /// Looks for a cycle and returns the nodes forming the first one found
    pub fn find_cycle(&self) -> Result<Option<Vec<String>>> {
        match self.kind.cycle_detection() {
            CycleDetection::PathStack => Ok(cycle::find_directed(&self.store)),
            CycleDetection::DisjointSet => cycle::find_undirected(&self.store),
        }
    }

    /// `(true, cycle)` for the first cycle found, `(false, [])` otherwise
    pub fn has_loop(&self) -> Result<(bool, Vec<String>)> {
        Ok(match self.find_cycle()? {
            Some(nodes) => (true, nodes),
            None => (false, Vec::new()),
        })
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.store.position(key)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new(GraphKind::default())
    }
}

impl GraphView for Graph {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }

    fn node_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys())
    }

    fn has_node(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn outgoing_edges(&self, key: &str) -> Result<Box<dyn Iterator<Item = (&str, f64)> + '_>> {
        GraphView::outgoing_edges(&self.store, key)
    }

    fn get_edge_weight(&self, from: &str, to: &str) -> Result<f64> {
        Graph::get_edge_weight(self, from, to)
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.store.index_of(key)
    }

    fn key_of(&self, index: usize) -> &str {
        self.store.key_of(index)
    }

    fn adjacent_indices(&self, index: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        self.store.adjacent_indices(index)
    }
}

impl MutableGraph for Graph {
    fn add_node(&mut self, key: &str, attributes: Option<Attributes>) -> Result<()> {
        Graph::add_node(self, key, attributes)
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        Graph::add_edge(self, from, to, weight)
    }

    fn set_attr(&mut self, key: &str, attributes: Attributes) -> Result<()> {
        Graph::set_attr(self, key, attributes)
    }
}
