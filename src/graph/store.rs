use std::collections::HashMap;

use crate::graph::snapshot::{GraphSnapshot, NodeSnapshot};
use crate::graph::traits::{GraphView, MutableGraph};
use crate::{Error, Result};

/// Arbitrary per-node data, also used by callers to stash algorithm output
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A node with its attributes and outgoing adjacency entries
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: String,
    attributes: Attributes,
    /// Outgoing entries: (position of destination, weight)
    adjacency: Vec<(usize, f64)>,
}

impl Node {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Number of adjacency entries on this node
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// Adjacent nodes of a node, with or without edge weights
#[derive(Debug, Clone, PartialEq)]
pub enum Neighbors<'a> {
    Keys(Vec<&'a str>),
    Weighted(Vec<(&'a str, f64)>),
}

impl Neighbors<'_> {
    pub fn len(&self) -> usize {
        match self {
            Neighbors::Keys(keys) => keys.len(),
            Neighbors::Weighted(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destination keys, dropping weights if present
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Neighbors::Keys(keys) => keys.clone(),
            Neighbors::Weighted(entries) => entries.iter().map(|(key, _)| *key).collect(),
        }
    }
}

/// Adjacency-list storage shared by both graph variants.
///
/// Nodes live in insertion order and are found by key through a hash index,
/// so node lookup is O(1) on average and adjacency lookup is O(out-degree).
/// Every `add_edge` appends exactly one entry; mirroring for undirected graphs
/// is decided by [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node key -> position in `nodes`
    index: HashMap<String, usize>,
    nodes: Vec<Node>,
}

impl GraphStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        GraphStore::default()
    }

    /// Creates an empty store with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        GraphStore {
            index: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
        }
    }

    pub fn add_node(&mut self, key: impl Into<String>, attributes: Option<Attributes>) -> Result<()> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(Error::DuplicateNode(key));
        }
        self.insert_node(key, attributes.unwrap_or_default());
        Ok(())
    }

    fn insert_node(&mut self, key: String, attributes: Attributes) -> usize {
        let position = self.nodes.len();
        self.index.insert(key.clone(), position);
        self.nodes.push(Node {
            key,
            attributes,
            adjacency: Vec::new(),
        });
        position
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Node keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.key.as_str())
    }

    pub fn get_all_nodes(&self) -> Vec<String> {
        self.keys().map(str::to_string).collect()
    }

    pub fn get_node(&self, key: &str) -> Result<&Node> {
        let position = self.require(key)?;
        Ok(&self.nodes[position])
    }

    pub fn get_attr(&self, key: &str) -> Result<&Attributes> {
        self.get_node(key).map(Node::attributes)
    }

    pub fn attr_mut(&mut self, key: &str) -> Result<&mut Attributes> {
        let position = self.require(key)?;
        Ok(&mut self.nodes[position].attributes)
    }

    pub fn set_attr(&mut self, key: &str, attributes: Attributes) -> Result<()> {
        *self.attr_mut(key)? = attributes;
        Ok(())
    }

    /// Appends a single `source -> destination` entry.
    ///
    /// Both endpoints are checked before anything is written.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: f64) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(destination)?;
        self.nodes[from].adjacency.push((to, weight));
        Ok(())
    }

    /// Destination keys of the entries on `key`, in insertion order
    pub fn find_adjacent(&self, key: &str) -> Result<Vec<&str>> {
        Ok(self.entries(key)?.map(|(destination, _)| destination).collect())
    }

    /// `(destination, weight)` pairs of the entries on `key`
    pub fn find_adjacent_weighted(&self, key: &str) -> Result<Vec<(&str, f64)>> {
        Ok(self.entries(key)?.collect())
    }

    pub fn neighbors(&self, key: &str, with_weights: bool) -> Result<Neighbors<'_>> {
        if with_weights {
            self.find_adjacent_weighted(key).map(Neighbors::Weighted)
        } else {
            self.find_adjacent(key).map(Neighbors::Keys)
        }
    }

    fn entries(&self, key: &str) -> Result<impl Iterator<Item = (&str, f64)> + '_> {
        let position = self.require(key)?;
        Ok(self.nodes[position]
            .adjacency
            .iter()
            .map(move |&(to, weight)| (self.nodes[to].key.as_str(), weight)))
    }

    /// Weight of the first entry from `source` to `destination`
    pub fn get_edge_weight(&self, source: &str, destination: &str) -> Result<f64> {
        self.entries(source)?
            .find(|(key, _)| *key == destination)
            .map(|(_, weight)| weight)
            .ok_or_else(|| Error::AdjacentNodeNotFound {
                node: source.to_string(),
                adjacent: destination.to_string(),
            })
    }

    /// Total number of adjacency entries across all nodes
    pub fn adjacency_entries(&self) -> usize {
        self.nodes.iter().map(|node| node.adjacency.len()).sum()
    }

    /// Every adjacency entry as `(source, destination, weight)`, grouped by source
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.adjacency
                .iter()
                .map(move |&(to, weight)| (node.key.as_str(), self.nodes[to].key.as_str(), weight))
        })
    }

    /// Absorbs every node and entry of `other`, then adds one
    /// `connecting_source -> connecting_destination` entry.
    ///
    /// A key present in both stores ends up with the donor's attributes and
    /// adjacency; the receiver's entry is overwritten without complaint. Both
    /// connecting endpoints are checked against the union of the two stores
    /// before anything is written.
    pub fn merge_from(
        &mut self,
        other: &GraphStore,
        connecting_source: &str,
        connecting_destination: &str,
        weight: f64,
    ) -> Result<()> {
        for endpoint in [connecting_source, connecting_destination] {
            if !self.contains(endpoint) && !other.contains(endpoint) {
                return Err(Error::NodeNotFound(endpoint.to_string()));
            }
        }

        let remap: Vec<usize> = other
            .nodes
            .iter()
            .map(|node| match self.position(&node.key) {
                Some(position) => {
                    self.nodes[position].attributes = node.attributes.clone();
                    position
                }
                None => self.insert_node(node.key.clone(), node.attributes.clone()),
            })
            .collect();

        for (donor, node) in other.nodes.iter().enumerate() {
            self.nodes[remap[donor]].adjacency = node
                .adjacency
                .iter()
                .map(|&(to, weight)| (remap[to], weight))
                .collect();
        }

        self.add_edge(connecting_source, connecting_destination, weight)
    }

    /// Structural copy of the store, keyed by node in insertion order
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::from_entries(self.nodes.iter().map(|node| {
            let adjacent_nodes = node
                .adjacency
                .iter()
                .map(|&(to, weight)| (self.nodes[to].key.clone(), weight))
                .collect();
            (
                node.key.clone(),
                NodeSnapshot {
                    attributes: node.attributes.clone(),
                    adjacent_nodes,
                },
            )
        }))
    }

    /// Insertion position of a node, used for deterministic tie-breaking
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn key_at(&self, position: usize) -> &str {
        &self.nodes[position].key
    }

    pub(crate) fn adjacency_at(&self, position: usize) -> &[(usize, f64)] {
        &self.nodes[position].adjacency
    }

    fn require(&self, key: &str) -> Result<usize> {
        self.position(key)
            .ok_or_else(|| Error::NodeNotFound(key.to_string()))
    }
}

impl GraphView for GraphStore {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency_entries()
    }

    fn node_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys())
    }

    fn has_node(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn outgoing_edges(&self, key: &str) -> Result<Box<dyn Iterator<Item = (&str, f64)> + '_>> {
        Ok(Box::new(self.entries(key)?))
    }

    fn get_edge_weight(&self, from: &str, to: &str) -> Result<f64> {
        GraphStore::get_edge_weight(self, from, to)
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.position(key)
    }

    fn key_of(&self, index: usize) -> &str {
        self.key_at(index)
    }

    fn adjacent_indices(&self, index: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.adjacency_at(index).iter().map(|&(to, _)| to))
    }
}

impl MutableGraph for GraphStore {
    fn add_node(&mut self, key: &str, attributes: Option<Attributes>) -> Result<()> {
        GraphStore::add_node(self, key, attributes)
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        GraphStore::add_edge(self, from, to, weight)
    }

    fn set_attr(&mut self, key: &str, attributes: Attributes) -> Result<()> {
        GraphStore::set_attr(self, key, attributes)
    }
}
