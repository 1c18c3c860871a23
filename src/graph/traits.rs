use std::fmt::Debug;

use crate::graph::Attributes;
use crate::Result;

/// Read access to a weighted graph keyed by node name.
///
/// Traversals and the shortest path search are written against this trait so
/// they run on a bare [`GraphStore`](crate::graph::GraphStore) as well as on a
/// [`Graph`](crate::graph::Graph).
pub trait GraphView: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the node keys in insertion order
    fn node_keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns true if a node with this key exists
    fn has_node(&self, key: &str) -> bool;

    /// Returns the adjacency entries of a node as `(destination, weight)` pairs
    fn outgoing_edges(&self, key: &str) -> Result<Box<dyn Iterator<Item = (&str, f64)> + '_>>;

    /// Gets the weight of the first edge from `from` to `to`
    fn get_edge_weight(&self, from: &str, to: &str) -> Result<f64>;

    /// Insertion position of a node, if present
    fn index_of(&self, key: &str) -> Option<usize>;

    /// Key of the node at `index`; `index` must come from this graph
    fn key_of(&self, index: usize) -> &str;

    /// Destination positions of the adjacency entries at `index`
    fn adjacent_indices(&self, index: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}

/// Append-only mutation of a graph
pub trait MutableGraph: GraphView {
    /// Adds a node, failing if the key is taken
    fn add_node(&mut self, key: &str, attributes: Option<Attributes>) -> Result<()>;

    /// Connects two existing nodes
    fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()>;

    /// Replaces the attributes of a node
    fn set_attr(&mut self, key: &str, attributes: Attributes) -> Result<()>;
}
