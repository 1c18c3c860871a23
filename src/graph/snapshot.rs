use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::graph::Attributes;

/// Structural dump of a graph: node key -> attributes and adjacency entries.
///
/// Serializes as a map in node insertion order, each adjacency entry as a
/// single-key object `{ "destination": weight }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSnapshot {
    nodes: Vec<(String, NodeSnapshot)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub attributes: Attributes,
    #[serde(serialize_with = "serialize_adjacency")]
    pub adjacent_nodes: Vec<(String, f64)>,
}

impl GraphSnapshot {
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = (String, NodeSnapshot)>) -> Self {
        GraphSnapshot {
            nodes: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&NodeSnapshot> {
        self.nodes
            .iter()
            .find(|(node, _)| node == key)
            .map(|(_, snapshot)| snapshot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeSnapshot)> + '_ {
        self.nodes.iter().map(|(key, snapshot)| (key.as_str(), snapshot))
    }
}

impl Serialize for GraphSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for (key, node) in &self.nodes {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

fn serialize_adjacency<S: Serializer>(entries: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error> {
    struct Entry<'a>(&'a str, f64);

    impl Serialize for Entry<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(self.0, &self.1)?;
            map.end()
        }
    }

    serializer.collect_seq(entries.iter().map(|(key, weight)| Entry(key, *weight)))
}
