//! Minimum-cost spanning trees of undirected graphs.
//!
//! Both algorithms grow a fresh undirected [`Graph`] and stop as soon as it
//! holds every node of the source graph and exactly one edge fewer than that,
//! the defining shape of a spanning tree. The source graph must be connected:
//! on a disconnected graph the loop runs out of usable edges first and the
//! tree returned does not span it (see [`SpanningTree::is_spanning`]).
//! When no edge can be used at all, both return the first node on its own.

use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::algorithm::SpanningTreeAlgorithm;
use crate::data_structures::DisjointSet;
use crate::graph::{Graph, GraphKind, GraphStore};
use crate::Result;

/// A spanning tree together with the sum of its edge weights
#[derive(Debug, Clone)]
pub struct SpanningTree {
    pub tree: Graph,
    pub cost: f64,
    /// Node count of the graph the tree was built from
    order: usize,
}

impl SpanningTree {
    /// True when the tree holds every source node and one edge fewer
    pub fn is_spanning(&self) -> bool {
        spans(&self.tree, self.order)
    }

    /// Node count of the graph the tree was built from
    pub fn source_order(&self) -> usize {
        self.order
    }

    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }
}

fn spans(tree: &Graph, order: usize) -> bool {
    match order {
        0 => tree.node_count() == 0,
        _ => tree.node_count() == order && tree.edge_count() == order - 1,
    }
}

/// Accumulates the tree while an algorithm picks edges
struct TreeBuilder<'a> {
    source: &'a GraphStore,
    tree: Graph,
    included: Vec<bool>,
    members: Vec<usize>,
    cost: f64,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a GraphStore) -> Self {
        TreeBuilder {
            source,
            tree: Graph::undirected(),
            included: vec![false; source.node_count()],
            members: Vec::new(),
            cost: 0.0,
        }
    }

    /// Copies a source node, with its attributes, into the tree
    fn include(&mut self, position: usize) -> Result<()> {
        if self.included[position] {
            return Ok(());
        }
        let source = self.source;
        let key = source.key_at(position);
        let attributes = source.get_attr(key)?.clone();
        self.tree.add_node(key, Some(attributes))?;
        self.included[position] = true;
        self.members.push(position);
        Ok(())
    }

    fn connect(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        self.include(from)?;
        self.include(to)?;
        let source = self.source;
        let (a, b) = (source.key_at(from), source.key_at(to));
        self.tree.add_edge(a, b, weight)?;
        self.cost += weight;
        debug!("Spanning tree edge {} - {} ({})", a, b, weight);
        Ok(())
    }

    fn is_complete(&self) -> bool {
        spans(&self.tree, self.source.node_count())
    }

    fn finish(mut self, algorithm: &str) -> Result<SpanningTree> {
        if self.members.is_empty() && !self.source.is_empty() {
            self.include(0)?;
        }
        if !self.is_complete() {
            warn!(
                "{}: graph is disconnected, tree covers {} of {} nodes",
                algorithm,
                self.tree.node_count(),
                self.source.node_count()
            );
        }
        Ok(SpanningTree {
            tree: self.tree,
            cost: self.cost,
            order: self.source.node_count(),
        })
    }
}

const UNDIRECTED_ONLY: &str = "spanning trees are only defined for undirected graphs";

/// Prim's algorithm.
///
/// Seeds the tree with a cheapest edge of the graph, then repeatedly adds the
/// cheapest edge from any tree node to a node outside the tree. Each round
/// scans the adjacency of every tree node, so the total cost is O(V * E).
#[derive(Debug, Default)]
pub struct Prim;

impl Prim {
    pub fn new() -> Self {
        Prim
    }
}

impl SpanningTreeAlgorithm for Prim {
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree> {
        graph.require_kind(GraphKind::Undirected, UNDIRECTED_ONLY)?;
        let store = graph.store();
        let mut builder = TreeBuilder::new(store);
        let Some((from, to, weight)) = cheapest_edge(store) else {
            return builder.finish(self.name());
        };
        builder.connect(from, to, weight)?;

        while !builder.is_complete() {
            let mut best: Option<(usize, usize, f64)> = None;
            for &member in &builder.members {
                for &(next, weight) in store.adjacency_at(member) {
                    if builder.included[next] {
                        continue;
                    }
                    if best.map_or(true, |(_, _, lowest)| weight < lowest) {
                        best = Some((member, next, weight));
                    }
                }
            }

            let Some((from, to, weight)) = best else {
                break;
            };
            builder.connect(from, to, weight)?;
        }

        builder.finish(self.name())
    }
}

/// First cheapest non-loop entry in insertion order
fn cheapest_edge(store: &GraphStore) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for from in 0..store.node_count() {
        for &(to, weight) in store.adjacency_at(from) {
            if from != to && best.map_or(true, |(_, _, lowest)| weight < lowest) {
                best = Some((from, to, weight));
            }
        }
    }
    best
}

/// Kruskal's algorithm.
///
/// Takes every logical edge once, sorts them by weight (stable, so equal
/// weights keep insertion order) and adds each edge whose endpoints are still
/// in different sets of a [`DisjointSet`], merging those sets. An edge whose
/// endpoints already share a set would close a cycle and is skipped.
#[derive(Debug, Default)]
pub struct Kruskal;

impl Kruskal {
    pub fn new() -> Self {
        Kruskal
    }
}

impl SpanningTreeAlgorithm for Kruskal {
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree> {
        graph.require_kind(GraphKind::Undirected, UNDIRECTED_ONLY)?;
        let store = graph.store();
        let mut builder = TreeBuilder::new(store);

        // An entry and its mirror are one edge: keep the copy stored on the
        // endpoint inserted first. Self loops never join two sets.
        let mut edges: Vec<(usize, usize, f64)> = (0..store.node_count())
            .flat_map(|from| {
                store
                    .adjacency_at(from)
                    .iter()
                    .filter(move |&&(to, _)| from < to)
                    .map(move |&(to, weight)| (from, to, weight))
            })
            .collect();
        edges.sort_by_key(|&(_, _, weight)| OrderedFloat(weight));

        let mut sets = DisjointSet::create(store.keys());
        for (from, to, weight) in edges {
            if builder.is_complete() {
                break;
            }
            let (a, b) = (store.key_at(from), store.key_at(to));
            if sets.is_disjoint(a, b)? {
                sets.union(a, b)?;
                builder.connect(from, to, weight)?;
            }
        }

        builder.finish(self.name())
    }
}
