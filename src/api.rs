//! Free-function entry points over an explicit graph handle.
//!
//! Each function forwards to [`Graph`] or to one of the algorithm types; the
//! only logic here is rejecting operations on the wrong graph variant.

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::mst::{Kruskal, Prim, SpanningTree};
use crate::algorithm::paths::{Path, PathFinder};
use crate::algorithm::traversal::{self, TraversalStrategy, WalkOrder};
use crate::algorithm::{ShortestPathResult, SpanningTreeAlgorithm};
use crate::graph::{Attributes, Graph, GraphKind, GraphSnapshot, Neighbors};
use crate::Result;

/// Creates an empty graph of the given kind
pub fn init_graph(kind: GraphKind) -> Graph {
    Graph::new(kind)
}

/// Creates an empty graph from a type name, `"directed"` or `"undirected"`
pub fn init_graph_named(kind: &str) -> Result<Graph> {
    Ok(Graph::new(kind.parse()?))
}

pub fn add_node(graph: &mut Graph, key: &str, attributes: Option<Attributes>) -> Result<()> {
    graph.add_node(key, attributes)
}

pub fn add_edge(graph: &mut Graph, source: &str, destination: &str, weight: f64) -> Result<()> {
    graph.add_edge(source, destination, weight)
}

pub fn get_all_nodes(graph: &Graph) -> Vec<String> {
    graph.get_all_nodes()
}

pub fn count_edges(graph: &Graph) -> usize {
    graph.edge_count()
}

pub fn as_dict(graph: &Graph) -> GraphSnapshot {
    graph.as_dict()
}

/// Copies `other` into `graph` and connects `source` to `destination`
pub fn connect_graph(graph: &mut Graph, other: &Graph, source: &str, destination: &str, weight: f64) -> Result<()> {
    graph.connect_graph(other, source, destination, weight)
}

/// Adjacent nodes of `key`; weights are included unless `only_names` is set
pub fn adjacent_nodes<'a>(graph: &'a Graph, key: &str, only_names: bool) -> Result<Neighbors<'a>> {
    graph.neighbors(key, !only_names)
}

pub fn get_edge_weight(graph: &Graph, source: &str, destination: &str) -> Result<f64> {
    graph.get_edge_weight(source, destination)
}

/// All paths from `source` to `destination`; directed graphs only
pub fn get_paths_to_node(graph: &Graph, destination: &str, source: &str) -> Result<Vec<Path>> {
    PathFinder::new().find_all(graph, destination, source)
}

/// `(true, cycle)` for the first cycle found, `(false, [])` otherwise
pub fn has_loop(graph: &Graph) -> Result<(bool, Vec<String>)> {
    graph.has_loop()
}

/// Shortest distance from `start` (or the first node) to every node
pub fn find_shortest_path_dijkstra(graph: &Graph, start: Option<&str>) -> Result<ShortestPathResult> {
    Dijkstra::new().run(graph, start)
}

/// Recursive depth-first walk from `start`
pub fn walk_dfs<F>(graph: &Graph, start: &str, visit: F) -> Result<()>
where
    F: FnMut(&str),
{
    traversal::walk(graph, start, WalkOrder::DepthFirst, TraversalStrategy::Recursive, visit)
}

/// Recursive breadth-first walk from `start`
pub fn walk_bfs<F>(graph: &Graph, start: &str, visit: F) -> Result<()>
where
    F: FnMut(&str),
{
    traversal::walk(graph, start, WalkOrder::BreadthFirst, TraversalStrategy::Recursive, visit)
}

/// Walk with the strategy given by name, `"recursive"` or `"iterative"`
pub fn walk_with_strategy<F>(graph: &Graph, start: &str, order: WalkOrder, strategy: &str, visit: F) -> Result<()>
where
    F: FnMut(&str),
{
    traversal::walk(graph, start, order, strategy.parse()?, visit)
}

/// Minimum spanning tree by Prim's algorithm; undirected graphs only
pub fn min_cost_spanning_tree_prims(graph: &Graph) -> Result<SpanningTree> {
    Prim::new().spanning_tree(graph)
}

/// Minimum spanning tree by Kruskal's algorithm; undirected graphs only
pub fn min_cost_spanning_tree_kruskal(graph: &Graph) -> Result<SpanningTree> {
    Kruskal::new().spanning_tree(graph)
}
