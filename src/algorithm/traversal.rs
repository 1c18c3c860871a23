//! Depth-first and breadth-first walks.
//!
//! Every walk starts at a given node, visits each node reachable from it
//! exactly once and never touches the rest of the graph. The visitor is called
//! with the node key; it must not change the graph while the walk runs, which
//! the shared borrow already enforces.
//!
//! Recursive DFS uses the call stack, so its depth grows with the longest
//! path it follows. Recursive BFS makes one call per level, so its depth is
//! the distance to the farthest reachable node. Iterative walks are driven by
//! [`Walk`], a pull-based iterator that can also be consumed directly.
//!
//! Walks resolve the start key once and then move through node positions,
//! so no lookup can fail once the walk is under way.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::graph::GraphView;
use crate::{Error, Result};

/// Whether a walk recurses or loops over an explicit frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalStrategy {
    #[default]
    Recursive,
    Iterative,
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalStrategy::Recursive => f.write_str("recursive"),
            TraversalStrategy::Iterative => f.write_str("iterative"),
        }
    }
}

impl FromStr for TraversalStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(TraversalStrategy::Recursive),
            "iterative" => Ok(TraversalStrategy::Iterative),
            _ => Err(Error::InvalidTraversalStrategy(s.to_string())),
        }
    }
}

/// Order in which a walk expands its frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// LIFO frontier
    DepthFirst,
    /// FIFO frontier
    BreadthFirst,
}

/// Lazy walk over the nodes reachable from a start node.
///
/// Nodes are marked explored when they enter the frontier, so each one is
/// yielded once even when several paths lead to it.
#[derive(Debug)]
pub struct Walk<'a, G>
where
    G: GraphView + ?Sized,
{
    graph: &'a G,
    order: WalkOrder,
    frontier: VecDeque<usize>,
    explored: Vec<bool>,
}

impl<'a, G> Walk<'a, G>
where
    G: GraphView + ?Sized,
{
    pub fn new(graph: &'a G, start: &str, order: WalkOrder) -> Result<Self> {
        let start = resolve(graph, start)?;
        let mut explored = vec![false; graph.node_count()];
        explored[start] = true;
        Ok(Walk {
            graph,
            order,
            frontier: VecDeque::from([start]),
            explored,
        })
    }

    pub fn depth_first(graph: &'a G, start: &str) -> Result<Self> {
        Walk::new(graph, start, WalkOrder::DepthFirst)
    }

    pub fn breadth_first(graph: &'a G, start: &str) -> Result<Self> {
        Walk::new(graph, start, WalkOrder::BreadthFirst)
    }
}

impl<'a, G> Iterator for Walk<'a, G>
where
    G: GraphView + ?Sized,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = match self.order {
            WalkOrder::DepthFirst => self.frontier.pop_back()?,
            WalkOrder::BreadthFirst => self.frontier.pop_front()?,
        };

        let graph = self.graph;
        for next in graph.adjacent_indices(node) {
            if !self.explored[next] {
                self.explored[next] = true;
                self.frontier.push_back(next);
            }
        }

        Some(graph.key_of(node))
    }
}

fn resolve<G>(graph: &G, key: &str) -> Result<usize>
where
    G: GraphView + ?Sized,
{
    graph
        .index_of(key)
        .ok_or_else(|| Error::NodeNotFound(key.to_string()))
}

/// Walks the graph from `start` in the requested order and strategy
pub fn walk<G, F>(graph: &G, start: &str, order: WalkOrder, strategy: TraversalStrategy, visit: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    match (order, strategy) {
        (WalkOrder::DepthFirst, TraversalStrategy::Recursive) => walk_dfs_recursive(graph, start, visit),
        (WalkOrder::DepthFirst, TraversalStrategy::Iterative) => walk_dfs_iterative(graph, start, visit),
        (WalkOrder::BreadthFirst, TraversalStrategy::Recursive) => walk_bfs_recursive(graph, start, visit),
        (WalkOrder::BreadthFirst, TraversalStrategy::Iterative) => walk_bfs_iterative(graph, start, visit),
    }
}

/// Depth-first walk where recursion provides the stack
pub fn walk_dfs_recursive<G, F>(graph: &G, start: &str, mut visit: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    let start = resolve(graph, start)?;
    let mut visited = vec![false; graph.node_count()];
    dfs_visit(graph, start, &mut visited, &mut visit);
    Ok(())
}

fn dfs_visit<G, F>(graph: &G, node: usize, visited: &mut [bool], visit: &mut F)
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    visit(graph.key_of(node));
    visited[node] = true;

    for next in graph.adjacent_indices(node) {
        if !visited[next] {
            dfs_visit(graph, next, visited, visit);
        }
    }
}

/// Depth-first walk over an explicit stack
pub fn walk_dfs_iterative<G, F>(graph: &G, start: &str, mut visit: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    Walk::depth_first(graph, start)?.for_each(|node| visit(node));
    Ok(())
}

/// Breadth-first walk where each call visits one level and recurses on the next
pub fn walk_bfs_recursive<G, F>(graph: &G, start: &str, mut visit: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    let start = resolve(graph, start)?;
    let mut explored = vec![false; graph.node_count()];
    explored[start] = true;
    bfs_level(graph, vec![start], &mut explored, &mut visit);
    Ok(())
}

fn bfs_level<G, F>(graph: &G, level: Vec<usize>, explored: &mut [bool], visit: &mut F)
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    if level.is_empty() {
        return;
    }

    let mut next_level = Vec::new();
    for node in level {
        visit(graph.key_of(node));
        for next in graph.adjacent_indices(node) {
            if !explored[next] {
                explored[next] = true;
                next_level.push(next);
            }
        }
    }

    bfs_level(graph, next_level, explored, visit)
}

/// Breadth-first walk over an explicit queue
pub fn walk_bfs_iterative<G, F>(graph: &G, start: &str, mut visit: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&str),
{
    Walk::breadth_first(graph, start)?.for_each(|node| visit(node));
    Ok(())
}
