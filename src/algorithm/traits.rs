use std::collections::{HashMap, HashSet};

use log::warn;

use crate::algorithm::mst::SpanningTree;
use crate::graph::{Graph, GraphView};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    /// Source node key
    pub source: String,

    /// Distance from source to every node; unreachable nodes hold `f64::INFINITY`
    pub distances: HashMap<String, f64>,

    /// Predecessor of each reached node in the shortest path tree
    pub predecessors: HashMap<String, String>,
}

impl ShortestPathResult {
    pub fn distance(&self, key: &str) -> Option<f64> {
        self.distances.get(key).copied()
    }

    pub fn is_reachable(&self, key: &str) -> bool {
        self.distance(key).map_or(false, f64::is_finite)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: GraphView,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of node keys
    fn get_path(&self, result: &ShortestPathResult, target: &str) -> Option<Vec<String>> {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.to_string()];
        let mut seen = HashSet::new();
        let mut current = target;

        while current != result.source {
            if !seen.insert(current) {
                warn!("Cycle detected in path reconstruction at node {}", current);
                return None;
            }
            current = result.predecessors.get(current).map(String::as_str)?;
            path.push(current.to_string());
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for minimum spanning tree algorithms over undirected graphs
pub trait SpanningTreeAlgorithm {
    /// Builds a minimum-cost spanning tree of `graph`
    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
