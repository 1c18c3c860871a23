use std::collections::HashMap;

use log::trace;
use ordered_float::OrderedFloat;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::graph::GraphView;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Working distances live in a map owned by the call; node attributes are
/// never touched. When several unvisited nodes share the smallest distance,
/// the one inserted into the graph first is settled first.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs from `start`, or from the first node inserted when `start` is `None`
    pub fn run<G>(&self, graph: &G, start: Option<&str>) -> Result<ShortestPathResult>
    where
        G: GraphView,
    {
        match start {
            Some(source) => self.compute_shortest_paths(graph, source),
            None => {
                let first = graph.node_keys().next().ok_or(Error::EmptyGraph)?;
                self.compute_shortest_paths(graph, first)
            }
        }
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: GraphView,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult> {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(source.to_string()));
        }

        let keys: Vec<&str> = graph.node_keys().collect();
        let order: HashMap<&str, usize> = keys.iter().enumerate().map(|(i, &key)| (key, i)).collect();

        // Adjacency by position; negative weights are rejected up front
        let mut adjacency: Vec<Vec<(usize, f64)>> = Vec::with_capacity(keys.len());
        for &key in &keys {
            let mut entries = Vec::new();
            for (next, weight) in graph.outgoing_edges(key)? {
                if weight < 0.0 {
                    return Err(Error::NegativeWeight {
                        from: key.to_string(),
                        to: next.to_string(),
                        weight,
                    });
                }
                let position = order
                    .get(next)
                    .copied()
                    .ok_or_else(|| Error::NodeNotFound(next.to_string()))?;
                entries.push((position, weight));
            }
            adjacency.push(entries);
        }

        let n = keys.len();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        let start = order[source];
        distances[start] = 0.0;

        let mut queue = MinPriorityQueue::with_capacity(n);
        queue.push(start, OrderedFloat(0.0));

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // Stale entry left behind by a later relaxation
            if settled[u] {
                continue;
            }
            settled[u] = true;
            trace!("Settled {} at distance {}", keys[u], dist_u);

            // Relax all outgoing edges
            for &(v, weight) in &adjacency[u] {
                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    queue.push(v, OrderedFloat(candidate));
                }
            }
        }

        Ok(ShortestPathResult {
            source: source.to_string(),
            distances: keys
                .iter()
                .zip(&distances)
                .map(|(key, &distance)| (key.to_string(), distance))
                .collect(),
            predecessors: keys
                .iter()
                .zip(&predecessors)
                .filter_map(|(key, pred)| pred.map(|p| (key.to_string(), keys[p].to_string())))
                .collect(),
        })
    }
}
