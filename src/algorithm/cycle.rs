//! Cycle detection for both graph variants.
//!
//! Both detectors stop at the first cycle they meet and report its nodes in
//! path order, starting from the node where the cycle closes.

use log::debug;

use crate::data_structures::DisjointSet;
use crate::graph::GraphStore;
use crate::Result;

/// Outcome of one recursive search
enum Search {
    Found(Vec<usize>),
    Exhausted,
}

/// Directed detection: a DFS from every node in insertion order, keeping the
/// current path on a stack. Reaching a node already on the stack closes a
/// cycle made of the stack suffix starting at that node.
///
/// Nodes whose whole reachable subgraph was explored without closing a cycle
/// are remembered and skipped by later searches; they cannot lead to one.
pub fn find_directed(store: &GraphStore) -> Option<Vec<String>> {
    let mut cleared = vec![false; store.node_count()];

    for start in 0..store.node_count() {
        if cleared[start] {
            continue;
        }
        let mut stack = Vec::new();
        if let Search::Found(cycle) = path_stack_search(store, start, &mut stack, &mut cleared) {
            return Some(to_keys(store, cycle));
        }
    }
    None
}

fn path_stack_search(store: &GraphStore, node: usize, stack: &mut Vec<usize>, cleared: &mut [bool]) -> Search {
    if let Some(index) = stack.iter().position(|&on_path| on_path == node) {
        debug!("Directed cycle closes at {}", store.key_at(node));
        return Search::Found(stack[index..].to_vec());
    }
    if cleared[node] {
        return Search::Exhausted;
    }

    stack.push(node);
    for &(next, _) in store.adjacency_at(node) {
        if let found @ Search::Found(_) = path_stack_search(store, next, stack, cleared) {
            return found;
        }
    }
    stack.pop();

    cleared[node] = true;
    Search::Exhausted
}

/// Undirected detection: a DFS per component that merges each endpoint pair
/// in a [`DisjointSet`] as it descends. An edge whose endpoints are already in
/// one set, other than the entry leading back to the node we came from, closes
/// a cycle.
pub fn find_undirected(store: &GraphStore) -> Result<Option<Vec<String>>> {
    let mut sets = DisjointSet::create(store.keys());
    let mut reached = vec![false; store.node_count()];

    for start in 0..store.node_count() {
        if reached[start] {
            continue;
        }
        let mut stack = Vec::new();
        if let Search::Found(cycle) = union_search(store, start, &mut sets, &mut stack, &mut reached)? {
            return Ok(Some(to_keys(store, cycle)));
        }
    }
    Ok(None)
}

fn union_search(
    store: &GraphStore,
    node: usize,
    sets: &mut DisjointSet,
    stack: &mut Vec<usize>,
    reached: &mut [bool],
) -> Result<Search> {
    reached[node] = true;
    stack.push(node);

    // The mirror of the edge we arrived by is skipped once; any further
    // entry to the predecessor is a parallel edge and does close a cycle.
    let mut predecessor = stack.len().checked_sub(2).map(|index| stack[index]);

    for &(next, _) in store.adjacency_at(node) {
        if predecessor == Some(next) {
            predecessor = None;
            continue;
        }

        let (key, next_key) = (store.key_at(node), store.key_at(next));
        if sets.is_disjoint(key, next_key)? {
            sets.union(key, next_key)?;
            if let found @ Search::Found(_) = union_search(store, next, sets, stack, reached)? {
                return Ok(found);
            }
            continue;
        }

        // Off the current path means the branch holding `next` is closed
        let Some(index) = stack.iter().position(|&on_path| on_path == next) else {
            continue;
        };
        debug!("Undirected cycle closes at {}", next_key);
        return Ok(Search::Found(stack[index..].to_vec()));
    }

    stack.pop();
    Ok(Search::Exhausted)
}

fn to_keys(store: &GraphStore, positions: Vec<usize>) -> Vec<String> {
    positions
        .into_iter()
        .map(|position| store.key_at(position).to_string())
        .collect()
}
