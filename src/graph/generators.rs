//! Graph generators for benchmarks and randomized tests.
//!
//! All generators take the random source from the caller so a seeded
//! `StdRng` gives reproducible graphs. Nodes are keyed `"n0"`, `"n1"`, ...

use rand::Rng;

use crate::graph::{Graph, GraphKind, MutableGraph};
use crate::Result;

/// Key used for the `index`-th generated node
pub fn node_key(index: usize) -> String {
    format!("n{}", index)
}

/// Adds `n` nodes keyed by [`node_key`] to any mutable graph
pub fn add_nodes<G: MutableGraph>(graph: &mut G, n: usize) -> Result<()> {
    for i in 0..n {
        graph.add_node(&node_key(i), None)?;
    }
    Ok(())
}

/// Generates a connected undirected graph with `n` nodes.
///
/// A random spanning tree guarantees connectivity; `extra_edges` further
/// edges between distinct random nodes are added on top. Weights are drawn
/// from `1.0..100.0`.
pub fn generate_connected_undirected<R: Rng>(rng: &mut R, n: usize, extra_edges: usize) -> Result<Graph> {
    let mut graph = Graph::new(GraphKind::Undirected);
    add_nodes(&mut graph, n)?;

    // Attach each node to a random earlier one
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let weight = rng.gen_range(1.0..100.0);
        graph.add_edge(&node_key(i), &node_key(parent), weight)?;
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = rng.gen_range(1.0..100.0);
                graph.add_edge(&node_key(u), &node_key(v), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed acyclic graph with `n` nodes.
///
/// Edges only point from a lower to a higher node index, each present with
/// probability `density`, clamped to `0.0..=1.0` (NaN counts as `0.0`).
pub fn generate_dag<R: Rng>(rng: &mut R, n: usize, density: f64) -> Result<Graph> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut graph = Graph::new(GraphKind::Directed);
    add_nodes(&mut graph, n)?;

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(density) {
                let weight = rng.gen_range(1.0..100.0);
                graph.add_edge(&node_key(u), &node_key(v), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed graph with about `edge_factor * n` edges.
///
/// Self loops are skipped; the graph may contain cycles and unreachable nodes.
pub fn generate_random_directed<R: Rng>(rng: &mut R, n: usize, edge_factor: f64) -> Result<Graph> {
    let mut graph = Graph::new(GraphKind::Directed);
    add_nodes(&mut graph, n)?;
    if n == 0 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(&node_key(u), &node_key(v), weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with edges between orthogonal
/// neighbours, every edge weighted `1.0`.
pub fn generate_grid(kind: GraphKind, width: usize, height: usize) -> Result<Graph> {
    let mut graph = Graph::new(kind);
    add_nodes(&mut graph, width * height)?;

    for y in 0..height {
        for x in 0..width {
            let current = node_key(y * width + x);
            if x + 1 < width {
                graph.add_edge(&current, &node_key(y * width + x + 1), 1.0)?;
            }
            if y + 1 < height {
                graph.add_edge(&current, &node_key((y + 1) * width + x), 1.0)?;
            }
        }
    }

    Ok(graph)
}
