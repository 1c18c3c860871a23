use std::env;
use std::time::{Duration, Instant};

use graph_engine::graph::generators::{generate_connected_undirected, generate_random_directed, node_key};
use graph_engine::{Dijkstra, Graph, Kruskal, Prim, ShortestPathAlgorithm, SpanningTreeAlgorithm};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark a spanning tree algorithm on a graph
fn benchmark_mst<A: SpanningTreeAlgorithm>(algorithm: &A, graph: &Graph) -> Result<(Duration, f64), graph_engine::Error> {
    let start = Instant::now();
    let result = algorithm.spanning_tree(graph)?;
    let duration = start.elapsed();

    println!(
        "  - {}: cost {:.2}, {} edges in {:?}",
        algorithm.name(),
        result.cost,
        result.edge_count(),
        duration
    );
    Ok((duration, result.cost))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments: [max nodes] [edge factor] [seed]
    let args: Vec<String> = env::args().collect();
    let max_nodes: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2_000);
    let edge_factor: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3.0);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut rng = StdRng::seed_from_u64(seed);
    let sizes: Vec<usize> = [100, 500, 1_000, 2_000, 5_000]
        .into_iter()
        .filter(|&n| n <= max_nodes)
        .collect();

    println!("=====================================================");
    println!("Benchmark: Prim vs Kruskal, Dijkstra");
    println!("Edge factor: {} edges per node, seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &sizes {
        let extra = (edge_factor * size as f64) as usize;
        info!("Generating connected undirected graph with {} nodes", size);
        let graph = generate_connected_undirected(&mut rng, size, extra)?;
        println!(
            "\nUndirected graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let (prim_time, prim_cost) = benchmark_mst(&Prim::new(), &graph)?;
        let (kruskal_time, kruskal_cost) = benchmark_mst(&Kruskal::new(), &graph)?;
        if (prim_cost - kruskal_cost).abs() > 1e-6 {
            println!("  ! cost mismatch: {} vs {}", prim_cost, kruskal_cost);
        }

        let directed = generate_random_directed(&mut rng, size, edge_factor)?;
        let start = Instant::now();
        let shortest = Dijkstra::new().compute_shortest_paths(&directed, &node_key(0))?;
        let dijkstra_time = start.elapsed();
        let reachable = shortest.distances.values().filter(|d| d.is_finite()).count();
        println!("  - Dijkstra: {} reachable nodes in {:?}", reachable, dijkstra_time);

        results.push((size, prim_time, kruskal_time, dijkstra_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<12}", "Nodes", "Prim (ms)", "Kruskal (ms)", "Dijkstra (ms)");
    println!("-----------------------------------------------------");
    for (size, prim, kruskal, dijkstra) in &results {
        println!(
            "{:<10} | {:<12} | {:<12} | {:<12}",
            size,
            prim.as_millis(),
            kruskal.as_millis(),
            dijkstra.as_millis()
        );
    }

    Ok(())
}
