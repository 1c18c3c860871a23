use colored::*;
use graph_engine::api;
use graph_engine::{GraphKind, SpanningTree};

fn print_tree(name: &str, result: &SpanningTree) {
    println!("{} {}", "Running".bright_blue(), name.bright_white().bold());
    for (source, destination, weight) in result.tree.edges() {
        println!("  {} - {} ({})", source.green(), destination.green(), weight);
    }
    println!("  total cost: {}", result.cost.to_string().yellow());
}

fn main() -> Result<(), graph_engine::Error> {
    env_logger::init();

    let mut graph = api::init_graph(GraphKind::Undirected);
    for key in ["A", "B", "C", "D", "E", "F", "G"] {
        api::add_node(&mut graph, key, None)?;
    }

    let edges = [
        ("A", "B", 10.0),
        ("A", "C", 28.0),
        ("B", "E", 25.0),
        ("E", "D", 24.0),
        ("E", "F", 22.0),
        ("C", "D", 14.0),
        ("C", "G", 16.0),
        ("F", "D", 18.0),
        ("F", "G", 12.0),
    ];
    for (source, destination, weight) in edges {
        api::add_edge(&mut graph, source, destination, weight)?;
    }

    let prims = api::min_cost_spanning_tree_prims(&graph)?;
    print_tree("Prim's algorithm", &prims);

    let kruskal = api::min_cost_spanning_tree_kruskal(&graph)?;
    print_tree("Kruskal's algorithm", &kruskal);

    match api::has_loop(&graph)? {
        (true, cycle) => println!("{} {:?}", "Source graph has a loop:".red(), cycle),
        (false, _) => println!("{}", "Source graph has no loop".green()),
    }

    Ok(())
}
