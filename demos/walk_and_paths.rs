use colored::*;
use graph_engine::api;
use graph_engine::GraphKind;

fn main() -> Result<(), graph_engine::Error> {
    env_logger::init();

    let mut graph = api::init_graph(GraphKind::Directed);
    for key in ["A", "B", "C", "D", "E", "F"] {
        api::add_node(&mut graph, key, None)?;
    }
    let edges = [
        ("A", "B", 5.0),
        ("A", "C", 2.0),
        ("B", "D", 3.0),
        ("B", "C", 9.0),
        ("C", "E", 5.0),
        ("E", "D", 4.0),
        ("E", "F", 6.0),
        ("D", "F", 1.0),
    ];
    for (source, destination, weight) in edges {
        api::add_edge(&mut graph, source, destination, weight)?;
    }

    println!("{}", "DFS from A".bright_blue());
    api::walk_dfs(&graph, "A", |node| println!("  Node : {}", node.green()))?;

    println!("{}", "BFS from A".bright_blue());
    api::walk_bfs(&graph, "A", |node| println!("  Node : {}", node.green()))?;

    println!("{}", "All paths from A to F".bright_blue());
    for path in api::get_paths_to_node(&graph, "F", "A")? {
        println!("  {}", path);
    }

    println!("{}", "Shortest distances from A".bright_blue());
    let shortest = api::find_shortest_path_dijkstra(&graph, Some("A"))?;
    for key in api::get_all_nodes(&graph) {
        let distance = shortest.distances[&key];
        println!("  {} -> {}", key.bright_white(), distance.to_string().yellow());
    }

    Ok(())
}
