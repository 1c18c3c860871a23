use graph_engine::graph::generators::{generate_connected_undirected, generate_dag};
use graph_engine::{Graph, GraphKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build(kind: GraphKind, keys: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new(kind);
    for key in keys {
        graph.add_node(*key, None).unwrap();
    }
    for &(from, to) in edges {
        graph.add_edge(from, to, 1.0).unwrap();
    }
    graph
}

#[test]
fn test_directed_cycle_is_reported() {
    let graph = build(GraphKind::Directed, &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    assert_eq!(graph.has_loop().unwrap(), (true, vec!["A".to_string(), "B".to_string(), "C".to_string()]));
}

#[test]
fn test_directed_cycle_excludes_lead_in_path() {
    let graph = build(
        GraphKind::Directed,
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "B"), ("D", "C"), ("D", "E")],
    );
    let (found, cycle) = graph.has_loop().unwrap();
    assert!(found);
    assert_eq!(cycle, vec!["B", "D", "C"]);
}

#[test]
fn test_directed_acyclic_graphs() {
    // Diamond: two paths into the same node are not a cycle
    let diamond = build(
        GraphKind::Directed,
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    assert_eq!(diamond.has_loop().unwrap(), (false, Vec::new()));

    let mut rng = StdRng::seed_from_u64(3);
    let dag = generate_dag(&mut rng, 60, 0.2).unwrap();
    assert!(dag.find_cycle().unwrap().is_none());

    assert_eq!(Graph::directed().has_loop().unwrap(), (false, Vec::new()));
}

#[test]
fn test_directed_self_loop() {
    let graph = build(GraphKind::Directed, &["A", "B"], &[("A", "B"), ("B", "B")]);
    assert_eq!(graph.has_loop().unwrap(), (true, vec!["B".to_string()]));
}

#[test]
fn test_directed_cycle_unreachable_from_first_node() {
    let graph = build(GraphKind::Directed, &["A", "B", "C"], &[("B", "C"), ("C", "B")]);
    assert_eq!(graph.find_cycle().unwrap(), Some(vec!["B".to_string(), "C".to_string()]));
}

#[test]
fn test_undirected_triangle() {
    let graph = build(GraphKind::Undirected, &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    assert_eq!(graph.has_loop().unwrap(), (true, vec!["A".to_string(), "B".to_string(), "C".to_string()]));
}

#[test]
fn test_undirected_path_has_no_cycle() {
    // A single edge is never reported as a cycle between its endpoints
    let graph = build(GraphKind::Undirected, &["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert_eq!(graph.has_loop().unwrap(), (false, Vec::new()));

    let mut rng = StdRng::seed_from_u64(9);
    let tree = generate_connected_undirected(&mut rng, 150, 0).unwrap();
    assert!(tree.find_cycle().unwrap().is_none());
}

#[test]
fn test_undirected_self_loop_and_parallel_edges() {
    let looped = build(GraphKind::Undirected, &["A"], &[("A", "A")]);
    assert_eq!(looped.has_loop().unwrap(), (true, vec!["A".to_string()]));

    let parallel = build(GraphKind::Undirected, &["A", "B"], &[("A", "B"), ("A", "B")]);
    assert_eq!(parallel.has_loop().unwrap(), (true, vec!["A".to_string(), "B".to_string()]));
}

#[test]
fn test_undirected_cycle_in_later_component() {
    let graph = build(
        GraphKind::Undirected,
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("C", "D"), ("D", "E"), ("E", "C")],
    );
    assert_eq!(graph.find_cycle().unwrap(), Some(vec!["C".to_string(), "D".to_string(), "E".to_string()]));
}

#[test]
fn test_undirected_random_graph_with_extra_edges_has_cycle() {
    let mut rng = StdRng::seed_from_u64(21);
    let graph = generate_connected_undirected(&mut rng, 50, 20).unwrap();
    if graph.edge_count() >= graph.node_count() {
        let cycle = graph.find_cycle().unwrap().expect("more edges than a tree allows");
        assert!(!cycle.is_empty());
    }
}

#[test]
fn test_undirected_cycle_skips_closed_branches() {
    // B is explored and left before the cycle through A, C and D closes
    let graph = build(
        GraphKind::Undirected,
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("C", "D"), ("D", "A")],
    );
    assert_eq!(
        graph.has_loop().unwrap(),
        (true, vec!["A".to_string(), "C".to_string(), "D".to_string()])
    );
}

#[test]
fn test_undirected_cycle_search_runs_per_component() {
    let graph = build(
        GraphKind::Undirected,
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("B", "C"), ("D", "E"), ("E", "F"), ("D", "F")],
    );
    let cycle = graph.find_cycle().unwrap().expect("second component has a triangle");
    assert_eq!(cycle, vec!["D", "E", "F"]);

    let forest = build(GraphKind::Undirected, &["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]);
    assert_eq!(forest.find_cycle().unwrap(), None);
}
