use graph_engine::graph::generators::generate_connected_undirected;
use graph_engine::{Attributes, Error, ErrorKind, Graph, Kruskal, Prim, SpanningTree, SpanningTreeAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

// Seven-node network with a unique minimum spanning tree of cost 99
fn city_network() -> Graph {
    let mut graph = Graph::undirected();
    for key in ["A", "B", "C", "D", "E", "F", "G"] {
        graph.add_node(key, None).unwrap();
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
    for (from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

fn algorithms() -> Vec<Box<dyn SpanningTreeAlgorithm>> {
    vec![Box::new(Prim::new()), Box::new(Kruskal::new())]
}

fn tree_edges(result: &SpanningTree) -> Vec<(String, String)> {
    let mut edges: Vec<(String, String)> = result
        .tree
        .edges()
        .map(|(a, b, _)| if a < b { (a.to_string(), b.to_string()) } else { (b.to_string(), a.to_string()) })
        .collect();
    edges.sort();
    edges
}

#[test]
fn test_minimum_spanning_tree_of_city_network() {
    let graph = city_network();
    let expected: Vec<(String, String)> = [("A", "B"), ("B", "E"), ("C", "D"), ("C", "G"), ("E", "F"), ("F", "G")]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

    for algorithm in algorithms() {
        let result = algorithm.spanning_tree(&graph).unwrap();
        assert_eq!(result.cost, 99.0, "{} cost", algorithm.name());
        assert_eq!(result.edge_count(), 6);
        assert_eq!(result.node_count(), 7);
        assert!(result.is_spanning());
        assert_eq!(tree_edges(&result), expected, "{} edges", algorithm.name());
        assert!(!result.tree.is_directed());
        assert_eq!(result.tree.has_loop().unwrap(), (false, Vec::new()));
    }
}

#[test]
fn test_spanning_tree_keeps_source_graph_intact() {
    let graph = city_network();
    let before = serde_json::to_value(graph.as_dict()).unwrap();

    for algorithm in algorithms() {
        algorithm.spanning_tree(&graph).unwrap();
    }

    assert_eq!(serde_json::to_value(graph.as_dict()).unwrap(), before);
}

#[test]
fn test_spanning_tree_copies_node_attributes() {
    let mut graph = city_network();
    let mut attributes = Attributes::new();
    attributes.insert("population".to_string(), json!(1200));
    graph.set_attr("D", attributes.clone()).unwrap();

    for algorithm in algorithms() {
        let result = algorithm.spanning_tree(&graph).unwrap();
        assert_eq!(result.tree.get_attr("D").unwrap(), &attributes);
    }
}

#[test]
fn test_kruskal_counts_each_undirected_edge_once() {
    let mut graph = Graph::undirected();
    for key in ["A", "B", "C"] {
        graph.add_node(key, None).unwrap();
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 2.0).unwrap();
    graph.add_edge("C", "A", 3.0).unwrap();

    let result = Kruskal::new().spanning_tree(&graph).unwrap();
    assert_eq!(result.cost, 3.0);
    assert_eq!(result.edge_count(), 2);
}

#[test]
fn test_spanning_tree_trivial_graphs() {
    for algorithm in algorithms() {
        let empty = algorithm.spanning_tree(&Graph::undirected()).unwrap();
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.cost, 0.0);
        assert!(empty.is_spanning());

        let mut single = Graph::undirected();
        single.add_node("solo", None).unwrap();
        let result = algorithm.spanning_tree(&single).unwrap();
        assert_eq!(result.tree.get_all_nodes(), vec!["solo"]);
        assert_eq!(result.edge_count(), 0);
        assert!(result.is_spanning());
    }
}

#[test]
fn test_spanning_tree_ignores_self_loops() {
    let mut graph = Graph::undirected();
    for key in ["A", "B"] {
        graph.add_node(key, None).unwrap();
    }
    graph.add_edge("A", "A", 0.5).unwrap();
    graph.add_edge("A", "B", 4.0).unwrap();

    for algorithm in algorithms() {
        let result = algorithm.spanning_tree(&graph).unwrap();
        assert_eq!(result.cost, 4.0, "{}", algorithm.name());
        assert!(result.is_spanning());
    }
}

#[test]
fn test_spanning_tree_of_disconnected_graph_is_partial() {
    let mut graph = Graph::undirected();
    for key in ["A", "B", "C", "D"] {
        graph.add_node(key, None).unwrap();
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("C", "D", 2.0).unwrap();

    let prim = Prim::new().spanning_tree(&graph).unwrap();
    assert_eq!(prim.cost, 1.0);
    assert!(!prim.is_spanning());

    // Kruskal covers every component
    let kruskal = Kruskal::new().spanning_tree(&graph).unwrap();
    assert_eq!(kruskal.cost, 3.0);
    assert_eq!(kruskal.edge_count(), 2);
    assert!(!kruskal.is_spanning());
}

#[test]
fn test_spanning_tree_rejects_directed_graph() {
    let mut graph = Graph::directed();
    graph.add_node("A", None).unwrap();

    for algorithm in algorithms() {
        let err = algorithm.spanning_tree(&graph).unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { .. }));
        assert_eq!(err.kind(), ErrorKind::UnsupportedForGraphType);
    }
}

#[test]
fn test_prim_and_kruskal_agree_on_random_graphs() {
    for seed in 0..10u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_connected_undirected(&mut rng, 80, 240).unwrap();

        let prim = Prim::new().spanning_tree(&graph).unwrap();
        let kruskal = Kruskal::new().spanning_tree(&graph).unwrap();

        assert!(prim.is_spanning(), "seed {}", seed);
        assert!(kruskal.is_spanning(), "seed {}", seed);
        assert!(
            (prim.cost - kruskal.cost).abs() < 1e-6,
            "seed {}: prim {} vs kruskal {}",
            seed,
            prim.cost,
            kruskal.cost
        );
    }
}

#[test]
fn test_edgeless_graph_yields_first_node_for_both_algorithms() {
    let mut graph = Graph::undirected();
    for key in ["A", "B", "C"] {
        graph.add_node(key, None).unwrap();
    }
    graph.add_edge("B", "B", 1.0).unwrap();

    for algorithm in algorithms() {
        let result = algorithm.spanning_tree(&graph).unwrap();
        assert_eq!(result.tree.get_all_nodes(), vec!["A"], "{}", algorithm.name());
        assert_eq!(result.edge_count(), 0);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.source_order(), 3);
        assert!(!result.is_spanning());
    }
}
