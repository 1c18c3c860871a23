use graph_engine::graph::generators::{
    generate_connected_undirected, generate_dag, generate_grid, generate_random_directed, node_key,
};
use graph_engine::GraphKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_dag_density_is_clamped() {
    let mut rng = StdRng::seed_from_u64(1);

    let full = generate_dag(&mut rng, 10, 1.5).unwrap();
    assert_eq!(full.edge_count(), 45);
    assert!(full.find_cycle().unwrap().is_none());

    let empty = generate_dag(&mut rng, 10, -0.5).unwrap();
    assert_eq!(empty.edge_count(), 0);

    let nan = generate_dag(&mut rng, 10, f64::NAN).unwrap();
    assert_eq!(nan.edge_count(), 0);
    assert_eq!(nan.node_count(), 10);
}

#[test]
fn test_connected_undirected_generator_spans_every_node() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_connected_undirected(&mut rng, 40, 0).unwrap();

    assert_eq!(graph.node_count(), 40);
    assert_eq!(graph.edge_count(), 39);
    assert!(graph.find_cycle().unwrap().is_none());
}

#[test]
fn test_grid_and_random_generators() {
    let grid = generate_grid(GraphKind::Undirected, 4, 3).unwrap();
    assert_eq!(grid.node_count(), 12);
    // (width - 1) * height + width * (height - 1)
    assert_eq!(grid.edge_count(), 17);

    let mut rng = StdRng::seed_from_u64(8);
    let random = generate_random_directed(&mut rng, 0, 3.0).unwrap();
    assert_eq!(random.node_count(), 0);

    let random = generate_random_directed(&mut rng, 25, 2.0).unwrap();
    assert!(random.contains(&node_key(24)));
    assert!(random.edge_count() <= 50);
}
