use graph_engine::{DisjointSet, Error, ErrorKind};

#[test]
fn test_create_registers_singletons() {
    let mut sets = DisjointSet::create(["A", "B", "C", "D"]);

    assert_eq!(sets.len(), 4);
    assert_eq!(sets.set_count(), 4);
    assert!(sets.contains("C"));
    assert!(!sets.contains("Z"));
    assert!(sets.is_disjoint("A", "B").unwrap());
    assert_eq!(sets.find_root("D").unwrap(), "D");
}

#[test]
fn test_create_skips_duplicate_keys() {
    let sets = DisjointSet::create(vec!["A".to_string(), "B".to_string(), "A".to_string()]);
    assert_eq!(sets.len(), 2);
    assert_eq!(sets.set_count(), 2);

    let empty = DisjointSet::create(Vec::<String>::new());
    assert!(empty.is_empty());
}

#[test]
fn test_union_merges_sets() {
    let mut sets = DisjointSet::create(["A", "B", "C", "D"]);

    assert!(sets.union("A", "B").unwrap());
    assert!(!sets.is_disjoint("A", "B").unwrap());
    assert!(sets.is_disjoint("A", "C").unwrap());
    assert_eq!(sets.set_count(), 3);

    assert!(sets.union("C", "D").unwrap());
    assert!(sets.union("B", "D").unwrap());
    assert!(!sets.is_disjoint("A", "C").unwrap());
    assert_eq!(sets.set_count(), 1);

    let root = sets.find_root("A").unwrap().to_string();
    for key in ["B", "C", "D"] {
        assert_eq!(sets.find_root(key).unwrap(), root);
    }
}

#[test]
fn test_union_of_joined_keys_is_a_no_op() {
    let mut sets = DisjointSet::create(["A", "B"]);
    assert!(sets.union("A", "B").unwrap());
    assert!(!sets.union("B", "A").unwrap());
    assert!(!sets.union("A", "A").unwrap());
    assert_eq!(sets.set_count(), 1);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let mut sets = DisjointSet::create(["A"]);

    let err = sets.is_disjoint("A", "Q").unwrap_err();
    assert_eq!(err, Error::NotInSet("Q".to_string()));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert!(matches!(sets.union("Q", "A"), Err(Error::NotInSet(_))));
    assert!(matches!(sets.find_root("Q"), Err(Error::NotInSet(_))));
    assert_eq!(sets.set_count(), 1);
}

#[test]
fn test_long_chain_stays_consistent() {
    let keys: Vec<String> = (0..1_000).map(|i| format!("k{}", i)).collect();
    let mut sets = DisjointSet::create(keys.iter().map(String::as_str));

    for pair in keys.windows(2) {
        sets.union(&pair[0], &pair[1]).unwrap();
    }

    assert_eq!(sets.set_count(), 1);
    assert!(!sets.is_disjoint("k0", "k999").unwrap());
}
