//! OrderedTree tests: insertion order, search, min/max, rendering.

use ordgraph::tree::{Node, OrderedTree};
use ordgraph::types::error::DsError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== Helper ====================

fn sample_tree() -> OrderedTree<i32> {
    OrderedTree::with_values(4, [1, 6, 7, 3, 2, 9])
}

/// Check the ordering invariant for every node, with an explicit stack.
fn assert_ordered(root: &Node<i32>) {
    // (node, exclusive upper bound for the subtree, inclusive lower bound)
    let mut stack: Vec<(&Node<i32>, Option<i32>, Option<i32>)> = vec![(root, None, None)];
    while let Some((node, upper, lower)) = stack.pop() {
        let v = *node.value();
        if let Some(upper) = upper {
            assert!(v < upper, "{} should be < {}", v, upper);
        }
        if let Some(lower) = lower {
            assert!(v >= lower, "{} should be >= {}", v, lower);
        }
        if let Some(left) = node.left() {
            stack.push((left, Some(v), lower));
        }
        if let Some(right) = node.right() {
            stack.push((right, upper, Some(v)));
        }
    }
}

// ==================== Construction ====================

#[test]
fn test_new_holds_seed_only() {
    let tree = OrderedTree::new(10);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);
    assert!(tree.root().is_leaf());
    assert_eq!(*tree.min(), 10);
    assert_eq!(*tree.max(), 10);
}

#[test]
fn test_from_values_uses_first_as_seed() {
    let tree = OrderedTree::from_values([5, 2, 8]).unwrap();
    assert_eq!(*tree.root().value(), 5);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_from_values_empty_is_invalid_input() {
    let result = OrderedTree::<i32>::from_values(Vec::new());
    match result {
        Err(DsError::InvalidInput(_)) => {}
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

// ==================== Insert ====================

#[test]
fn test_insert_places_smaller_left_and_larger_right() {
    let tree = sample_tree();
    let root = tree.root();
    assert_eq!(*root.left().unwrap().value(), 1);
    assert_eq!(*root.right().unwrap().value(), 6);
    // 3 goes right of 1, 2 goes left of 3
    let three = root.left().unwrap().right().unwrap();
    assert_eq!(*three.value(), 3);
    assert_eq!(*three.left().unwrap().value(), 2);
    assert_ordered(root);
}

#[test]
fn test_duplicates_go_right_and_are_kept() {
    let tree = OrderedTree::with_values(5, [5, 5]);
    assert_eq!(tree.len(), 3);
    let root = tree.root();
    assert!(root.left().is_none());
    let first_dup = root.right().unwrap();
    assert_eq!(*first_dup.value(), 5);
    assert_eq!(*first_dup.right().unwrap().value(), 5);
    assert_eq!(tree.height(), 3);
}

#[test]
fn test_sorted_insertion_degrades_to_chain() {
    let tree = OrderedTree::with_values(0, 1..100);
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.height(), 100);
    assert_eq!(*tree.max(), 99);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let tree = OrderedTree::with_values(0u32, 1..20_000);
    assert!(tree.contains(&19_999));
    assert_eq!(tree.height(), 20_000);
    assert!(tree.to_string().starts_with("0 (_ 1 (_ 2"));
    drop(tree);
}

#[test]
fn test_debug_deep_chain_does_not_overflow() {
    let tree = OrderedTree::with_values(0u32, 1..20_000);
    let debug = format!("{:?}", tree);
    assert!(debug.starts_with("OrderedTree { len: 20000, values: [0, 1, 2, "));
    assert!(debug.ends_with("19998, 19999] }"));
    assert_eq!(
        format!("{:?}", tree.root()),
        "Node { value: 0, left: None, right: Some(1) }"
    );
}

// ==================== Search ====================

#[test]
fn test_search_finds_non_root_values() {
    let tree = sample_tree();
    for v in [4, 1, 6, 7, 3, 2, 9] {
        let node = tree.search(&v).expect("inserted value should be found");
        assert_eq!(*node.value(), v);
    }
}

#[test]
fn test_search_missing_value() {
    let tree = sample_tree();
    assert!(tree.search(&5).is_none());
    assert!(tree.search(&0).is_none());
    assert!(tree.search(&10).is_none());
    assert!(!tree.contains(&8));
    match tree.find(&8) {
        Err(DsError::NotFound(_)) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_search_returns_subtree() {
    let tree = sample_tree();
    let six = tree.search(&6).unwrap();
    assert_eq!(*six.max_from().value(), 9);
    assert_eq!(*six.min_from().value(), 6);
    assert!(six.search(&1).is_none());
    assert!(six.search(&9).is_some());
}

#[test]
fn test_search_iff_inserted_random() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let values: Vec<i32> = (0..200).map(|_| rng.gen_range(-500..500)).collect();
        let tree = OrderedTree::from_values(values.iter().copied()).unwrap();
        assert_eq!(tree.len(), values.len());
        for probe in -520..520 {
            assert_eq!(tree.contains(&probe), values.contains(&probe));
        }
        assert_ordered(tree.root());
    }
}

// ==================== Min / Max / Iter ====================

#[test]
fn test_min_max() {
    let tree = sample_tree();
    assert_eq!(*tree.min(), 1);
    assert_eq!(*tree.max(), 9);
    assert!(tree.min_node().left().is_none());
    assert!(tree.max_node().right().is_none());
}

#[test]
fn test_iter_is_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<i32> = (0..500).map(|_| rng.gen_range(0..100)).collect();
    let tree = OrderedTree::from_values(values.clone()).unwrap();

    let collected: Vec<i32> = tree.iter().copied().collect();
    let mut expected = values;
    expected.sort();
    assert_eq!(collected, expected);
    assert_eq!(tree.min(), collected.first().unwrap());
    assert_eq!(tree.max(), collected.last().unwrap());
}

#[test]
fn test_extend_inserts_in_order() {
    let mut tree = OrderedTree::new(4);
    tree.extend([1, 6]);
    tree.insert(7);
    assert_eq!((&tree).into_iter().copied().collect::<Vec<_>>(), vec![1, 4, 6, 7]);
}

// ==================== Render ====================

#[test]
fn test_render_sample_tree() {
    let tree = sample_tree();
    assert_eq!(
        tree.to_string(),
        "4 (1 (_ 3 (2 (_ _) _)) 6 (_ 7 (_ 9 (_ _))))"
    );
}

#[test]
fn test_render_single_node_and_subtree() {
    assert_eq!(OrderedTree::new("m").to_string(), "m (_ _)");

    let tree = sample_tree();
    assert_eq!(tree.search(&3).unwrap().to_string(), "3 (2 (_ _) _)");
}
