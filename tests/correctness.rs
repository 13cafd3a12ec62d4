//! Correctness tests for the segment tree
//!
//! Verifies layout, range decomposition and update semantics on fixed inputs

mod common;

use common::{concat, naive_fold, sum};
use segtree::{RefreshStrategy, SegmentTree, SegmentTreeError, TreeConfig};

#[test]
fn test_worked_example() {
    let mut tree = SegmentTree::build(vec![1, 2, 3, 4, 5], sum);

    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.offset(), 7);
    assert_eq!(tree.size(), 15);
    assert_eq!(tree.top(), Some(&15));
    assert_eq!(tree.calc(1, 4), Some(9));

    // Leaf-local 2 (value 3) becomes 10.
    tree.update(7 + 2, 10).expect("leaf index in range");
    assert_eq!(tree.top(), Some(&22));
    assert_eq!(tree.calc(1, 4), Some(16));
}

#[test]
fn test_every_window_matches_fold() {
    let data: Vec<i64> = vec![5, -3, 8, 0, 2, 7, -1];
    let tree = SegmentTree::build(data.clone(), sum);

    for begin in 0..=data.len() {
        for end in begin..=data.len() {
            assert_eq!(
                tree.calc(begin, end),
                naive_fold(&data[begin..end], sum),
                "window [{}, {})",
                begin,
                end
            );
        }
    }
}

#[test]
fn test_empty_windows_are_absent() {
    let tree = SegmentTree::build(vec![1, 2, 3, 4, 5], sum);
    for i in 0..8 {
        assert_eq!(tree.calc(i, i), None);
    }
}

#[test]
fn test_update_matches_fresh_build() {
    let mut data: Vec<String> = ["p", "q", "r", "s", "t", "u"].map(String::from).to_vec();
    let mut tree = SegmentTree::build(data.clone(), concat);

    tree.update_leaf(4, "X".to_string()).expect("leaf in range");
    data[4] = "X".to_string();
    let fresh = SegmentTree::build(data, concat);

    assert_eq!(tree.nodes(), fresh.nodes());
    assert_eq!(tree.top().map(String::as_str), Some("pqrsXu"));
}

#[test]
fn test_path_refresh_matches_full_rebuild() {
    let data: Vec<String> = (0..13).map(|i| format!("{i},")).collect();
    let path = TreeConfig::default().with_refresh(RefreshStrategy::AncestorPath);
    let mut full_tree = SegmentTree::build(data.clone(), concat);
    let mut path_tree = SegmentTree::with_config(data, concat, path);

    for local in [12, 0, 7, 3] {
        full_tree.update_leaf(local, format!("<{local}>")).unwrap();
        path_tree.update_leaf(local, format!("<{local}>")).unwrap();
        assert_eq!(full_tree.nodes(), path_tree.nodes());
    }
}

#[test]
fn test_errors_are_explicit() {
    let mut tree = SegmentTree::build(vec![1, 2, 3, 4, 5], sum);

    assert_eq!(
        tree.get(15).unwrap_err(),
        SegmentTreeError::IndexOutOfRange {
            index: 15,
            size: 15,
        }
    );
    assert!(tree.update(99, 0).is_err());
    assert!(matches!(
        tree.checked_calc(4, 2),
        Err(SegmentTreeError::InvalidRange {
            begin: 4,
            end: 2,
            ..
        })
    ));

    // Failed writes leave the tree intact.
    assert_eq!(tree.top(), Some(&15));
}

#[test]
fn test_min_tree_with_phantoms() {
    let tree = SegmentTree::build(vec![7, 3, 9], |a: &i64, b: &i64| *a.min(b));
    assert_eq!(tree.top(), Some(&3));
    assert_eq!(tree.calc(2, 4), Some(9));
    assert_eq!(tree.calc(3, 4), None);
}

#[test]
fn test_dump_lists_every_slot() {
    let tree = SegmentTree::build(vec![1, 2, 3], sum);
    let expected = "offset=3\n0 6\n1 3\n2 3\n3 1\n4 2\n5 3\n6 -\n\n";
    assert_eq!(tree.dump().to_string(), expected);
}
