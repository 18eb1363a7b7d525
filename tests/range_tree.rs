// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Concrete scenarios for the public `RangeTree` API.

use std::sync::RwLock;
use std::thread;

use rangeagg::{RangeTree, Stats, TreeError};

// =============================================================================
// Queries
// =============================================================================

#[test]
fn example_sequence() {
    let mut tree = RangeTree::new(&[2, 1, 4, 3, 5]);
    assert_eq!(tree.sum(1, 4).unwrap(), 13);
    assert_eq!(tree.min(1, 4).unwrap(), 1);
    assert_eq!(tree.max(1, 4).unwrap(), 5);

    tree.update(2, 10);
    assert_eq!(tree.sum(1, 4).unwrap(), 19);
    assert_eq!(tree.min(1, 4).unwrap(), 1);
    assert_eq!(tree.max(1, 4).unwrap(), 10);
    assert_eq!(tree.values(), &[2, 1, 10, 3, 5]);
}

#[test]
fn single_element() {
    let tree = RangeTree::new(&[7]);
    assert_eq!(tree.sum(0, 0).unwrap(), 7);
    assert_eq!(tree.min(0, 0).unwrap(), 7);
    assert_eq!(tree.max(0, 0).unwrap(), 7);
    assert_eq!(tree.capacity(), 1);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn full_range_matches_iterators() {
    let values: Vec<i64> = vec![-4, 17, 0, 9, -30, 12, 12, 8, 1, -1, 6];
    let tree = RangeTree::new(&values);
    let last = values.len() - 1;
    assert_eq!(tree.sum(0, last).unwrap(), values.iter().sum::<i64>());
    assert_eq!(tree.min(0, last).unwrap(), *values.iter().min().unwrap());
    assert_eq!(tree.max(0, last).unwrap(), *values.iter().max().unwrap());
    assert_eq!(tree.total().count, values.len());
}

#[test]
fn every_range_matches_slice() {
    let values: Vec<i64> = vec![3, -1, 4, -1, 5, -9, 2, 6, -5];
    let tree = RangeTree::new(&values);
    for l in 0..values.len() {
        for r in l..values.len() {
            let slice = &values[l..=r];
            let stats = tree.query(l, r).unwrap();
            assert_eq!(stats.sum, slice.iter().sum::<i64>(), "[{}, {}]", l, r);
            assert_eq!(stats.min, *slice.iter().min().unwrap(), "[{}, {}]", l, r);
            assert_eq!(stats.max, *slice.iter().max().unwrap(), "[{}, {}]", l, r);
            assert_eq!(stats.count, r - l + 1);
        }
    }
}

#[test]
fn negative_values_never_see_padding() {
    // Non-power-of-two length with all values below zero: a leaked padding
    // zero would show up as the max.
    let tree = RangeTree::new(&[-5, -3, -8]);
    assert_eq!(tree.max(0, 2).unwrap(), -3);
    assert_eq!(tree.max(2, 2).unwrap(), -8);
    assert_eq!(tree.min(0, 1).unwrap(), -5);
}

#[test]
fn sum_wraps_on_overflow() {
    let tree = RangeTree::new(&[i64::MAX, 1]);
    assert_eq!(tree.sum(0, 1).unwrap(), i64::MIN);
    assert_eq!(tree.max(0, 1).unwrap(), i64::MAX);
}

#[test]
fn constructors_agree() {
    let values = vec![9, 8, 7, 6];
    let a = RangeTree::new(&values);
    let b = RangeTree::from(values.clone());
    let c: RangeTree = values.iter().copied().collect();
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.nodes(), c.nodes());
}

#[test]
fn input_is_copied() {
    let mut values = vec![1, 2, 3];
    let tree = RangeTree::new(&values);
    values[0] = 100;
    assert_eq!(tree.get(0), Some(1));
    assert_eq!(tree.sum(0, 2).unwrap(), 6);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_tree_rejects_queries() {
    let tree = RangeTree::new(&[]);
    assert!(matches!(tree.sum(0, 0), Err(TreeError::Empty)));
    assert!(matches!(tree.min(0, 0), Err(TreeError::Empty)));
    assert!(matches!(tree.max(0, 0), Err(TreeError::Empty)));
    assert_eq!(tree.total(), Stats::IDENTITY);
}

#[test]
fn inverted_and_out_of_bounds() {
    let tree = RangeTree::new(&[1, 2, 3, 4]);
    assert!(matches!(
        tree.sum(3, 1),
        Err(TreeError::InvertedRange { left: 3, right: 1 })
    ));
    assert!(matches!(
        tree.min(2, 4),
        Err(TreeError::OutOfBounds { index: 4, len: 4 })
    ));
    assert!(matches!(
        tree.max(10, 20),
        Err(TreeError::OutOfBounds { index: 20, len: 4 })
    ));
}

#[test]
fn error_messages() {
    assert_eq!(TreeError::Empty.to_string(), "tree is empty");
    assert_eq!(
        TreeError::InvertedRange { left: 3, right: 1 }.to_string(),
        "inverted range [3, 1]"
    );
    assert_eq!(
        TreeError::OutOfBounds { index: 4, len: 4 }.to_string(),
        "index 4 out of bounds for length 4"
    );
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn out_of_range_update_changes_nothing() {
    let mut tree = RangeTree::new(&[2, 1, 4, 3, 5]);
    let before = tree.nodes();
    tree.update(5, 99);
    tree.update(usize::MAX, 99);
    assert_eq!(tree.nodes(), before);
    assert_eq!(tree.sum(0, 4).unwrap(), 15);
}

#[test]
fn repeated_update_is_idempotent() {
    let mut once = RangeTree::new(&[4, 4, 4, 4, 4, 4]);
    let mut twice = once.clone();
    once.update(3, -2);
    twice.update(3, -2);
    twice.update(3, -2);
    assert_eq!(once.nodes(), twice.nodes());
}

#[test]
fn update_every_index() {
    let mut tree = RangeTree::new(&[0; 13]);
    for i in 0..13 {
        tree.update(i, i as i64 * 2);
    }
    assert_eq!(tree.sum(0, 12).unwrap(), (0..13).map(|i| i * 2).sum::<i64>());
    assert_eq!(tree.min(0, 12).unwrap(), 0);
    assert_eq!(tree.max(0, 12).unwrap(), 24);
    assert_eq!(tree.max(3, 5).unwrap(), 10);
}

// =============================================================================
// Dump
// =============================================================================

#[test]
fn dump_format() {
    let tree = RangeTree::new(&[2, 1, 4, 3, 5]);
    let mut out = Vec::new();
    tree.dump(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Index\tRange\tSum\tMin\tMax");
    assert_eq!(lines[1], "0\t[0,4]\t15\t1\t5");
    assert_eq!(lines[2], "1\t[0,2]\t7\t1\t4");
    assert_eq!(lines[3], "3\t[0,1]\t3\t1\t2");
    assert_eq!(lines[4], "7\t[0,0]\t2\t2\t2");
    assert_eq!(lines.len(), 10);
    assert_eq!(text, tree.to_string());
}

#[test]
fn dump_of_empty_tree_is_header_only() {
    let tree = RangeTree::new(&[]);
    assert_eq!(tree.to_string(), "Index\tRange\tSum\tMin\tMax\n");
}

#[test]
fn dump_does_not_mutate() {
    let tree = RangeTree::new(&[1, 2, 3]);
    let before = tree.nodes();
    let _ = tree.to_string();
    assert_eq!(tree.nodes(), before);
}

// =============================================================================
// Shared access
// =============================================================================

#[test]
fn readers_share_writer_excludes() {
    let tree = RwLock::new(RangeTree::new(&[1, 2, 3, 4, 5, 6, 7, 8]));

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let guard = tree.read().unwrap();
                let sum = guard.sum(0, 7).unwrap();
                // Either before or after the write, never in between.
                assert!(sum == 36 || sum == 136, "torn read: {}", sum);
            });
        }
        s.spawn(|| {
            tree.write().unwrap().update(0, 101);
        });
    });

    assert_eq!(tree.read().unwrap().sum(0, 7).unwrap(), 136);
}
