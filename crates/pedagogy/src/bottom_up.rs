// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Iterative bottom-up segment tree.
//!
//! Leaves live at `capacity..2 * capacity`, node `i` has children `2i` and
//! `2i + 1`, and slot 0 is unused. Queries climb from both ends of the range
//! towards the root, so there is no recursion at all.
//!
//! Complexity:
//! - new: O(n)
//! - query: O(log n)
//! - update: O(log n)

use crate::RangeAggregate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
    sum: i64,
    min: i64,
    max: i64,
}

impl Node {
    const EMPTY: Node = Node {
        sum: 0,
        min: i64::MAX,
        max: i64::MIN,
    };

    fn leaf(value: i64) -> Node {
        return Node {
            sum: value,
            min: value,
            max: value,
        };
    }

    fn combine(&self, other: &Node) -> Node {
        return Node {
            sum: self.sum.wrapping_add(other.sum),
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        };
    }
}

#[derive(Clone, Debug)]
pub struct BottomUpTree {
    len: usize,
    capacity: usize,
    nodes: Vec<Node>,
}

impl BottomUpTree {
    pub fn new(values: &[i64]) -> BottomUpTree {
        let capacity = values.len().next_power_of_two();
        let mut nodes = vec![Node::EMPTY; 2 * capacity];
        for (i, &v) in values.iter().enumerate() {
            nodes[capacity + i] = Node::leaf(v);
        }
        for i in (1..capacity).rev() {
            nodes[i] = nodes[2 * i].combine(&nodes[2 * i + 1]);
        }
        return BottomUpTree {
            len: values.len(),
            capacity,
            nodes,
        };
    }

    fn query(&self, left: usize, right: usize) -> Option<Node> {
        if left > right || right >= self.len {
            return None;
        }

        // Half-open [lo, hi) over leaf positions.
        let mut lo = left + self.capacity;
        let mut hi = right + 1 + self.capacity;
        let mut acc_left = Node::EMPTY;
        let mut acc_right = Node::EMPTY;

        while lo < hi {
            if lo & 1 == 1 {
                acc_left = acc_left.combine(&self.nodes[lo]);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                acc_right = self.nodes[hi].combine(&acc_right);
            }
            lo >>= 1;
            hi >>= 1;
        }

        return Some(acc_left.combine(&acc_right));
    }
}

impl RangeAggregate for BottomUpTree {
    fn len(&self) -> usize {
        return self.len;
    }

    fn sum(&self, left: usize, right: usize) -> Option<i64> {
        return self.query(left, right).map(|n| n.sum);
    }

    fn min(&self, left: usize, right: usize) -> Option<i64> {
        return self.query(left, right).map(|n| n.min);
    }

    fn max(&self, left: usize, right: usize) -> Option<i64> {
        return self.query(left, right).map(|n| n.max);
    }

    fn update(&mut self, index: usize, value: i64) {
        if index >= self.len {
            return;
        }
        let mut i = index + self.capacity;
        self.nodes[i] = Node::leaf(value);
        while i > 1 {
            i >>= 1;
            self.nodes[i] = self.nodes[2 * i].combine(&self.nodes[2 * i + 1]);
        }
    }
}
