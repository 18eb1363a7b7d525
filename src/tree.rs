// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Fixed-size segment tree over `i64` values.
//!
//! The tree is stored as a flat array of [`Stats`] nodes. Node `i` has
//! children `2i + 1` and `2i + 2`, and node 0 covers the whole backing array.
//! Every node covers `[left, right]` and children split it at
//! `left + (right - left) / 2`.
//!
//! Complexity:
//! - new: O(n)
//! - query / sum / min / max: O(log n)
//! - update: O(log n)
//! - nodes / dump: O(n)
//!
//! # Invariants
//!
//! 1. Every internal node is the combine of its two children.
//! 2. The leaf covering index `i` holds `Stats::leaf(values[i])`.
//! 3. The shape (capacity and node count) never changes after construction.

use std::fmt;
use std::io;
use std::ops::Bound;
use std::ops::RangeBounds;

use smallvec::SmallVec;

use crate::aggregate::{Aggregate, Stats};
use crate::error::{Result, TreeError};

/// A node as seen by a pre-order traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    /// Position in the node array.
    pub position: usize,
    /// First index covered, inclusive.
    pub left: usize,
    /// Last index covered, inclusive.
    pub right: usize,
    pub stats: Stats,
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}\t[{},{}]\t{}", self.position, self.left, self.right, self.stats);
    }
}

/// Range sum, min and max over a fixed sequence of integers with point
/// updates.
///
/// ```
/// use rangeagg::RangeTree;
///
/// let mut tree = RangeTree::new(&[2, 1, 4, 3, 5]);
/// assert_eq!(tree.sum(1, 4).unwrap(), 13);
/// assert_eq!(tree.min(1, 4).unwrap(), 1);
///
/// tree.update(2, 10);
/// assert_eq!(tree.max(1, 4).unwrap(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct RangeTree {
    /// Source of truth for leaf values.
    values: Vec<i64>,
    /// Implicit binary tree, `2 * capacity - 1` nodes.
    nodes: Vec<Stats>,
    /// Smallest power of two `>= values.len()`, at least 1.
    capacity: usize,
}

impl RangeTree {
    /// Build a tree over a copy of `values`.
    ///
    /// An empty slice yields a tree with a single identity node; every
    /// query on it fails with [`TreeError::Empty`].
    pub fn new(values: &[i64]) -> RangeTree {
        return RangeTree::from_vec(values.to_vec());
    }

    fn from_vec(values: Vec<i64>) -> RangeTree {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("range_tree_build", len = values.len()).entered();

        let capacity = values.len().next_power_of_two();
        let mut tree = RangeTree {
            values,
            nodes: vec![Stats::IDENTITY; 2 * capacity - 1],
            capacity,
        };

        if !tree.values.is_empty() {
            tree.build(0, 0, tree.values.len() - 1);
        }

        return tree;
    }

    fn build(&mut self, node: usize, left: usize, right: usize) {
        // Only [0, n-1] is built, so every leaf reached here is real. Slots
        // past the logical range keep the identity from the initial fill.
        if left == right {
            self.nodes[node] = Stats::leaf(self.values[left]);
            return;
        }

        let mid = left + (right - left) / 2;
        self.build(2 * node + 1, left, mid);
        self.build(2 * node + 2, mid + 1, right);
        self.pull(node);
    }

    /// Recompute `node` from its children.
    #[inline]
    fn pull(&mut self, node: usize) {
        self.nodes[node] = self.nodes[2 * node + 1].combine(&self.nodes[2 * node + 2]);
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        return self.values.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.values.is_empty();
    }

    /// Smallest power of two that is at least `len()`, and at least 1.
    #[inline]
    pub fn capacity(&self) -> usize {
        return self.capacity;
    }

    /// Size of the node array, always `2 * capacity() - 1`.
    #[inline]
    pub fn node_count(&self) -> usize {
        return self.nodes.len();
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Option<i64> {
        return self.values.get(index).copied();
    }

    /// The backing array.
    pub fn values(&self) -> &[i64] {
        return &self.values;
    }

    /// Aggregate over every element; the identity when empty.
    pub fn total(&self) -> Stats {
        return self.nodes[0];
    }

    /// Aggregate over the inclusive range `[left, right]`.
    pub fn query(&self, left: usize, right: usize) -> Result<Stats> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("range_tree_query", left, right).entered();

        self.check_range(left, right)?;
        return Ok(self.query_node(0, 0, self.values.len() - 1, left, right));
    }

    fn check_range(&self, left: usize, right: usize) -> Result<()> {
        if self.values.is_empty() {
            return Err(TreeError::Empty);
        }
        if left > right {
            return Err(TreeError::InvertedRange { left, right });
        }
        if right >= self.values.len() {
            return Err(TreeError::OutOfBounds {
                index: right,
                len: self.values.len(),
            });
        }
        return Ok(());
    }

    fn query_node(
        &self,
        node: usize,
        node_left: usize,
        node_right: usize,
        left: usize,
        right: usize,
    ) -> Stats {
        if node_right < left || node_left > right {
            return Stats::IDENTITY;
        }
        if left <= node_left && node_right <= right {
            return self.nodes[node];
        }

        let mid = node_left + (node_right - node_left) / 2;
        let l = self.query_node(2 * node + 1, node_left, mid, left, right);
        let r = self.query_node(2 * node + 2, mid + 1, node_right, left, right);
        return l.combine(&r);
    }

    /// Aggregate over any Rust range expression, e.g. `tree.query_range(1..4)`
    /// or `tree.query_range(..)`.
    ///
    /// Follows slice indexing: an empty range such as `3..3` is valid as long
    /// as it lies within `[0, len]`, and yields the identity.
    pub fn query_range(&self, range: impl RangeBounds<usize>) -> Result<Stats> {
        let len = self.values.len();
        if len == 0 {
            return Err(TreeError::Empty);
        }

        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => match e.checked_add(1) {
                Some(end) => end,
                None => return Err(TreeError::OutOfBounds { index: e, len }),
            },
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        if end > len {
            return Err(TreeError::OutOfBounds { index: end - 1, len });
        }
        if start > end {
            return Err(TreeError::InvertedRange {
                left: start,
                right: end.saturating_sub(1),
            });
        }
        if start == end {
            return Ok(Stats::IDENTITY);
        }
        return self.query(start, end - 1);
    }

    /// Sum over the inclusive range `[left, right]`, wrapping on overflow.
    pub fn sum(&self, left: usize, right: usize) -> Result<i64> {
        return Ok(self.query(left, right)?.sum);
    }

    /// Minimum over the inclusive range `[left, right]`.
    pub fn min(&self, left: usize, right: usize) -> Result<i64> {
        return Ok(self.query(left, right)?.min);
    }

    /// Maximum over the inclusive range `[left, right]`.
    pub fn max(&self, left: usize, right: usize) -> Result<i64> {
        return Ok(self.query(left, right)?.max);
    }

    /// Set the element at `index` to `value`.
    ///
    /// An out-of-range `index` is ignored and leaves the tree untouched.
    /// Use [`RangeTree::try_update`] to be told about it.
    pub fn update(&mut self, index: usize, value: i64) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("range_tree_update", index, value).entered();

        if index >= self.values.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, len = self.values.len(), "ignoring out-of-range update");
            return;
        }

        self.values[index] = value;
        let last = self.values.len() - 1;
        self.update_node(0, 0, last, index, value);
    }

    /// Like [`RangeTree::update`], but an out-of-range `index` is an error.
    pub fn try_update(&mut self, index: usize, value: i64) -> Result<()> {
        if index >= self.values.len() {
            return Err(TreeError::OutOfBounds {
                index,
                len: self.values.len(),
            });
        }
        self.update(index, value);
        return Ok(());
    }

    fn update_node(&mut self, node: usize, left: usize, right: usize, index: usize, value: i64) {
        if left == right {
            self.nodes[node] = Stats::leaf(value);
            return;
        }

        let mid = left + (right - left) / 2;
        if index <= mid {
            self.update_node(2 * node + 1, left, mid, index, value);
        } else {
            self.update_node(2 * node + 2, mid + 1, right, index, value);
        }
        self.pull(node);
    }

    /// Every node covering part of the backing array, in pre-order
    /// (node, left subtree, right subtree). Empty when the tree is empty.
    pub fn nodes(&self) -> Vec<NodeInfo> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if self.values.is_empty() {
            return out;
        }

        // Depth is at most log2(capacity) + 1, and the stack holds at most
        // one pending right sibling per level plus the current node.
        let mut stack: SmallVec<[(usize, usize, usize); 64]> = SmallVec::new();
        stack.push((0, 0, self.values.len() - 1));

        while let Some((position, left, right)) = stack.pop() {
            out.push(NodeInfo {
                position,
                left,
                right,
                stats: self.nodes[position],
            });
            if left != right {
                let mid = left + (right - left) / 2;
                stack.push((2 * position + 2, mid + 1, right));
                stack.push((2 * position + 1, left, mid));
            }
        }

        return out;
    }

    /// Write the pre-order dump: a header line, then one
    /// `position [left,right] sum min max` line per node, tab separated.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        return write!(out, "{}", self);
    }
}

impl fmt::Display for RangeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index\tRange\tSum\tMin\tMax")?;
        for node in self.nodes() {
            writeln!(f, "{}", node)?;
        }
        return Ok(());
    }
}

impl From<Vec<i64>> for RangeTree {
    fn from(values: Vec<i64>) -> Self {
        return RangeTree::from_vec(values);
    }
}

impl FromIterator<i64> for RangeTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        return RangeTree::from_vec(iter.into_iter().collect());
    }
}
