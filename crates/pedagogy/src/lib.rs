// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Educational range aggregate implementations.
//!
//! This crate provides simple alternatives to `rangeagg::RangeTree` so the
//! main crate has something independent to check itself against. It is
//! designed for:
//!
//! - Serving as a correctness oracle in property tests and fuzzing
//! - Comparing strategies in benchmarks
//!
//! # Implementations
//!
//! | Implementation | Strategy | Query | Update |
//! |----------------|----------|-------|--------|
//! | `LinearScan` | rescan the slice | O(n) | O(1) |
//! | `BottomUpTree` | iterative segment tree | O(log n) | O(log n) |
//!
//! # Example
//!
//! ```
//! use pedagogy::{BottomUpTree, LinearScan, RangeAggregate};
//!
//! let mut naive = LinearScan::new(&[2, 1, 4, 3, 5]);
//! let mut fast = BottomUpTree::new(&[2, 1, 4, 3, 5]);
//!
//! naive.update(2, 10);
//! fast.update(2, 10);
//! assert_eq!(naive.sum(1, 4), Some(19));
//! assert_eq!(fast.sum(1, 4), naive.sum(1, 4));
//! ```

pub mod bottom_up;
pub mod linear_scan;

pub use bottom_up::BottomUpTree;
pub use linear_scan::LinearScan;

/// Point updates and inclusive range queries over `i64` values.
///
/// Queries return `None` when `left > right` or `right >= len()`.
/// Sums wrap on overflow.
pub trait RangeAggregate {
    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    fn sum(&self, left: usize, right: usize) -> Option<i64>;
    fn min(&self, left: usize, right: usize) -> Option<i64>;
    fn max(&self, left: usize, right: usize) -> Option<i64>;

    /// Set the element at `index`. Out-of-range indexes are ignored.
    fn update(&mut self, index: usize, value: i64);
}
