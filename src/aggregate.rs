// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Aggregates stored in the nodes of a range tree.
//!
//! Every node summarizes a contiguous sub-range of the backing array. The
//! summary must form a monoid: `combine` is associative and `Default`
//! is the identity, so the tree can merge sibling summaries in any grouping
//! and pad missing leaves without changing a result.

use std::fmt;

/// A trait for values that can be aggregated in a range tree.
///
/// `Default` must return the identity: `a.combine(&Default::default()) == a`.
pub trait Aggregate: Clone + Default {
    /// Combine two aggregates.
    fn combine(&self, other: &Self) -> Self;
}

/// Sum, minimum, maximum and element count over a sub-range.
///
/// The identity covers zero elements. Its `min` and `max` sit at the far
/// ends of the `i64` domain so that combining with it never moves a real
/// bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stats {
    /// Wrapping sum of every element covered.
    pub sum: i64,
    pub min: i64,
    pub max: i64,
    /// Number of real (non-padding) elements covered.
    pub count: usize,
}

impl Stats {
    /// The aggregate over no elements.
    pub const IDENTITY: Stats = Stats {
        sum: 0,
        min: i64::MAX,
        max: i64::MIN,
        count: 0,
    };

    /// The aggregate over the single element `value`.
    #[inline]
    pub fn leaf(value: i64) -> Stats {
        return Stats {
            sum: value,
            min: value,
            max: value,
            count: 1,
        };
    }

    /// True if this aggregate covers no elements.
    #[inline]
    pub fn is_identity(&self) -> bool {
        return self.count == 0;
    }

    /// Arithmetic mean of the covered elements, `None` for the identity.
    pub fn mean(&self) -> Option<f64> {
        if self.is_identity() {
            return None;
        }
        return Some(self.sum as f64 / self.count as f64);
    }
}

impl Default for Stats {
    fn default() -> Self {
        return Stats::IDENTITY;
    }
}

impl Aggregate for Stats {
    #[inline]
    fn combine(&self, other: &Self) -> Self {
        return Stats {
            sum: self.sum.wrapping_add(other.sum),
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            count: self.count + other.count,
        };
    }
}

impl fmt::Display for Stats {
    /// Tab-separated `sum min max`; min and max print as `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "{}\t-\t-", self.sum);
        }
        return write!(f, "{}\t{}\t{}", self.sum, self.min, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_aggregate() {
        let leaf = Stats::leaf(7);
        assert_eq!(leaf.sum, 7);
        assert_eq!(leaf.min, 7);
        assert_eq!(leaf.max, 7);
        assert_eq!(leaf.count, 1);
        assert!(!leaf.is_identity());
    }

    #[test]
    fn combine_aggregate() {
        let a = Stats::leaf(2).combine(&Stats::leaf(-3));
        let b = Stats::leaf(9);
        let combined = a.combine(&b);
        assert_eq!(combined.sum, 8);
        assert_eq!(combined.min, -3);
        assert_eq!(combined.max, 9);
        assert_eq!(combined.count, 3);
    }

    #[test]
    fn identity_is_neutral() {
        let a = Stats::leaf(i64::MIN).combine(&Stats::leaf(i64::MAX));
        assert_eq!(a.combine(&Stats::IDENTITY), a);
        assert_eq!(Stats::IDENTITY.combine(&a), a);
        assert_eq!(Stats::default(), Stats::IDENTITY);
        assert!(Stats::IDENTITY.combine(&Stats::IDENTITY).is_identity());
    }

    #[test]
    fn combine_is_commutative() {
        let a = Stats::leaf(4).combine(&Stats::leaf(1));
        let b = Stats::leaf(-6);
        assert_eq!(a.combine(&b), b.combine(&a));
    }

    #[test]
    fn sum_wraps() {
        let a = Stats::leaf(i64::MAX);
        let b = Stats::leaf(1);
        assert_eq!(a.combine(&b).sum, i64::MIN);
    }

    #[test]
    fn mean() {
        assert_eq!(Stats::IDENTITY.mean(), None);
        let a = Stats::leaf(1).combine(&Stats::leaf(2));
        assert_eq!(a.mean(), Some(1.5));
    }

    #[test]
    fn display() {
        assert_eq!(Stats::IDENTITY.to_string(), "0\t-\t-");
        let a = Stats::leaf(3).combine(&Stats::leaf(-1));
        assert_eq!(a.to_string(), "2\t-1\t3");
    }
}
