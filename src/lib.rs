// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Rangeagg - range sum, min and max queries over a fixed integer sequence.
//!
//! # Quick Start
//!
//! ```
//! use rangeagg::RangeTree;
//!
//! let mut tree = RangeTree::new(&[2, 1, 4, 3, 5]);
//! assert_eq!(tree.sum(1, 4).unwrap(), 13);
//! assert_eq!(tree.min(1, 4).unwrap(), 1);
//! assert_eq!(tree.max(1, 4).unwrap(), 5);
//!
//! tree.update(2, 10);
//! assert_eq!(tree.sum(1, 4).unwrap(), 19);
//! assert_eq!(tree.max(1, 4).unwrap(), 10);
//! ```
//!
//! Queries validate their bounds and return [`TreeError`] for empty trees,
//! inverted ranges and out-of-bounds indexes. [`RangeTree::update`] ignores
//! out-of-range indexes; [`RangeTree::try_update`] reports them.

pub mod aggregate;
pub mod driver;
pub mod error;
pub mod tree;

pub use aggregate::{Aggregate, Stats};
pub use error::{Result, TreeError};
pub use tree::{NodeInfo, RangeTree};
