// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Error types for range tree queries and the demonstration driver.

use thiserror::Error;

/// Everything that can go wrong when querying a [`RangeTree`](crate::RangeTree)
/// or feeding it input.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The tree holds no elements, so no range is valid.
    #[error("tree is empty")]
    Empty,

    /// The left bound of a query lies past its right bound.
    #[error("inverted range [{left}, {right}]")]
    InvertedRange { left: usize, right: usize },

    /// An index lies outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Input could not be parsed into a size and that many integers.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TreeError>;
