// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Demonstration driver: read a sequence, query it, update it, dump it.
//!
//! Input and output are injected so the same routine serves the binary
//! (stdin/stdout) and tests (in-memory buffers).

use std::io::{Read, Write};

use crate::error::{Result, TreeError};
use crate::tree::RangeTree;

/// What the driver queries and updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Left bound of the queried range, inclusive.
    pub left: usize,
    /// Right bound of the queried range, inclusive.
    pub right: usize,
    /// Index written between the two rounds of queries.
    pub index: usize,
    pub value: i64,
    /// Print the node dump at the end.
    pub dump: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        return DriverConfig {
            left: 1,
            right: 4,
            index: 2,
            value: 10,
            dump: true,
        };
    }
}

/// Parse a size `n` followed by `n` integers, separated by any whitespace.
/// Tokens after the `n`th value are ignored.
pub fn read_values<R: Read>(mut input: R) -> Result<Vec<i64>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let size = tokens
        .next()
        .ok_or_else(|| TreeError::Parse("missing array size".to_string()))?;
    let size: usize = size
        .parse()
        .map_err(|e| TreeError::Parse(format!("bad array size {:?}: {}", size, e)))?;

    // The header is untrusted; never reserve more than the input could hold.
    let mut values = Vec::with_capacity(size.min(text.len() / 2 + 1));
    for i in 0..size {
        let token = tokens.next().ok_or_else(|| {
            TreeError::Parse(format!("expected {} values, found {}", size, i))
        })?;
        let value = token
            .parse::<i64>()
            .map_err(|e| TreeError::Parse(format!("bad value {:?}: {}", token, e)))?;
        values.push(value);
    }

    return Ok(values);
}

/// Write `label [left..right]: value`, or an `error:` line if the query failed.
fn report<W: Write>(out: &mut W, label: &str, config: &DriverConfig, result: Result<i64>) -> Result<()> {
    match result {
        Ok(value) => writeln!(out, "{} [{}..{}]: {}", label, config.left, config.right, value)?,
        Err(e) => writeln!(out, "{} [{}..{}]: error: {}", label, config.left, config.right, e)?,
    }
    return Ok(());
}

/// Run the demonstration against `input`, writing the report to `out`.
///
/// Returns the tree in its final state. Only malformed input and I/O
/// failures are errors; failed queries are reported inline.
pub fn run<R: Read, W: Write>(input: R, out: &mut W, config: &DriverConfig) -> Result<RangeTree> {
    let values = read_values(input)?;

    #[cfg(feature = "tracing")]
    tracing::info!(len = values.len(), ?config, "building range tree");

    let mut tree = RangeTree::from(values);
    let (l, r) = (config.left, config.right);

    report(out, "Sum", config, tree.sum(l, r))?;
    report(out, "Min", config, tree.min(l, r))?;
    report(out, "Max", config, tree.max(l, r))?;

    tree.update(config.index, config.value);
    writeln!(out)?;
    writeln!(out, "After update:")?;
    report(out, "Sum", config, tree.sum(l, r))?;
    report(out, "Max", config, tree.max(l, r))?;

    if config.dump {
        writeln!(out)?;
        writeln!(out, "Tree structure:")?;
        writeln!(out, "Segment Tree Structure:")?;
        tree.dump(out)?;
    }

    return Ok(tree);
}
