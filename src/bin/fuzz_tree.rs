//! AFL fuzz harness for `RangeTree`.
//!
//! Builds a tree from the first part of the input, then replays the rest
//! as updates and queries, checking every answer against a linear rescan:
//! 1. In-range queries agree with `LinearScan` on sum, min and max
//! 2. Out-of-range or inverted queries are errors, never answers
//! 3. Out-of-range updates leave the tree unchanged

use afl::fuzz;
use pedagogy::{LinearScan, RangeAggregate};
use rangeagg::RangeTree;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Set one element, possibly past the end
    Update { index: u8, value: i64 },
    /// Query an inclusive range, possibly inverted or past the end
    Query { left: u8, right: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 2;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 9 => {
                let mut raw = [0u8; 8];
                raw.copy_from_slice(&rest[1..9]);
                let op = FuzzOp::Update {
                    index: rest[0],
                    value: i64::from_le_bytes(raw),
                };
                Some((op, &rest[9..]))
            }
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Query {
                    left: rest[0],
                    right: rest[1],
                };
                Some((op, &rest[2..]))
            }
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        if data.is_empty() {
            return;
        }

        // First byte is the length, then one signed byte per element.
        let len = (data[0] as usize).min(data.len() - 1);
        let values: Vec<i64> = data[1..=len].iter().map(|&b| b as i8 as i64).collect();
        let mut remaining = &data[1 + len..];

        let mut tree = RangeTree::new(&values);
        let mut scan = LinearScan::new(&values);

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Update { index, value } => {
                    let index = index as usize;
                    let before = tree.nodes();
                    tree.update(index, value);
                    scan.update(index, value);
                    if index >= len {
                        assert_eq!(tree.nodes(), before, "Out-of-range update mutated the tree");
                    }
                }

                FuzzOp::Query { left, right } => {
                    let (l, r) = (left as usize, right as usize);
                    match tree.query(l, r) {
                        Ok(stats) => {
                            assert_eq!(Some(stats.sum), scan.sum(l, r), "Sum mismatch [{}, {}]", l, r);
                            assert_eq!(Some(stats.min), scan.min(l, r), "Min mismatch [{}, {}]", l, r);
                            assert_eq!(Some(stats.max), scan.max(l, r), "Max mismatch [{}, {}]", l, r);
                        }
                        Err(_) => {
                            assert!(scan.sum(l, r).is_none(), "Valid range [{}, {}] rejected", l, r);
                        }
                    }
                }
            }
        }

        // Verify internal consistency
        assert_eq!(tree.values(), scan.values(), "Backing array mismatch");
        assert_eq!(tree.total().count, len, "Root count mismatch");
    });
}
