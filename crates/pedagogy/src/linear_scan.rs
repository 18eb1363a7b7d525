// model = "claude-opus-4-5"
// created = 2026-10-17
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! The obvious implementation: keep the values, rescan on every query.

use crate::RangeAggregate;

/// Plain vector, every query walks the range.
#[derive(Clone, Debug, Default)]
pub struct LinearScan {
    values: Vec<i64>,
}

impl LinearScan {
    pub fn new(values: &[i64]) -> LinearScan {
        return LinearScan {
            values: values.to_vec(),
        };
    }

    pub fn values(&self) -> &[i64] {
        return &self.values;
    }

    fn range(&self, left: usize, right: usize) -> Option<&[i64]> {
        if left > right || right >= self.values.len() {
            return None;
        }
        return Some(&self.values[left..=right]);
    }
}

impl RangeAggregate for LinearScan {
    fn len(&self) -> usize {
        return self.values.len();
    }

    fn sum(&self, left: usize, right: usize) -> Option<i64> {
        let range = self.range(left, right)?;
        return Some(range.iter().fold(0i64, |acc, &v| acc.wrapping_add(v)));
    }

    fn min(&self, left: usize, right: usize) -> Option<i64> {
        return self.range(left, right)?.iter().copied().min();
    }

    fn max(&self, left: usize, right: usize) -> Option<i64> {
        return self.range(left, right)?.iter().copied().max();
    }

    fn update(&mut self, index: usize, value: i64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }
}
