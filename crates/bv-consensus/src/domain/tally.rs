//! Per-symbol value counts for one round.

use shared_types::Value;

/// Counts of each value symbol received during a round.
///
/// Produced by draining the round inbox; consumed by the decision rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueTally {
    zero: usize,
    one: usize,
    unknown: usize,
}

impl ValueTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one received value.
    pub fn record(&mut self, value: Value) {
        match value {
            Value::Zero => self.zero += 1,
            Value::One => self.one += 1,
            Value::Unknown => self.unknown += 1,
        }
    }

    /// Count recorded for a symbol.
    pub fn count(&self, value: Value) -> usize {
        match value {
            Value::Zero => self.zero,
            Value::One => self.one,
            Value::Unknown => self.unknown,
        }
    }

    /// Total values recorded this round.
    pub fn total(&self) -> usize {
        self.zero + self.one + self.unknown
    }
}

impl FromIterator<Value> for ValueTally {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut tally = Self::new();
        for value in iter {
            tally.record(value);
        }
        tally
    }
}
