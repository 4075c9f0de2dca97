//! The round-scoped inbox of received values.

use super::ValueTally;
use parking_lot::Mutex;
use shared_types::Value;

/// Unordered multiset of values received from peers during the current round.
///
/// Supports concurrent append from arbitrary callers while the round loop is
/// waiting out its collection window. Drained exactly once, atomically, at
/// window expiry; drained entries never leak into the next round.
#[derive(Debug, Default)]
pub struct RoundInbox {
    values: Mutex<Vec<Value>>,
}

impl RoundInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a received value to the open round.
    pub fn push(&self, value: Value) {
        self.values.lock().push(value);
    }

    /// Number of values currently buffered.
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Take everything received this round and tally it, leaving the inbox
    /// empty for the next round. The swap happens under the lock, so an
    /// append racing with the drain lands in exactly one round.
    pub fn drain(&self) -> ValueTally {
        let values = std::mem::take(&mut *self.values.lock());
        values.into_iter().collect()
    }
}
