//! Read-only wire view of a participant's round state.

use serde::{Deserialize, Serialize};
use shared_types::Value;

/// Snapshot returned by the `get state` operation.
///
/// Field names are the wire names served by `GET /getState`:
/// `killed` (stopped flag), `x` (current proposal), `decided`
/// (`null` before start, `false` while running, `true` once final),
/// `k` (current round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub killed: bool,
    pub x: Value,
    pub decided: Option<bool>,
    pub k: u64,
}
