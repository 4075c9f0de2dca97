//! Domain layer for the consensus participant.
//!
//! Pure types and logic with no I/O:
//! - config: per-participant configuration
//! - lifecycle: the Idle/Running/Decided state machine
//! - inbox: the round-scoped inbox of received values
//! - tally: per-symbol counts for one round
//! - decision: the strict-majority decision rule
//! - snapshot: the read-only wire view of participant state
//! - error: consensus error taxonomy

mod config;
mod decision;
mod error;
mod inbox;
mod lifecycle;
mod snapshot;
mod tally;

pub use config::*;
pub use decision::*;
pub use error::*;
pub use inbox::*;
pub use lifecycle::*;
pub use snapshot::*;
pub use tally::*;
