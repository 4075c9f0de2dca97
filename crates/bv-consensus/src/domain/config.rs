//! Per-participant configuration.

use super::{ConsensusError, ConsensusResult};
use shared_types::{ParticipantId, Value};
use std::time::Duration;

/// Configuration for a single consensus participant.
#[derive(Debug, Clone)]
pub struct ParticipantConfig {
    /// This participant's identifier (`0..total_participants`).
    pub id: ParticipantId,
    /// Total number of participants N.
    pub total_participants: usize,
    /// Faulty-tolerance bound F. Informational: the decision rule does not
    /// use it, the orchestrator does.
    pub fault_tolerance: usize,
    /// The value this participant proposes in its first round.
    pub initial_value: Value,
    /// Set at creation, never changes. A faulty participant reports
    /// unhealthy, rejects inbound messages, and cannot be started.
    pub faulty: bool,
    /// How long each round waits for inbound values before deciding.
    pub collection_window: Duration,
    /// Maximum number of rounds before the participant finalizes.
    pub round_budget: u64,
}

/// Default number of rounds before finalizing.
pub const DEFAULT_ROUND_BUDGET: u64 = 5;

/// Default collection window per round.
pub const DEFAULT_COLLECTION_WINDOW: Duration = Duration::from_secs(3);

impl ParticipantConfig {
    /// Configuration for participant `id` of `total_participants`, with
    /// defaults for everything else.
    pub fn new(id: ParticipantId, total_participants: usize, initial_value: Value) -> Self {
        Self {
            id,
            total_participants,
            fault_tolerance: 0,
            initial_value,
            faulty: false,
            collection_window: DEFAULT_COLLECTION_WINDOW,
            round_budget: DEFAULT_ROUND_BUDGET,
        }
    }

    /// Check structural validity before constructing a participant.
    pub fn validate(&self) -> ConsensusResult<()> {
        if self.total_participants == 0 {
            return Err(ConsensusError::InvalidConfig(
                "total_participants must be at least 1".into(),
            ));
        }
        if (self.id as usize) >= self.total_participants {
            return Err(ConsensusError::InvalidConfig(format!(
                "participant id {} out of range for N={}",
                self.id, self.total_participants
            )));
        }
        if self.round_budget == 0 {
            return Err(ConsensusError::InvalidConfig(
                "round_budget must be at least 1".into(),
            ));
        }
        if self.collection_window.is_zero() {
            return Err(ConsensusError::InvalidConfig(
                "collection_window must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
