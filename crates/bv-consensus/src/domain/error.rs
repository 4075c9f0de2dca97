//! Error types for the consensus participant.

/// Consensus error taxonomy.
///
/// None of these are fatal to the process: lifecycle violations and rejected
/// deliveries are surfaced to the caller with state unchanged, and transport
/// failures never reach this enum at all (they are logged and absorbed by
/// the round controller).
#[derive(Debug, thiserror::Error)]
pub enum ConsensusError {
    /// `start()` called on a participant that cannot run rounds.
    #[error("cannot start: {0}")]
    CannotStart(&'static str),

    /// Delivery to a stopped or faulty participant.
    #[error("node is not participating")]
    NotParticipating,

    /// Structurally invalid participant configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for consensus operations.
pub type ConsensusResult<T> = Result<T, ConsensusError>;
