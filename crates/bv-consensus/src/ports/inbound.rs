//! Driving port (the control surface).

use crate::domain::{ConsensusResult, HealthStatus, StateSnapshot};
use async_trait::async_trait;
use shared_types::{ParticipantId, Value};

/// Lifecycle operations the host process drives a participant with.
///
/// No operation blocks the caller beyond a single local mutation: `start`
/// spawns the round loop and returns immediately, and every other operation
/// stays answerable while a round's collection window is in progress.
#[async_trait]
pub trait ParticipantApi: Send + Sync {
    /// Unhealthy iff the participant is faulty, independent of lifecycle.
    async fn health(&self) -> HealthStatus;

    /// Deliver a value received from a peer into the open round's inbox.
    ///
    /// Returns `NotParticipating` without mutating state if the participant
    /// is stopped or faulty.
    async fn deliver(
        &self,
        from: ParticipantId,
        round: u64,
        value: Value,
    ) -> ConsensusResult<()>;

    /// Transition Idle → Running and begin the round loop.
    ///
    /// Rejected with `CannotStart` if the participant is faulty, stopped,
    /// already running, or already decided; state is unchanged on rejection.
    async fn start(&self) -> ConsensusResult<()>;

    /// Set the stopped flag. Idempotent.
    ///
    /// A round that already committed to broadcasting still completes its
    /// collection window and decision step, but no further round is
    /// scheduled and no further deliveries are accepted.
    async fn stop(&self);

    /// Read-only snapshot reflecting the latest mutation.
    async fn snapshot(&self) -> StateSnapshot;
}
