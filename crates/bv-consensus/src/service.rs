//! Participant service - the round controller.
//!
//! Drives one round after another: broadcast the current proposal, wait out
//! the collection window, tally what arrived, derive the next proposal, and
//! either finalize or continue. The loop runs as a spawned task so the
//! caller of `start` is never blocked, and `health`/`deliver`/`snapshot`
//! stay answerable while a window is in progress.

use crate::domain::{
    next_proposal, ConsensusError, ConsensusResult, HealthStatus, Lifecycle, ParticipantConfig,
    RoundInbox, StateSnapshot,
};
use crate::ports::{ParticipantApi, Transport};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{ParticipantId, ProposalMessage, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The per-participant mutable record, exclusively owned by its round loop.
#[derive(Debug)]
struct RoundState {
    lifecycle: Lifecycle,
    /// Orthogonal to the lifecycle: once set, no further protocol activity.
    stopped: bool,
    proposal: Value,
    round: u64,
}

/// One consensus participant.
///
/// Cheap to clone: all mutable state is behind shared handles, so the round
/// loop runs on a clone while the host keeps the original for the control
/// surface.
pub struct ParticipantService<T: Transport> {
    config: ParticipantConfig,
    transport: Arc<T>,
    state: Arc<RwLock<RoundState>>,
    inbox: Arc<RoundInbox>,
}

impl<T: Transport> Clone for ParticipantService<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
            state: Arc::clone(&self.state),
            inbox: Arc::clone(&self.inbox),
        }
    }
}

impl<T: Transport + 'static> ParticipantService<T> {
    /// Create a participant in the `Idle` state with its initial proposal.
    pub fn new(config: ParticipantConfig, transport: Arc<T>) -> ConsensusResult<Self> {
        config.validate()?;
        let state = RoundState {
            lifecycle: Lifecycle::Idle,
            stopped: false,
            proposal: config.initial_value,
            round: 0,
        };
        Ok(Self {
            config,
            transport,
            state: Arc::new(RwLock::new(state)),
            inbox: Arc::new(RoundInbox::new()),
        })
    }

    pub fn config(&self) -> &ParticipantConfig {
        &self.config
    }

    /// Commit to the next round: bump the counter and capture what to
    /// broadcast. `None` if the participant is stopped or no longer running.
    fn begin_round(&self) -> Option<(u64, Value)> {
        let mut state = self.state.write();
        if state.stopped || state.lifecycle != Lifecycle::Running {
            return None;
        }
        state.round += 1;
        Some((state.round, state.proposal))
    }

    /// Broadcast the round's proposal to every other participant. Each send
    /// is independent: a peer that cannot be reached is logged and skipped,
    /// and the round proceeds with whatever was received.
    async fn broadcast_proposal(&self, round: u64, value: Value) {
        let message = ProposalMessage {
            from_node_id: self.config.id,
            round,
            value,
        };
        for peer in 0..self.config.total_participants as ParticipantId {
            if peer == self.config.id {
                continue;
            }
            if let Err(error) = self.transport.send(peer, message).await {
                warn!(
                    participant = self.config.id,
                    peer, %error,
                    "failed to send proposal, continuing broadcast"
                );
            }
        }
    }

    /// Window expiry: drain the inbox, derive the next proposal, and
    /// finalize once the round budget is exhausted.
    fn settle_round(&self) -> Lifecycle {
        let tally = self.inbox.drain();
        let next = next_proposal(
            &tally,
            self.config.total_participants,
            &mut rand::thread_rng(),
        );

        let mut state = self.state.write();
        state.proposal = next;
        if state.round >= self.config.round_budget {
            state.lifecycle = Lifecycle::Decided;
        }
        info!(
            participant = self.config.id,
            round = state.round,
            received = tally.total(),
            proposal = %state.proposal,
            decided = state.lifecycle == Lifecycle::Decided,
            "round settled"
        );
        state.lifecycle
    }

    /// The round loop. Stop is observed at the top of each cycle: a round
    /// that already committed to broadcasting still completes its window and
    /// decision step before the loop exits.
    async fn run_rounds(self) {
        loop {
            let Some((round, proposal)) = self.begin_round() else {
                debug!(participant = self.config.id, "round loop exiting");
                return;
            };
            self.broadcast_proposal(round, proposal).await;
            tokio::time::sleep(self.config.collection_window).await;
            if self.settle_round() == Lifecycle::Decided {
                let state = self.state.read();
                info!(
                    participant = self.config.id,
                    round = state.round,
                    value = %state.proposal,
                    "consensus finalized"
                );
                return;
            }
        }
    }
}

#[async_trait]
impl<T: Transport + 'static> ParticipantApi for ParticipantService<T> {
    async fn health(&self) -> HealthStatus {
        if self.config.faulty {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        }
    }

    async fn deliver(
        &self,
        from: ParticipantId,
        round: u64,
        value: Value,
    ) -> ConsensusResult<()> {
        {
            let state = self.state.read();
            if state.stopped || self.config.faulty {
                return Err(ConsensusError::NotParticipating);
            }
            // Permissive round handling: the value lands in whichever round
            // is currently open, even when the sender tagged it differently.
            if round != state.round {
                debug!(
                    participant = self.config.id,
                    from,
                    claimed_round = round,
                    open_round = state.round,
                    "accepting off-round value"
                );
            }
        }
        self.inbox.push(value);
        Ok(())
    }

    async fn start(&self) -> ConsensusResult<()> {
        {
            let mut state = self.state.write();
            if self.config.faulty {
                return Err(ConsensusError::CannotStart("participant is faulty"));
            }
            if state.stopped {
                return Err(ConsensusError::CannotStart("participant is stopped"));
            }
            match state.lifecycle {
                Lifecycle::Decided => {
                    return Err(ConsensusError::CannotStart("consensus already decided"))
                }
                Lifecycle::Running => {
                    return Err(ConsensusError::CannotStart("round loop already running"))
                }
                Lifecycle::Idle => state.lifecycle = Lifecycle::Running,
            }
        }
        info!(participant = self.config.id, "starting consensus");
        let service = self.clone();
        tokio::spawn(service.run_rounds());
        Ok(())
    }

    async fn stop(&self) {
        let mut state = self.state.write();
        if !state.stopped {
            state.stopped = true;
            info!(participant = self.config.id, "stopped participating");
        }
    }

    async fn snapshot(&self) -> StateSnapshot {
        let state = self.state.read();
        StateSnapshot {
            killed: state.stopped,
            x: state.proposal,
            decided: state.lifecycle.decided_flag(),
            k: state.round,
        }
    }
}
