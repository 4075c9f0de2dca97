//! Driven port (the transport dependency).

use async_trait::async_trait;
use shared_types::{ParticipantId, ProposalMessage};

/// Point-to-point delivery of a proposal to one peer.
///
/// Best-effort: no ordering, no delivery guarantee, no retry. A per-send
/// timeout policy belongs to the implementation. The round controller logs
/// a failed send and moves on; a dropped message is simply absent from the
/// receiving round's inbox.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, to: ParticipantId, message: ProposalMessage) -> Result<(), String>;
}
