//! In-memory transport for in-process clusters and tests.

use crate::ports::{ParticipantApi, Transport};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{ParticipantId, ProposalMessage};
use std::collections::HashMap;
use std::sync::Arc;

/// Routes sends directly to registered participants, no network involved.
///
/// A rejected delivery (stopped or faulty receiver) surfaces to the sender
/// as a send error, mirroring what the HTTP transport reports for a non-2xx
/// reply.
#[derive(Default)]
pub struct InMemoryTransport {
    peers: RwLock<HashMap<ParticipantId, Arc<dyn ParticipantApi>>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant as reachable under `id`.
    pub fn register(&self, id: ParticipantId, api: Arc<dyn ParticipantApi>) {
        self.peers.write().insert(id, api);
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(&self, to: ParticipantId, message: ProposalMessage) -> Result<(), String> {
        let peer = self
            .peers
            .read()
            .get(&to)
            .cloned()
            .ok_or_else(|| format!("unknown peer {to}"))?;
        peer.deliver(message.from_node_id, message.round, message.value)
            .await
            .map_err(|error| format!("peer {to} rejected delivery: {error}"))
    }
}
