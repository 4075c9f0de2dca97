//! Outbound HTTP transport.

use crate::error::GatewayError;
use async_trait::async_trait;
use bv_consensus::Transport;
use shared_types::{ParticipantId, ProposalMessage};
use std::net::SocketAddr;
use std::time::Duration;

/// Default base port; participant `id` listens on `base_port + id`.
pub const BASE_NODE_PORT: u16 = 3001;

/// Default per-send timeout. A peer that cannot answer within this budget
/// counts as unreachable for the round; nothing retries.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(1);

/// Loopback address of a participant's control surface.
pub fn participant_addr(base_port: u16, id: ParticipantId) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], base_port + id as u16))
}

/// Sends proposals to peers as `POST /message` over loopback HTTP.
pub struct HttpTransport {
    client: reqwest::Client,
    base_port: u16,
}

impl HttpTransport {
    pub fn new(base_port: u16) -> Result<Self, GatewayError> {
        Self::with_timeout(base_port, DEFAULT_SEND_TIMEOUT)
    }

    pub fn with_timeout(base_port: u16, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_port })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, to: ParticipantId, message: ProposalMessage) -> Result<(), String> {
        let url = format!("http://{}/message", participant_addr(self.base_port, to));
        let response = self
            .client
            .post(&url)
            .json(&message)
            .send()
            .await
            .map_err(|error| error.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            // The peer answered but refused the value (stopped or faulty).
            Err(format!("peer {to} responded {}", response.status()))
        }
    }
}
