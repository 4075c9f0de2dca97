//! Local cluster bootstrap.
//!
//! Launches N participants in one process, each with its own consensus
//! service, HTTP control surface on `base_port + id`, and outbound HTTP
//! transport. `launch` returns only after every participant has reported
//! its listening address: an orchestrator can trigger consensus the moment
//! it gets the cluster back.

use anyhow::{Context, Result};
use bv_consensus::{ParticipantApi, ParticipantConfig, ParticipantService};
use bv_gateway::{participant_addr, HttpTransport};
use shared_types::{ParticipantId, Value};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Configuration for a local cluster.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of participants N.
    pub size: usize,
    /// Ids of participants flagged faulty at creation.
    pub faulty: HashSet<ParticipantId>,
    /// Participant `id` listens on `base_port + id`.
    pub base_port: u16,
    /// Initial proposal for non-faulty participants; faulty ones are seeded
    /// with the `?` placeholder.
    pub initial_value: Value,
    pub collection_window: Duration,
    pub round_budget: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            size: 4,
            faulty: HashSet::new(),
            base_port: bv_gateway::BASE_NODE_PORT,
            initial_value: Value::One,
            collection_window: bv_consensus::DEFAULT_COLLECTION_WINDOW,
            round_budget: bv_consensus::DEFAULT_ROUND_BUDGET,
        }
    }
}

/// A running local cluster.
pub struct Cluster {
    participants: Vec<Arc<ParticipantService<HttpTransport>>>,
    servers: Vec<JoinHandle<()>>,
}

/// Launch every participant and wait for the readiness barrier.
pub async fn launch(config: &ClusterConfig) -> Result<Cluster> {
    let mut participants = Vec::with_capacity(config.size);
    let mut servers = Vec::with_capacity(config.size);
    let mut ready_signals = Vec::with_capacity(config.size);

    for id in 0..config.size as ParticipantId {
        let faulty = config.faulty.contains(&id);
        let mut participant_config = ParticipantConfig::new(
            id,
            config.size,
            if faulty {
                Value::Unknown
            } else {
                config.initial_value
            },
        );
        participant_config.faulty = faulty;
        participant_config.fault_tolerance = config.faulty.len();
        participant_config.collection_window = config.collection_window;
        participant_config.round_budget = config.round_budget;

        let transport = Arc::new(HttpTransport::new(config.base_port)?);
        let participant = Arc::new(ParticipantService::new(participant_config, transport)?);

        let (ready_tx, ready_rx) = oneshot::channel();
        let api: Arc<dyn ParticipantApi> = Arc::clone(&participant) as Arc<dyn ParticipantApi>;
        let addr = participant_addr(config.base_port, id);
        let server = tokio::spawn(async move {
            if let Err(error) = bv_gateway::serve(api, addr, ready_tx).await {
                error!(participant = id, %error, "control surface exited");
            }
        });

        participants.push(participant);
        servers.push(server);
        ready_signals.push((id, ready_rx));
    }

    // Readiness barrier: every participant must be listening before the
    // orchestrator is allowed to trigger consensus.
    for (id, ready_rx) in ready_signals {
        let addr = ready_rx
            .await
            .with_context(|| format!("participant {id} never came up"))?;
        debug!(participant = id, addr = %addr, "participant ready");
    }
    info!(size = config.size, "all participants listening");

    Ok(Cluster {
        participants,
        servers,
    })
}

impl Cluster {
    pub fn participants(&self) -> &[Arc<ParticipantService<HttpTransport>>] {
        &self.participants
    }

    /// Trigger consensus on every participant. Rejections (faulty nodes)
    /// are logged and skipped; returns how many actually started.
    pub async fn start_all(&self) -> usize {
        let mut started = 0;
        for participant in &self.participants {
            match participant.start().await {
                Ok(()) => started += 1,
                Err(error) => warn!(
                    participant = participant.config().id,
                    %error,
                    "participant did not start"
                ),
            }
        }
        started
    }

    /// Stop every participant and tear down the control surfaces.
    pub async fn shutdown(&self) {
        for participant in &self.participants {
            participant.stop().await;
        }
        for server in &self.servers {
            server.abort();
        }
        info!("cluster shut down");
    }
}
