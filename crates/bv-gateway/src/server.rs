//! HTTP control surface for one participant.
//!
//! Five wire endpoints, byte-compatible with the protocol's reference
//! surface:
//!
//! | route       | method | success                          | failure                          |
//! |-------------|--------|----------------------------------|----------------------------------|
//! | `/status`   | GET    | 200 `live`                       | 500 `faulty`                     |
//! | `/message`  | POST   | 200 `Message processed`          | 500 `Node is not participating`  |
//! | `/start`    | GET    | 200 `Consensus process started`  | 400 `Node cannot start`          |
//! | `/stop`     | GET    | 200 `Node stopped participating` | — (idempotent)                   |
//! | `/getState` | GET    | 200 JSON snapshot                | —                                |

use crate::error::GatewayError;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bv_consensus::{HealthStatus, ParticipantApi, StateSnapshot};
use shared_types::ProposalMessage;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::info;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ParticipantApi>,
}

/// Build the participant's router.
pub fn build_router(api: Arc<dyn ParticipantApi>) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/message", post(message))
        .route("/start", get(start))
        .route("/stop", get(stop))
        .route("/getState", get(get_state))
        .with_state(AppState { api })
}

/// Bind and serve the control surface.
///
/// The bound address is reported on `ready` right after a successful bind,
/// before any request is served: this is the readiness barrier an
/// orchestrator waits on before triggering consensus.
pub async fn serve(
    api: Arc<dyn ParticipantApi>,
    addr: SocketAddr,
    ready: oneshot::Sender<SocketAddr>,
) -> Result<(), GatewayError> {
    let router = build_router(api);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "participant listening");
    // The orchestrator may have given up waiting; serve regardless.
    let _ = ready.send(local_addr);
    axum::serve(listener, router).await?;
    Ok(())
}

async fn status(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.api.health().await {
        HealthStatus::Healthy => (StatusCode::OK, "live"),
        HealthStatus::Unhealthy => (StatusCode::INTERNAL_SERVER_ERROR, "faulty"),
    }
}

async fn message(
    State(state): State<AppState>,
    Json(msg): Json<ProposalMessage>,
) -> (StatusCode, &'static str) {
    match state
        .api
        .deliver(msg.from_node_id, msg.round, msg.value)
        .await
    {
        Ok(()) => (StatusCode::OK, "Message processed"),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Node is not participating",
        ),
    }
}

async fn start(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.api.start().await {
        Ok(()) => (StatusCode::OK, "Consensus process started"),
        Err(_) => (StatusCode::BAD_REQUEST, "Node cannot start"),
    }
}

async fn stop(State(state): State<AppState>) -> (StatusCode, &'static str) {
    state.api.stop().await;
    (StatusCode::OK, "Node stopped participating")
}

async fn get_state(State(state): State<AppState>) -> Json<StateSnapshot> {
    Json(state.api.snapshot().await)
}
