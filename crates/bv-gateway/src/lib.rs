//! # bv-gateway
//!
//! HTTP boundary for a consensus participant: the inbound control surface
//! (axum) that lets an orchestrator and peers drive the participant, and the
//! outbound [`HttpTransport`] the round controller broadcasts through.
//!
//! The core never sees HTTP: it exposes `ParticipantApi` and consumes
//! `Transport`, and this crate adapts both to the wire.

pub mod error;
pub mod server;
pub mod transport;

// Re-export main types
pub use error::GatewayError;
pub use server::{build_router, serve, AppState};
pub use transport::{participant_addr, HttpTransport, BASE_NODE_PORT, DEFAULT_SEND_TIMEOUT};
