//! # bv-consensus
//!
//! The consensus state machine for one binary-value participant: round
//! progression, proposal broadcast, received-value aggregation, and the
//! strict-majority decision rule.
//!
//! ## Architecture
//!
//! Each participant owns its round state, inbox, and timer; participants
//! share nothing and interact only through the [`ports::Transport`] port.
//! Within one participant the round loop is sequential (broadcast, wait,
//! decide), while inbound deliveries append to the inbox concurrently with
//! the wait and are drained exactly once at window expiry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bv_consensus::{ParticipantConfig, ParticipantService};
//! use bv_consensus::adapters::InMemoryTransport;
//! use bv_consensus::ports::ParticipantApi;
//! use shared_types::Value;
//! use std::sync::Arc;
//!
//! let transport = Arc::new(InMemoryTransport::new());
//! let participant = Arc::new(ParticipantService::new(
//!     ParticipantConfig::new(0, 4, Value::One),
//!     Arc::clone(&transport),
//! )?);
//! participant.start().await?;
//! ```
//!
//! ## Limitation
//!
//! The tie-break step uses independent local randomness instead of a common
//! coin, so cross-participant convergence is not guaranteed under split
//! inputs. Unanimous inputs converge every round.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::InMemoryTransport;
pub use domain::{
    next_proposal, ConsensusError, ConsensusResult, HealthStatus, Lifecycle, ParticipantConfig,
    RoundInbox, StateSnapshot, ValueTally, DEFAULT_COLLECTION_WINDOW, DEFAULT_ROUND_BUDGET,
};
pub use ports::{ParticipantApi, Transport};
pub use service::ParticipantService;
