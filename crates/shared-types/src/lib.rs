//! # Shared Types Crate
//!
//! Wire-level vocabulary shared by every crate in the workspace: the binary
//! consensus [`Value`], participant identifiers, and the round-tagged
//! [`ProposalMessage`] exchanged between participants.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate or process
//!   boundary is defined here.
//! - **Wire Compatibility**: serde representations match the protocol exactly
//!   (`"0"`, `"1"`, `"?"` value symbols; camelCase message fields).

pub mod message;
pub mod value;

pub use message::ProposalMessage;
pub use value::Value;

/// Unique identifier for a consensus participant.
///
/// Participants are numbered `0..N`; a participant's listening port is
/// `base_port + id`.
pub type ParticipantId = u32;
