//! Ports for the consensus participant.
//!
//! - inbound: the control surface a host process drives the participant with
//! - outbound: the transport the participant broadcasts through

mod inbound;
mod outbound;

pub use inbound::ParticipantApi;
pub use outbound::Transport;
