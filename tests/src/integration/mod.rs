//! Cross-crate integration flows.

mod consensus_flow;
mod http_surface;
