//! # bv-node Runtime
//!
//! Hosts a local cluster of binary-value consensus participants: one
//! consensus service, control surface, and transport per participant, all
//! in one process. The [`cluster`] module is also what the integration
//! suite drives.

pub mod cluster;

pub use cluster::{launch, Cluster, ClusterConfig};
