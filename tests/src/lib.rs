//! # bv-node Test Suite
//!
//! Cross-crate integration flows:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── consensus_flow.rs   # in-process clusters over the in-memory transport
//!     └── http_surface.rs     # end-to-end flows over localhost HTTP
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bv-tests
//! ```

pub mod integration;
