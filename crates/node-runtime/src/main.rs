//! The bv-node binary.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration from environment
//! 3. Launch the cluster and wait for the readiness barrier
//! 4. Optionally trigger consensus on every participant
//! 5. Run until Ctrl-C, then shut down gracefully
//!
//! ## Configuration
//!
//! | variable          | meaning                              | default |
//! |-------------------|--------------------------------------|---------|
//! | `BV_NODES`        | number of participants N             | 4       |
//! | `BV_FAULTY`       | comma-separated faulty ids           | (none)  |
//! | `BV_BASE_PORT`    | port of participant 0                | 3001    |
//! | `BV_WINDOW_MS`    | collection window in milliseconds    | 3000    |
//! | `BV_ROUND_BUDGET` | rounds before finalizing             | 5       |
//! | `BV_INITIAL`      | initial value (`0` or `1`)           | 1       |
//! | `BV_AUTOSTART`    | trigger consensus once ready (`1`)   | off     |

use anyhow::Result;
use node_runtime::{launch, ClusterConfig};
use shared_types::Value;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Load cluster configuration from environment variables.
fn load_config() -> ClusterConfig {
    let mut config = ClusterConfig::default();

    if let Ok(nodes) = std::env::var("BV_NODES") {
        match nodes.parse() {
            Ok(n) if n > 0 => config.size = n,
            _ => warn!("BV_NODES must be a positive integer, keeping default"),
        }
    }
    if let Ok(faulty) = std::env::var("BV_FAULTY") {
        for part in faulty.split(',').filter(|p| !p.is_empty()) {
            match part.trim().parse() {
                Ok(id) => {
                    config.faulty.insert(id);
                }
                Err(_) => warn!(id = part, "ignoring unparseable faulty id"),
            }
        }
    }
    if let Ok(port) = std::env::var("BV_BASE_PORT") {
        if let Ok(p) = port.parse() {
            config.base_port = p;
        }
    }
    if let Ok(window) = std::env::var("BV_WINDOW_MS") {
        if let Ok(ms) = window.parse() {
            config.collection_window = Duration::from_millis(ms);
        }
    }
    if let Ok(budget) = std::env::var("BV_ROUND_BUDGET") {
        if let Ok(b) = budget.parse() {
            config.round_budget = b;
        }
    }
    if let Ok(initial) = std::env::var("BV_INITIAL") {
        match initial.parse::<Value>() {
            Ok(value) if value != Value::Unknown => config.initial_value = value,
            _ => warn!("BV_INITIAL must be 0 or 1, keeping default"),
        }
    }

    config
}

fn autostart_requested() -> bool {
    matches!(
        std::env::var("BV_AUTOSTART").as_deref(),
        Ok("1") | Ok("true")
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();
    info!(
        nodes = config.size,
        faulty = config.faulty.len(),
        base_port = config.base_port,
        round_budget = config.round_budget,
        "launching cluster"
    );

    let cluster = launch(&config).await?;

    if autostart_requested() {
        let started = cluster.start_all().await;
        info!(started, "consensus triggered");
    } else {
        info!("cluster ready; GET /start on each participant to begin");
    }

    info!("Cluster is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    cluster.shutdown().await;
    Ok(())
}
