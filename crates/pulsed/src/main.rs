//! pulsed — the Pulse demo service daemon.
//!
//! Single binary that assembles the demo service:
//! - Probe history store (redb)
//! - Health recorder
//! - REST API (axum)
//!
//! # Usage
//!
//! ```text
//! pulsed --port 8000 --data-dir /var/lib/pulse
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use pulse_health::{HealthRecorder, RecorderConfig};
use pulse_history::HistoryStore;

#[derive(Parser)]
#[command(name = "pulsed", about = "Pulse demo service daemon")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Data directory for the probe history store.
    #[arg(long, default_value = "/var/lib/pulse")]
    data_dir: PathBuf,

    /// Probe history retention window, in hours.
    #[arg(long, default_value = "24")]
    retention_hours: u64,

    /// Probe latency above this many milliseconds is reported as degraded.
    #[arg(long, default_value = "250")]
    latency_threshold_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pulsed=debug,pulse_history=debug,pulse_health=debug,pulse_api=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    info!("Pulse daemon starting");

    // The data volume may be ephemeral; losing history on restart is fine.
    std::fs::create_dir_all(&cli.data_dir)?;
    let db_path = cli.data_dir.join("pulse.redb");

    let store = HistoryStore::open(&db_path)?;
    info!(path = ?db_path, "probe history store opened");

    let config = RecorderConfig {
        retention_window: Duration::from_secs(cli.retention_hours * 60 * 60),
        latency_threshold: Duration::from_millis(cli.latency_threshold_ms),
    };
    let recorder = Arc::new(HealthRecorder::new(store, config));
    info!(
        retention_hours = cli.retention_hours,
        latency_threshold_ms = cli.latency_threshold_ms,
        "health recorder initialized"
    );

    let router = pulse_api::build_router(recorder);
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));

    info!(%addr, "API server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("Pulse daemon stopped");
    Ok(())
}
