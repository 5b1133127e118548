//! Dashboard server binary for the MedSupply distribution dashboard.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `medsupply-config.yaml` (or defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the in-memory repository
//! 4. Build the shared state and serve until `Ctrl-C`

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use medsupply_data::Repository;
use medsupply_server::config::LoggingConfig;
use medsupply_server::{AppConfig, AppState, ServerConfig, start_server};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the dashboard
/// template fails to compile, or the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = AppConfig::load()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        host = config.server.host,
        port = config.server.port,
        reference_date = %config.seed.reference_date,
        "Configuration loaded"
    );

    // 3. Seed the repository.
    let repository = Arc::new(Repository::seeded(&config.seed));
    let report = repository.branch_kpis();
    info!(
        allocation_drift = %report.allocation_drift,
        "Initial branch KPIs computed"
    );

    // 4. Serve.
    let state = Arc::new(AppState::new(repository, config.paging)?);
    start_server(&ServerConfig::from(&config.server), state).await?;

    info!("medsupply-server exiting");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
