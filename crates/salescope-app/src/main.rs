//! Salescope application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Parse CLI arguments and load TOML configuration
//! 2. Open the SQLite store best-effort (absence is degraded mode, not fatal)
//! 3. Optionally seed demo data
//! 4. Start the axum REST API server

mod cli;

use std::sync::Arc;

use clap::Parser;

use salescope_api::{routes, AppState};
use salescope_core::config::SalescopeConfig;
use salescope_storage::{seed, Database};

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first, so the log level can come from it.
    let config_path = args.resolve_config_path();
    let mut config = SalescopeConfig::load_or_default(&config_path);
    config.general.port = args.resolve_port(config.general.port);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.general.log_level.clone())),
        )
        .init();

    tracing::info!("Starting salescope v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_path.display(), "Configuration loaded");

    // Best-effort store: a failed open logs a warning and the server runs
    // degraded with fallback content.
    let db_path = args.resolve_db_path(&config.general.db_path);
    let database = match Database::new(&db_path) {
        Ok(db) => {
            tracing::info!(path = %db_path.display(), "SQLite database opened");
            Some(Arc::new(db))
        }
        Err(e) => {
            tracing::warn!(path = %db_path.display(), error = %e, "Database unavailable; running degraded");
            None
        }
    };

    if args.seed {
        match &database {
            Some(db) => {
                seed::seed_demo_data(db)?;
            }
            None => tracing::warn!("--seed requested but the database is unavailable"),
        }
    }

    let state = AppState::new(config, database);
    routes::start_server(state).await?;

    Ok(())
}
