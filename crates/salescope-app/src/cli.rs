//! CLI argument definitions for the salescope binary.
//!
//! Uses `clap` with derive macros. Priority resolution: CLI args > env
//! vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Salescope — a sales-operations backend with chat-style analytics.
#[derive(Parser, Debug)]
#[command(name = "salescope", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Path to the SQLite database file.
    #[arg(long = "db-path")]
    pub db_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed demo data into an empty database before serving.
    #[arg(long = "seed")]
    pub seed: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SALESCOPE_CONFIG env var > ./salescope.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref path) = self.config {
            return path.clone();
        }
        if let Ok(path) = std::env::var("SALESCOPE_CONFIG") {
            return PathBuf::from(path);
        }
        PathBuf::from("salescope.toml")
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > SALESCOPE_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(port) = self.port {
            return port;
        }
        if let Ok(val) = std::env::var("SALESCOPE_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                return port;
            }
        }
        config_port
    }

    /// Resolve the database path.
    ///
    /// Priority: --db-path flag > config file value.
    pub fn resolve_db_path(&self, config_db_path: &str) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(config_db_path))
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}
