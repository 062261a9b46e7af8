use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SalescopeError};

/// Top-level configuration for the salescope backend.
///
/// Loaded from `salescope.toml` by default. Each section corresponds to a
/// subsystem; every field has a default so a missing or partial file still
/// yields a runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalescopeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for SalescopeConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            chat: ChatConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl SalescopeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SalescopeConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SalescopeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// API server port.
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            db_path: "data/salescope.db".to_string(),
            log_level: "info".to_string(),
            port: 8001,
        }
    }
}

/// Chat endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Responder used when the request names no agent type.
    pub default_agent: String,
    /// Maximum chat message length in characters.
    pub max_message_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_agent: "manager".to_string(),
            max_message_length: 2000,
        }
    }
}

/// Chart renderer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels.
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SalescopeConfig::default();
        assert_eq!(config.general.port, 8001);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.default_agent, "manager");
        assert_eq!(config.chart.width, 1200);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SalescopeConfig::load_or_default(Path::new("/nonexistent/salescope.toml"));
        assert_eq!(config.general.port, 8001);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salescope.toml");

        let mut config = SalescopeConfig::default();
        config.general.port = 9100;
        config.chat.max_message_length = 500;
        config.save(&path).unwrap();

        let loaded = SalescopeConfig::load(&path).unwrap();
        assert_eq!(loaded.general.port, 9100);
        assert_eq!(loaded.chat.max_message_length, 500);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[general]\nport = 9001\n").unwrap();

        let config = SalescopeConfig::load(&path).unwrap();
        assert_eq!(config.general.port, 9001);
        // Untouched sections keep their defaults.
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.default_agent, "manager");
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "general = [[[").unwrap();
        assert!(SalescopeConfig::load(&path).is_err());
    }
}
