//! # Configuration System
//!
//! Layered configuration for the activities service. Sources, in precedence
//! order: built-in defaults, `config/activities-config.yaml`, an optional
//! environment-specific override file, and `ACTIVITIES__`-prefixed
//! environment variables (`ACTIVITIES__SERVER__BIND_ADDRESS`, ...).
//!
//! The environment is detected from `ACTIVITIES_ENV` or `APP_ENV` and
//! defaults to `development`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Root configuration for the activities service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ActivitiesConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Roster behavior settings
    #[serde(default)]
    pub roster: RosterConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Directory holding the static UI served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Roster behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    /// Whether `max_participants` is a hard registration ceiling. When false
    /// the figure is display-only and registration never fails with
    /// `ActivityFull`.
    #[serde(default = "default_enforce_capacity")]
    pub enforce_capacity: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_enforce_capacity() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            request_timeout_ms: default_request_timeout_ms(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            enforce_capacity: default_enforce_capacity(),
        }
    }
}

impl ActivitiesConfig {
    /// Load configuration with environment auto-detection from the default
    /// `config/` directory.
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::load_from_directory(&default_config_directory(), &detect_environment())
    }

    /// Load configuration from a specific directory with an explicit
    /// environment. Useful for tests that must not touch global state.
    pub fn load_from_directory(
        config_dir: &Path,
        environment: &str,
    ) -> Result<Self, ConfigurationError> {
        debug!(
            environment,
            config_dir = %config_dir.display(),
            "Loading configuration"
        );

        let settings = Config::builder()
            .add_source(File::from(config_dir.join("activities-config.yaml")).required(false))
            .add_source(
                File::from(config_dir.join(format!("activities-config.{environment}.yaml")))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("ACTIVITIES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ActivitiesConfig = settings.try_deserialize()?;

        debug!(
            bind_address = %config.server.bind_address,
            enforce_capacity = config.roster.enforce_capacity,
            "Configuration loaded successfully"
        );

        Ok(config)
    }
}

/// Current environment from `ACTIVITIES_ENV` or `APP_ENV`.
pub fn detect_environment() -> String {
    std::env::var("ACTIVITIES_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

fn default_config_directory() -> PathBuf {
    PathBuf::from("config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_apply_without_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActivitiesConfig::load_from_directory(dir.path(), "test").unwrap();

        assert_eq!(config.server.bind_address, "0.0.0.0:8000");
        assert_eq!(config.server.request_timeout_ms, 30_000);
        assert_eq!(config.server.static_dir, "static");
        assert!(config.roster.enforce_capacity);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("activities-config.yaml"),
            "server:\n  bind_address: \"127.0.0.1:9000\"\nroster:\n  enforce_capacity: false\n",
        )
        .unwrap();

        let config = ActivitiesConfig::load_from_directory(dir.path(), "test").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert!(!config.roster.enforce_capacity);
        // Untouched fields keep their defaults.
        assert_eq!(config.server.request_timeout_ms, 30_000);
    }

    #[test]
    fn environment_file_overrides_base_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("activities-config.yaml"),
            "server:\n  bind_address: \"127.0.0.1:9000\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("activities-config.test.yaml"),
            "server:\n  bind_address: \"127.0.0.1:9001\"\n",
        )
        .unwrap();

        let config = ActivitiesConfig::load_from_directory(dir.path(), "test").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9001");
    }
}
