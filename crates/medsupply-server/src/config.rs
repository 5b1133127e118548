//! Configuration loading for the dashboard server.
//!
//! The optional `medsupply-config.yaml` at the working directory root (or
//! the file named by `MEDSUPPLY_CONFIG`) mirrors [`AppConfig`]. Every
//! section and field has a default, so a missing file or a partial one is
//! valid. `MEDSUPPLY_HOST` and `MEDSUPPLY_PORT` override the `server`
//! section after parsing.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use medsupply_data::SeedConfig;
use medsupply_store::PagingConfig;

/// Default config file name.
pub const DEFAULT_CONFIG_PATH: &str = "medsupply-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerSection,

    /// Seed data sizes and reference date.
    #[serde(default)]
    pub seed: SeedConfig,

    /// List endpoint page sizes.
    #[serde(default)]
    pub paging: PagingConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `server` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    /// Apply `MEDSUPPLY_HOST` and `MEDSUPPLY_PORT` when set.
    ///
    /// An unparseable port is logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MEDSUPPLY_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("MEDSUPPLY_PORT") {
            match val.parse() {
                Ok(port) => self.port = port,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid MEDSUPPLY_PORT"),
            }
        }
    }
}

/// The `logging` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse from a YAML string and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Load from `MEDSUPPLY_CONFIG` or [`DEFAULT_CONFIG_PATH`].
    ///
    /// A missing file yields the defaults (still with environment
    /// overrides applied); an unreadable or malformed one is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("MEDSUPPLY_CONFIG")
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        if path.exists() {
            Self::from_file(&path)
        } else {
            let mut config = Self::default();
            config.server.apply_env_overrides();
            Ok(config)
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config: AppConfig = serde_yml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.paging.default_per_page, 20);
        assert_eq!(config.seed.customers, 120);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "
server:
  port: 9090
seed:
  customers: 10
  reference_date: 2025-06-30
paging:
  max_per_page: 50
logging:
  json: true
";
        let config: AppConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.seed.customers, 10);
        assert_eq!(config.seed.suppliers, 40);
        assert_eq!(config.seed.reference_date.to_string(), "2025-06-30");
        assert_eq!(config.paging.default_per_page, 20);
        assert_eq!(config.paging.max_per_page, 50);
        assert!(config.logging.json);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result: Result<AppConfig, _> = serde_yml::from_str("server: [1, 2");
        assert!(result.is_err());
        assert!(matches!(
            AppConfig::from_file(Path::new("/nonexistent/medsupply.yaml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn project_config_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(DEFAULT_CONFIG_PATH);
        let contents = std::fs::read_to_string(path).unwrap();
        let config: AppConfig = serde_yml::from_str(&contents).unwrap();
        assert_eq!(config.seed, SeedConfig::default());
        assert_eq!(config.paging, PagingConfig::default());
    }
}
