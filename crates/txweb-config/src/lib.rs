//! Configuration management for txweb
//!
//! Loads the YAML configuration file. Every field has a default, so an
//! empty file (or no file at all) yields a working server on port 8080.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Load the three sample transactions at startup
    #[serde(default = "default_true")]
    pub seed: bool,
    /// How new ids are derived
    #[serde(default)]
    pub id_allocation: IdAllocation,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            id_allocation: IdAllocation::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Id allocation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdAllocation {
    /// Last record's id + 1
    Last,
    /// Highest id in the store + 1
    Max,
}

impl Default for IdAllocation {
    fn default() -> Self {
        IdAllocation::Last
    }
}

impl std::str::FromStr for IdAllocation {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last" => Ok(IdAllocation::Last),
            "max" => Ok(IdAllocation::Max),
            _ => Err(format!("Invalid id allocation: {}", s)),
        }
    }
}

impl std::fmt::Display for IdAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdAllocation::Last => write!(f, "last"),
            IdAllocation::Max => write!(f, "max"),
        }
    }
}

/// Application metadata shown in page chrome and `/api/info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub contact: Option<ContactConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            version: default_version(),
            contact: None,
        }
    }
}

fn default_title() -> String {
    "Transaction Manager".to_string()
}

fn default_description() -> String {
    "A web application for managing financial transactions.".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Maintainer contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Record store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Application metadata
    #[serde(default)]
    pub app: AppConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError { message: e.to_string() },
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                reason: "Host must not be empty".to_string(),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !["trace", "debug", "info", "warn", "error", "off"].contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: "Level must be one of trace, debug, info, warn, error, off".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
