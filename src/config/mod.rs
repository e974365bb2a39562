//! Configuration loading and management

use crate::core::error::{ConfigError, TaskboardResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "127.0.0.1:3001")
    pub bind: String,

    /// Attach a permissive CORS layer so a browser client on another origin can call the API
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3001".to_string(),
            cors_permissive: true,
        }
    }
}

/// Property listing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Records per page
    pub page_size: usize,

    /// Upper bound accepted for `page_size`
    pub max_page_size: usize,

    /// Artificial delay before each listing evaluation, in milliseconds
    pub simulated_latency_ms: u64,

    /// Client sessions tracked for last-write-wins sequencing
    pub max_sessions: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            max_page_size: 100,
            simulated_latency_ms: 0,
            max_sessions: 1024,
        }
    }
}

impl ListingConfig {
    /// Page size as a non-zero value; falls back to 1 for an unvalidated zero
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub listing: ListingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> TaskboardResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display }.into());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(display),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> TaskboardResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let listing = &self.listing;

        if listing.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.max_page_size".to_string(),
                value: listing.max_page_size.to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if listing.page_size == 0 || listing.page_size > listing.max_page_size {
            return Err(ConfigError::InvalidValue {
                field: "listing.page_size".to_string(),
                value: listing.page_size.to_string(),
                message: format!("must be between 1 and {}", listing.max_page_size),
            });
        }

        if listing.max_sessions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.max_sessions".to_string(),
                value: listing.max_sessions.to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".to_string(),
                value: self.server.bind.clone(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Default configuration used when no file is supplied
    pub fn default_config() -> Self {
        Self::default()
    }
}
