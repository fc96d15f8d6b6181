//! Configuration loading and management
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 5000
//!   public_url: https://api.example.com/
//! api:
//!   hypermedia_marker: hateoas
//! logging:
//!   filter: info,tower_http=debug
//! seed: true
//! ```

use crate::core::error::ConfigError;
use crate::core::media::DEFAULT_HYPERMEDIA_MARKER;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "COMPANY_EMPLOYEES_CONFIG";

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Base URL used in hypermedia links; derived from the `Host` header when unset
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            public_url: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// API behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Media subtype suffix that turns on hypermedia links
    pub hypermedia_marker: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            hypermedia_marker: DEFAULT_HYPERMEDIA_MARKER.to_string(),
        }
    }
}

/// Logging settings; `RUST_LOG` takes precedence over `filter`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,

    /// Load the demo companies and employees at startup
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            seed: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &display)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, "<inline>")
    }

    /// Load from the file named by [`CONFIG_PATH_ENV`], or fall back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Parsed `server.public_url`, if configured
    pub fn public_url(&self) -> Result<Option<Url>, ConfigError> {
        self.server
            .public_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
                    field: "server.public_url".to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    fn parse(yaml: &str, file: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: file.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.hypermedia_marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.hypermedia_marker".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.public_url()?;
        Ok(())
    }
}
