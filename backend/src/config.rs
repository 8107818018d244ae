//! Service configuration.
//!
//! Settings come from an optional `meteorguard.toml` and are then overridden
//! by environment variables. The resulting [`ServiceConfig`] is passed
//! explicitly to the catalog client and server; nothing is held globally.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// JPL SBDB query API.
pub const DEFAULT_QUERY_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb_query.api";
/// JPL SBDB lookup API.
pub const DEFAULT_LOOKUP_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api";

/// Configuration loading or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{var} must be {expected}, got '{value}'")]
    InvalidEnv {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Listen address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// External catalog endpoints and per-request timeout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_query_url")]
    pub query_url: String,
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_query_url() -> String {
    DEFAULT_QUERY_URL.to_string()
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            query_url: default_query_url(),
            lookup_url: default_lookup_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the first `meteorguard.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("meteorguard.toml"),
            PathBuf::from("backend/meteorguard.toml"),
            PathBuf::from("../meteorguard.toml"),
        ];

        match search_paths.iter().find(|p| p.exists()) {
            Some(path) => Self::from_file(path).map(Some),
            None => Ok(None),
        }
    }

    /// Override settings from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`: Server host
    /// - `PORT`: Server port
    /// - `SBDB_QUERY_URL`: Catalog query endpoint
    /// - `SBDB_LOOKUP_URL`: Catalog lookup endpoint
    /// - `CATALOG_TIMEOUT_SECS`: Per-request upstream timeout in seconds
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT",
                expected: "a valid port number",
                value: port,
            })?;
        }
        if let Ok(url) = env::var("SBDB_QUERY_URL") {
            self.catalog.query_url = url;
        }
        if let Ok(url) = env::var("SBDB_LOOKUP_URL") {
            self.catalog.lookup_url = url;
        }
        if let Ok(timeout) = env::var("CATALOG_TIMEOUT_SECS") {
            self.catalog.timeout_secs = timeout.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "CATALOG_TIMEOUT_SECS",
                expected: "a whole number of seconds",
                value: timeout,
            })?;
        }
        Ok(())
    }

    /// File (if any), then environment, then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?.unwrap_or_default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".to_string()));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "catalog.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.catalog.query_url.trim().is_empty() || self.catalog.lookup_url.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog URLs must not be empty".to_string()));
        }
        Ok(())
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
