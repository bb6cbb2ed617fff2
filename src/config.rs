//! Service configuration.
//!
//! Resolution order, later wins: built-in defaults, an optional TOML file,
//! environment variables, then command-line flags (applied by the binary).
//!
//! ```toml
//! bind_addr = "127.0.0.1:3001"
//! data_path = "/var/lib/catalog/items.json"
//! log_filter = "item_catalog=debug"
//! cors_origin = "https://shop.example.com"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Failure loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// Location of the item document.
    pub data_path: PathBuf,
    /// Default tracing filter when `CATALOG_LOG` is unset.
    pub log_filter: String,
    /// Browser origin allowed to call the API cross-origin.
    pub cors_origin: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3001".to_string(),
            data_path: PathBuf::from("data/items.json"),
            log_filter: "item_catalog=info".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load defaults, then `path` if given, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// `CATALOG_BIND_ADDR` takes precedence over `PORT`, which binds all
    /// interfaces on that port. Unparseable ports are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
            self.bind_addr = format!("0.0.0.0:{port}");
        }
        if let Some(addr) = lookup("CATALOG_BIND_ADDR").filter(|v| !v.is_empty()) {
            self.bind_addr = addr;
        }
        if let Some(path) = lookup("CATALOG_DATA_PATH").filter(|v| !v.is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(filter) = lookup("CATALOG_LOG_FILTER").filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
        if let Some(origin) = lookup("CATALOG_CORS_ORIGIN").filter(|v| !v.is_empty()) {
            self.cors_origin = origin;
        }
    }
}
