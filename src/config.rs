//! Top-level application configuration.
//!
//! Configuration is stored in `.boxoffice/config.yaml` (or under
//! `$BOXOFFICE_ROOT`) and includes:
//! - The base URL of the ticketing service
//! - The concurrency bound for the combined movies-and-showtimes load

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BoxOfficeError, Result};

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "BOXOFFICE_API_URL";

/// Environment variable overriding the configuration root directory.
pub const ROOT_ENV: &str = "BOXOFFICE_ROOT";

/// Keys accepted by `config get` / `config set`.
pub const VALID_KEYS: &[&str] = &["api.base_url", "listing_concurrency"];

/// Returns the configuration root directory.
pub fn boxoffice_root() -> PathBuf {
    if let Ok(root) = env::var(ROOT_ENV) {
        PathBuf::from(root)
    } else {
        PathBuf::from(".boxoffice")
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ticketing service connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Maximum number of showtime requests in flight during a listing load (default: 8)
    #[serde(default = "default_listing_concurrency")]
    pub listing_concurrency: usize,
}

/// Ticketing service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_listing_concurrency() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            listing_concurrency: default_listing_concurrency(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        boxoffice_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            BoxOfficeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BoxOfficeError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            BoxOfficeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions)?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.listing_concurrency == 0 {
            return Err(BoxOfficeError::Config(
                "listing_concurrency must be at least 1".to_string(),
            ));
        }
        url::Url::parse(&self.api.base_url).map_err(|e| {
            BoxOfficeError::Config(format!("invalid api.base_url '{}': {e}", self.api.base_url))
        })?;
        Ok(())
    }

    /// Get the API base URL from the environment or the config file
    pub fn api_base_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.api.base_url.clone()
    }

    /// Read a configuration value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.base_url" => Ok(self.api.base_url.clone()),
            "listing_concurrency" => Ok(self.listing_concurrency.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a configuration value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                url::Url::parse(value).map_err(|e| {
                    BoxOfficeError::Config(format!("invalid api.base_url '{value}': {e}"))
                })?;
                self.api.base_url = value.to_string();
            }
            "listing_concurrency" => {
                let parsed: usize = value.parse().map_err(|_| {
                    BoxOfficeError::Config(format!(
                        "listing_concurrency must be a positive integer, got '{value}'"
                    ))
                })?;
                if parsed == 0 {
                    return Err(BoxOfficeError::Config(
                        "listing_concurrency must be at least 1".to_string(),
                    ));
                }
                self.listing_concurrency = parsed;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> BoxOfficeError {
    BoxOfficeError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}
