use crate::utils::write_private;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "LAVAJATO_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Listing defaults
    #[serde(default)]
    pub listing: ListingConfig,
    /// How the user's location is resolved for nearby searches
    #[serde(default)]
    pub location: LocationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend (default: http://localhost:8080)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. When absent the HTTP client's defaults apply.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when a command doesn't pass one (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Fixed "<lat>,<lng>" used as the device location
    #[serde(default)]
    pub coordinates: Option<String>,
    /// IP geolocation endpoint; when set it takes precedence over `coordinates`
    #[serde(default)]
    pub ip_lookup_url: Option<String>,
    /// Upper bound for a location lookup before the fallback is used
    #[serde(default = "default_location_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_location_timeout() -> u64 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            coordinates: None,
            ip_lookup_url: None,
            timeout_secs: default_location_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from file or create it with defaults.
    ///
    /// `LAVAJATO_API_URL` overrides the base URL after loading; the override
    /// is not written back to disk.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            // Older files may carry an empty value rather than no value
            if config.api.base_url.trim().is_empty() {
                config.api.base_url = default_base_url();
            }
            if config.listing.page_size == 0 {
                config.listing.page_size = default_page_size();
            }
            config
        } else {
            let config = Self::default();
            config.save(config_path)?;
            config
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!("Using API base URL from {}: {}", API_URL_ENV, url);
                config.api.base_url = url;
            }
        }

        Ok(config)
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        write_private(config_path, &content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))
    }
}
