//! Observation site configuration file support.
//!
//! A small TOML file names the site and pins its coordinates for the
//! forecast links in notifications. Every field has a default, so an empty
//! file — or no file at all — yields a usable configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
const CONFIG_ENV_VAR: &str = "NIGHTCAST_CONFIG";

/// Observation site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name for the site
    #[serde(default = "default_name")]
    pub name: String,
    /// Latitude in decimal degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_name() -> String {
    "backyard".to_string()
}

fn default_latitude() -> f64 {
    37.77
}

fn default_longitude() -> f64 {
    -122.42
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl SiteConfig {
    /// Load site configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load site configuration from the default location.
    ///
    /// Checks the `NIGHTCAST_CONFIG` environment variable first, then
    /// `nightcast.toml` in the working directory, and finally falls back to
    /// the built-in defaults when neither exists.
    pub fn from_default_location() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(PathBuf::from(path));
        }

        let local = PathBuf::from("nightcast.toml");
        if local.exists() {
            return Self::from_file(&local);
        }

        Ok(Self::default())
    }
}
