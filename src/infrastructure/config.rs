use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR};
use crate::domain::OpeningHours;

/// TOML configuration for dinedir
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub hours: HoursConfig,
    #[serde(default)]
    pub randomizer: RandomizerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the built-in restaurants
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HoursConfig {
    #[serde(default = "default_opens")]
    pub opens: u32,
    #[serde(default = "default_closes")]
    pub closes: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct RandomizerConfig {
    /// Fixed seed for reproducible picks; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default value functions
fn default_opens() -> u32 { DEFAULT_OPENING_HOUR }
fn default_closes() -> u32 { DEFAULT_CLOSING_HOUR }

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            opens: default_opens(),
            closes: default_closes(),
        }
    }
}

impl HoursConfig {
    pub fn opening_hours(&self) -> Result<OpeningHours> {
        OpeningHours::new(self.opens, self.closes).context("Invalid [hours] in config")
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// `<config_dir>/dinedir/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dinedir").join("config.toml"))
    }

    /// An explicit path must exist; otherwise the default location is used
    /// when present, falling back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
