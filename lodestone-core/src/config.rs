//! Service configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Error};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/lodestone_config.json5");

/// Configuration for the back service.
#[derive(Debug, Clone, Deserialize)]
pub struct BackConfig {
    /// Distance in blocks a player must cover within a single tick for the
    /// movement to count as a teleport.
    pub teleport_threshold: f64,
    /// Largest cube radius inspected when searching for a standable
    /// position. The sole bound on search latency.
    pub max_search_radius: i32,
}

impl BackConfig {
    /// Loads the config from `path`, writing the default file first if none
    /// exists yet.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let config_str = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            let config: Self = serde_json5::from_str(&config_str)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?;
            config.validate().map_err(Error::msg)?;
            config
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {}", path.display()))?;
            Self::default()
        };

        Ok(config)
    }

    /// Checks the config for values the service cannot run with.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.teleport_threshold.is_finite() || self.teleport_threshold <= 0.0 {
            return Err("Teleport threshold must be a positive number of blocks");
        }
        if !(1..=4096).contains(&self.max_search_radius) {
            return Err("Max search radius must be in range 1..4096");
        }
        Ok(())
    }
}

impl Default for BackConfig {
    fn default() -> Self {
        Self {
            teleport_threshold: 10.0,
            max_search_radius: 512,
        }
    }
}
