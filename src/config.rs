use std::io::ErrorKind;
use std::path::Path;

use aeolus_sim::SimConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Aeolus configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AeolusConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Simulator settings.
    #[serde(default)]
    pub sim: SimToml,
}

/// Simulator settings from the `[sim]` TOML table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimToml {
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
    #[serde(default = "default_jitter_min")]
    pub jitter_min: f64,
    #[serde(default = "default_jitter_max")]
    pub jitter_max: f64,
}

impl Default for SimToml {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            recent_window: default_recent_window(),
            jitter_min: default_jitter_min(),
            jitter_max: default_jitter_max(),
        }
    }
}

fn default_history_capacity() -> usize {
    30
}
fn default_recent_window() -> usize {
    7
}
fn default_jitter_min() -> f64 {
    0.01
}
fn default_jitter_max() -> f64 {
    0.05
}

impl SimToml {
    /// Maps the TOML table onto the core crate's builder config.
    pub fn to_sim_config(&self) -> SimConfig {
        SimConfig::new()
            .with_history_capacity(self.history_capacity)
            .with_recent_window(self.recent_window)
            .with_jitter_range(self.jitter_min, self.jitter_max)
    }
}

/// Loads configuration from `path`, falling back to defaults if the file
/// does not exist.
pub fn load_or_default(path: &Path) -> Result<AeolusConfig> {
    let toml_str = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(AeolusConfig::default());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read config file: {}", path.display()));
        }
    };
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
