use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Environment variable naming the config file when `--config` is not given
pub const CONFIG_ENV: &str = "HARMONIZE_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Palette list to classify (JSON)
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where classification results are written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Where the OKLCH export is written
    #[serde(default = "default_oklch_output")]
    pub oklch_output: PathBuf,

    /// Maximum number of palette chunks classified in parallel
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Decimal places kept in the OKLCH export
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_input() -> PathBuf {
    PathBuf::from("data/raw/rgbPalette.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("data/results/palette_results.json")
}

fn default_oklch_output() -> PathBuf {
    PathBuf::from("data/processed/oklchPalette.json")
}

fn default_workers() -> usize {
    4
}

fn default_precision() -> u32 {
    3
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, BatchError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// Missing or invalid files are logged and replaced by [`AppConfig::default`];
    /// a bad config never stops a run.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        workers = config.workers,
                        precision = config.precision,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Worker count with the lower bound applied
    pub fn effective_workers(&self) -> usize {
        self.workers.max(1)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            oklch_output: default_oklch_output(),
            workers: default_workers(),
            precision: default_precision(),
        }
    }
}
