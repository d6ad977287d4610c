use std::path::PathBuf;

use color_harmony::HarmonyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Palette error: {0}")]
    Harmony(#[from] HarmonyError),

    #[error("Worker task failed: {0}")]
    Task(String),
}
