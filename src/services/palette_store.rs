use serde::Serialize;
use std::path::Path;

use crate::error::BatchError;
use crate::models::{PaletteInput, PaletteRecord};

/// Read a JSON array of palettes (bare lists and/or snapshot entries)
pub async fn load_palettes(path: &Path) -> Result<Vec<PaletteInput>, BatchError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        tracing::warn!(
            path = %path.display(),
            error = %source,
            "Failed to read palette file"
        );
        BatchError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let palettes: Vec<PaletteInput> =
        serde_json::from_slice(&bytes).map_err(|source| BatchError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        palettes = palettes.len(),
        "Loaded palettes"
    );
    Ok(palettes)
}

/// Write `value` as pretty-printed JSON, creating parent directories
pub async fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), BatchError> {
    let json = serde_json::to_vec_pretty(value).map_err(|source| BatchError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let write_error = |source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(write_error)?;
    }
    tokio::fs::write(path, json).await.map_err(write_error)?;

    tracing::debug!(path = %path.display(), "Wrote JSON output");
    Ok(())
}

/// Write classification records to the results file
pub async fn save_records(path: &Path, records: &[PaletteRecord]) -> Result<(), BatchError> {
    save_json(path, records).await?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Saved classification results"
    );
    Ok(())
}
