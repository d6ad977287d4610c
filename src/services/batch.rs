use color_harmony::classify_palette;
use std::path::Path;

use crate::error::BatchError;
use crate::models::{AppConfig, PaletteFailure, PaletteInput, PaletteRecord};
use crate::services::palette_store;

/// Outcome of classifying a list of palettes
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One record per classified palette, in input order
    pub records: Vec<PaletteRecord>,
    /// Palettes that were skipped, in input order
    pub failures: Vec<PaletteFailure>,
}

impl BatchReport {
    /// Number of palettes seen, classified or not
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Classifies palettes on the blocking thread pool
#[derive(Debug, Clone)]
pub struct BatchClassifier {
    workers: usize,
}

impl BatchClassifier {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.effective_workers())
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Classify every palette, keeping input order.
    ///
    /// The list is cut into at most `workers` contiguous chunks, each run with
    /// `spawn_blocking`. A palette that fails to classify is logged and listed
    /// in [`BatchReport::failures`]; the rest of the batch carries on.
    pub async fn classify_all(
        &self,
        palettes: Vec<PaletteInput>,
    ) -> Result<BatchReport, BatchError> {
        let mut report = BatchReport::default();
        if palettes.is_empty() {
            return Ok(report);
        }

        let chunk_size = palettes.len().div_ceil(self.workers);
        let mut handles = Vec::new();
        let mut remaining = palettes.into_iter();
        let mut offset = 0;
        loop {
            let chunk: Vec<PaletteInput> = remaining.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }
            let start = offset;
            offset += chunk.len();
            handles.push(tokio::task::spawn_blocking(move || {
                classify_chunk(start, chunk)
            }));
        }

        tracing::debug!(
            palettes = offset,
            chunks = handles.len(),
            "Dispatched classification chunks"
        );

        // Awaiting in spawn order keeps the output in input order
        for handle in handles {
            let outcomes = handle
                .await
                .map_err(|e| BatchError::Task(format!("Classification task failed: {e}")))?;

            for outcome in outcomes {
                match outcome {
                    Ok(record) => report.records.push(record),
                    Err(failure) => {
                        tracing::warn!(
                            index = failure.index,
                            url = failure.url.as_deref().unwrap_or("-"),
                            error = %failure.error,
                            "Skipping palette"
                        );
                        report.failures.push(failure);
                    }
                }
            }
        }

        tracing::info!(
            classified = report.records.len(),
            skipped = report.failures.len(),
            "Batch classification finished"
        );
        Ok(report)
    }

    /// Load palettes from `input`, classify them and write the records to `output`
    pub async fn classify_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<BatchReport, BatchError> {
        let palettes = palette_store::load_palettes(input).await?;
        let report = self.classify_all(palettes).await?;
        palette_store::save_records(output, &report.records).await?;
        Ok(report)
    }
}

fn classify_chunk(
    start: usize,
    chunk: Vec<PaletteInput>,
) -> Vec<Result<PaletteRecord, PaletteFailure>> {
    chunk
        .into_iter()
        .enumerate()
        .map(|(i, input)| classify_one(start + i, input))
        .collect()
}

/// Classify a single palette; `index` is its position in the input list
pub fn classify_one(index: usize, input: PaletteInput) -> Result<PaletteRecord, PaletteFailure> {
    match classify_palette(input.colors()) {
        Ok(classification) => {
            let (_, hex_palette) = input.into_parts();
            Ok(PaletteRecord {
                hex_palette,
                classification,
            })
        }
        Err(error) => Err(PaletteFailure {
            index,
            url: input.url().map(str::to_string),
            error,
        }),
    }
}
