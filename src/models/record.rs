use color_harmony::{HarmonyError, PaletteClassification};
use serde::{Deserialize, Serialize};

/// One palette as found in an input file.
///
/// Bare lists come from hand-curated palette files; snapshot entries come
/// from the screenshot palette extractor and carry the page they were taken
/// from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PaletteInput {
    Bare(Vec<String>),
    Snapshot { url: String, palette: Vec<String> },
}

impl PaletteInput {
    /// The palette's hex colors, in file order
    pub fn colors(&self) -> &[String] {
        match self {
            PaletteInput::Bare(colors) => colors,
            PaletteInput::Snapshot { palette, .. } => palette,
        }
    }

    /// Source URL for snapshot entries
    pub fn url(&self) -> Option<&str> {
        match self {
            PaletteInput::Bare(_) => None,
            PaletteInput::Snapshot { url, .. } => Some(url),
        }
    }

    /// Split into `(url, colors)`
    pub fn into_parts(self) -> (Option<String>, Vec<String>) {
        match self {
            PaletteInput::Bare(colors) => (None, colors),
            PaletteInput::Snapshot { url, palette } => (Some(url), palette),
        }
    }
}

impl From<Vec<String>> for PaletteInput {
    fn from(colors: Vec<String>) -> Self {
        PaletteInput::Bare(colors)
    }
}

/// Classification result for one palette, as written to the results file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteRecord {
    pub hex_palette: Vec<String>,
    #[serde(flatten)]
    pub classification: PaletteClassification,
}

/// A palette that could not be classified
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteFailure {
    /// Position in the input list
    pub index: usize,
    pub url: Option<String>,
    pub error: HarmonyError,
}
