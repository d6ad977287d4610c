//! Error type for conversion and scoring.

use thiserror::Error;

/// Errors surfaced by the color kernel.
///
/// Conversions between numeric representations are total; only hex parsing
/// and scoring of undersized palettes can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonyError {
    /// Not exactly 6 hex digits after stripping an optional leading `#`.
    #[error("invalid hex color {input:?} (expected 6 hex digits with optional '#')")]
    InvalidFormat {
        /// The rejected input, verbatim
        input: String,
    },

    /// Fewer colors than pairwise scoring needs.
    #[error("at least {required} colors are required, got {actual}")]
    InsufficientColors {
        /// Minimum number of colors for the operation
        required: usize,
        /// Number of colors supplied
        actual: usize,
    },

    /// Not one of the seven pattern labels.
    #[error("unknown harmony pattern {label:?}")]
    UnknownPattern {
        /// The rejected label, verbatim
        label: String,
    },
}

impl HarmonyError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }
}
