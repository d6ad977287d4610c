//! color-harmony: color-space conversion and palette harmony scoring
//!
//! Two layers:
//!
//! - [`color`]: exact conversions between hex strings, sRGB, HSL, OKLab and
//!   OKLCH.
//! - [`harmony`]: scores a set of colors against seven harmony patterns and
//!   classifies 4-color palettes by voting over their 3-color subsets.
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{classify_palette, HarmonyPattern};
//!
//! let result = classify_palette(&["#ff0000", "#00ff00", "#0000ff", "#ff0001"]).unwrap();
//! assert_eq!(result.final_pattern, HarmonyPattern::Triad);
//!
//! for subset in &result.combination_scores {
//!     println!("{:?} -> {}", subset.subset, subset.best_match);
//! }
//! ```
//!
//! # Conversions
//!
//! ```
//! use color_harmony::{Hsl, Oklch, Srgb};
//!
//! let red = Srgb::from_hex("#ff0000").unwrap();
//! let hsl: Hsl = red.to_hsl();
//! assert_eq!(hsl.h, 0.0);
//!
//! let lch: Oklch = red.to_oklch();
//! assert!((lch.h - 29.23).abs() < 0.01);
//! ```
//!
//! The OKLab matrices are applied directly to the 0..=1 sRGB channels, with
//! no gamma linearization. Scores computed elsewhere with a linearizing
//! OKLab will not agree with these.

pub mod color;
mod error;
pub mod harmony;

#[cfg(test)]
mod domain_tests;

pub use color::{Hex, Hsl, Oklab, Oklch, Srgb};
pub use error::HarmonyError;
pub use harmony::{
    classify_palette, hue_distance, tally_votes, total_score, ColorSet, Combinations,
    HarmonyPattern, HarmonyScores, PaletteClassification, SubsetScore,
};
