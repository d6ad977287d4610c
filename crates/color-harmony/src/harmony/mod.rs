//! Harmony pattern detection
//!
//! Seven patterns are scored for a set of colors, from hue relationships
//! in HSL and one perceptual check in OKLCH:
//!
//! | Pattern               | Rule                                           | Score  |
//! |-----------------------|------------------------------------------------|--------|
//! | `monochromatic`       | hue spread ≤ 5°                                | 5      |
//! | `analogous`           | spread ≤ 30° / ≤ 60°                           | 5 / 3  |
//! | `complementary`       | some pair 175°..185° apart                     | 5      |
//! | `split_complementary` | some pair 150°..=180° apart                    | 5      |
//! | `triad`               | some pair 115°..=125° apart                    | 5      |
//! | `tetrad`              | some pair 85°..=95° apart                      | 5      |
//! | `oklch_balance`       | mean pairwise OKLCH distance < 0.2             | 5      |
//!
//! Hue distances are circular ([`hue_distance`]). A palette is classified by
//! letting each of its 3-color subsets vote for its best pattern
//! ([`classify_palette`]).

mod classify;
mod hue;
mod pattern;
mod score;

pub use classify::{
    classify_palette, tally_votes, Combinations, PaletteClassification, SubsetScore, SUBSET_SIZE,
};
pub use hue::hue_distance;
pub use pattern::{ColorSet, HarmonyPattern, NO_MATCH, STRONG_MATCH, WEAK_MATCH};
pub use score::{total_score, HarmonyScores};
