//! Palette classification by voting over 3-color subsets.

use serde::Serialize;

use super::pattern::{ColorSet, HarmonyPattern};
use super::score::{total_score, HarmonyScores};
use crate::color::Srgb;
use crate::HarmonyError;

/// Colors per voting subset.
pub const SUBSET_SIZE: usize = 3;

/// Lexicographic `k`-combinations of the indices `0..n`.
///
/// Yields `[0, 1, 2]`, `[0, 1, 3]`, `[0, 2, 3]`, `[1, 2, 3]` for `n = 4,
/// k = 3`. Each combination is sorted, so picking items by these indices
/// preserves their original order. Yields nothing when `k > n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost position that has not reached its final value
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Most frequent pattern among `winners`.
///
/// Ties go to the pattern that first appeared in `winners`, not to the
/// earlier pattern in [`HarmonyPattern::ALL`]. Returns `None` for no votes.
///
/// ```
/// use color_harmony::{tally_votes, HarmonyPattern::*};
///
/// assert_eq!(tally_votes([Triad, Analogous, Analogous]), Some(Analogous));
/// assert_eq!(tally_votes([Tetrad, Analogous, Analogous, Tetrad]), Some(Tetrad));
/// ```
pub fn tally_votes(winners: impl IntoIterator<Item = HarmonyPattern>) -> Option<HarmonyPattern> {
    // (pattern, count) in first-seen order
    let mut counts: Vec<(HarmonyPattern, usize)> = Vec::new();
    for pattern in winners {
        match counts.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, count)) => *count += 1,
            None => counts.push((pattern, 1)),
        }
    }

    let mut best: Option<(HarmonyPattern, usize)> = None;
    for (pattern, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((pattern, count));
        }
    }
    best.map(|(pattern, _)| pattern)
}

/// Scores for one 3-color subset of a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsetScore {
    /// The subset's colors as given in the input, in palette order
    pub subset: Vec<String>,
    /// Winning pattern for this subset
    pub best_match: HarmonyPattern,
    /// All seven scores
    pub scores: HarmonyScores,
}

/// Outcome of [`classify_palette`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteClassification {
    /// Pattern that won the most subsets
    pub final_pattern: HarmonyPattern,
    /// One entry per subset, in combination order
    pub combination_scores: Vec<SubsetScore>,
}

/// Classify a palette of hex colors.
///
/// Every 3-color subset (4 of them for the usual 4-color palette) is scored
/// with [`total_score`]; the subset winners then vote, see [`tally_votes`].
///
/// # Errors
///
/// - [`HarmonyError::InvalidFormat`] for the first malformed hex string
/// - [`HarmonyError::InsufficientColors`] for fewer than 3 colors
///
/// # Example
///
/// ```
/// use color_harmony::{classify_palette, HarmonyPattern};
///
/// let result = classify_palette(&["#ff0000", "#ff0400", "#ff0800", "#ff5500"]).unwrap();
/// assert_eq!(result.final_pattern, HarmonyPattern::Analogous);
/// assert_eq!(result.combination_scores.len(), 4);
/// ```
pub fn classify_palette<S: AsRef<str>>(
    hex_colors: &[S],
) -> Result<PaletteClassification, HarmonyError> {
    let colors = hex_colors
        .iter()
        .map(|s| Srgb::from_hex(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if colors.len() < ColorSet::MIN_COLORS {
        return Err(HarmonyError::InsufficientColors {
            required: ColorSet::MIN_COLORS,
            actual: colors.len(),
        });
    }

    let mut combination_scores = Vec::new();
    for indices in Combinations::new(colors.len(), SUBSET_SIZE) {
        let subset_colors: Vec<Srgb> = indices.iter().map(|&i| colors[i]).collect();
        let (best_match, scores) = total_score(&subset_colors)?;
        combination_scores.push(SubsetScore {
            subset: indices
                .iter()
                .map(|&i| hex_colors[i].as_ref().to_string())
                .collect(),
            best_match,
            scores,
        });
    }

    let final_pattern = tally_votes(combination_scores.iter().map(|s| s.best_match)).ok_or(
        HarmonyError::InsufficientColors {
            required: ColorSet::MIN_COLORS,
            actual: colors.len(),
        },
    )?;

    Ok(PaletteClassification {
        final_pattern,
        combination_scores,
    })
}
