//! The seven harmony patterns and their scoring rules.

use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hue::{hue_distance, pairs};
use crate::color::{Hsl, Oklch, Srgb};
use crate::HarmonyError;

/// Score for a clear match.
pub const STRONG_MATCH: u8 = 5;
/// Score for a loose match (analogous only).
pub const WEAK_MATCH: u8 = 3;
/// Score for no match.
pub const NO_MATCH: u8 = 0;

const MONOCHROMATIC_MAX_SPREAD: f64 = 5.0;
const ANALOGOUS_STRONG_SPREAD: f64 = 30.0;
const ANALOGOUS_WEAK_SPREAD: f64 = 60.0;
// Hue distances top out at 180°, so the upper bound never excludes anything.
const COMPLEMENTARY_GAP: Range<f64> = 175.0..185.0;
const SPLIT_COMPLEMENTARY_GAP: RangeInclusive<f64> = 150.0..=180.0;
const TRIAD_GAP: RangeInclusive<f64> = 115.0..=125.0;
const TETRAD_GAP: RangeInclusive<f64> = 85.0..=95.0;
const OKLCH_BALANCE_MAX_MEAN_DISTANCE: f64 = 0.2;

/// A canonical color-harmony classification.
///
/// Variant order is significant: it is the tie-break order used when several
/// patterns reach the same score (first wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyPattern {
    /// All hues within 5° of each other
    Monochromatic,
    /// All hues within 30° (strong) or 60° (weak)
    Analogous,
    /// Some pair roughly opposite (175°..185°)
    Complementary,
    /// Some pair 150°..=180° apart
    SplitComplementary,
    /// Some pair 115°..=125° apart
    Triad,
    /// Some pair 85°..=95° apart
    Tetrad,
    /// Mean raw OKLCH distance below 0.2
    OklchBalance,
}

impl HarmonyPattern {
    /// All patterns in tie-break order.
    pub const ALL: [HarmonyPattern; 7] = [
        HarmonyPattern::Monochromatic,
        HarmonyPattern::Analogous,
        HarmonyPattern::Complementary,
        HarmonyPattern::SplitComplementary,
        HarmonyPattern::Triad,
        HarmonyPattern::Tetrad,
        HarmonyPattern::OklchBalance,
    ];

    /// Position in [`HarmonyPattern::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The snake_case label used in serialized results.
    pub fn label(self) -> &'static str {
        match self {
            HarmonyPattern::Monochromatic => "monochromatic",
            HarmonyPattern::Analogous => "analogous",
            HarmonyPattern::Complementary => "complementary",
            HarmonyPattern::SplitComplementary => "split_complementary",
            HarmonyPattern::Triad => "triad",
            HarmonyPattern::Tetrad => "tetrad",
            HarmonyPattern::OklchBalance => "oklch_balance",
        }
    }

    /// Score a color set against this pattern.
    pub fn score(self, set: &ColorSet) -> u8 {
        match self {
            HarmonyPattern::Monochromatic => score_monochromatic(&set.hues),
            HarmonyPattern::Analogous => score_analogous(&set.hues),
            HarmonyPattern::Complementary => {
                score_any_pair(&set.hues, |d| COMPLEMENTARY_GAP.contains(&d))
            }
            HarmonyPattern::SplitComplementary => {
                score_any_pair(&set.hues, |d| SPLIT_COMPLEMENTARY_GAP.contains(&d))
            }
            HarmonyPattern::Triad => score_any_pair(&set.hues, |d| TRIAD_GAP.contains(&d)),
            HarmonyPattern::Tetrad => score_any_pair(&set.hues, |d| TETRAD_GAP.contains(&d)),
            HarmonyPattern::OklchBalance => score_oklch_balance(&set.oklch),
        }
    }
}

impl fmt::Display for HarmonyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HarmonyPattern {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyPattern::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| HarmonyError::UnknownPattern {
                label: s.to_string(),
            })
    }
}

/// Validated scoring input: the HSL hues and OKLCH triples of 3+ colors.
///
/// Every scorer compares colors pairwise, so construction is the single place
/// where undersized palettes are rejected.
#[derive(Debug, Clone)]
pub struct ColorSet {
    hues: Vec<f64>,
    oklch: Vec<Oklch>,
}

impl ColorSet {
    /// Smallest palette that can be scored.
    pub const MIN_COLORS: usize = 3;

    /// # Errors
    ///
    /// [`HarmonyError::InsufficientColors`] for fewer than
    /// [`ColorSet::MIN_COLORS`] colors.
    pub fn new(colors: &[Srgb]) -> Result<Self, HarmonyError> {
        if colors.len() < Self::MIN_COLORS {
            return Err(HarmonyError::InsufficientColors {
                required: Self::MIN_COLORS,
                actual: colors.len(),
            });
        }

        Ok(Self {
            // Achromatic colors contribute hue 0.0, same as red.
            hues: colors.iter().map(|&c| Hsl::from(c).h).collect(),
            oklch: colors.iter().map(|&c| c.to_oklch()).collect(),
        })
    }

    #[inline]
    pub fn hues(&self) -> &[f64] {
        &self.hues
    }

    #[inline]
    pub fn oklch(&self) -> &[Oklch] {
        &self.oklch
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hues.len()
    }

    /// Always false: empty sets are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hues.is_empty()
    }
}

fn max_hue_spread(hues: &[f64]) -> f64 {
    pairs(hues)
        .map(|(a, b)| hue_distance(a, b))
        .fold(0.0, f64::max)
}

fn score_monochromatic(hues: &[f64]) -> u8 {
    if max_hue_spread(hues) <= MONOCHROMATIC_MAX_SPREAD {
        STRONG_MATCH
    } else {
        NO_MATCH
    }
}

fn score_analogous(hues: &[f64]) -> u8 {
    let spread = max_hue_spread(hues);
    if spread <= ANALOGOUS_STRONG_SPREAD {
        STRONG_MATCH
    } else if spread <= ANALOGOUS_WEAK_SPREAD {
        WEAK_MATCH
    } else {
        NO_MATCH
    }
}

fn score_any_pair(hues: &[f64], matches: impl Fn(f64) -> bool) -> u8 {
    if pairs(hues).any(|(a, b)| matches(hue_distance(a, b))) {
        STRONG_MATCH
    } else {
        NO_MATCH
    }
}

fn score_oklch_balance(colors: &[Oklch]) -> u8 {
    let (sum, count) = pairs(colors).fold((0.0, 0usize), |(sum, count), (a, b)| {
        (sum + a.raw_distance(b), count + 1)
    });
    if count == 0 {
        return NO_MATCH;
    }

    if (sum / count as f64) < OKLCH_BALANCE_MAX_MEAN_DISTANCE {
        STRONG_MATCH
    } else {
        NO_MATCH
    }
}
