//! Scoring one palette against every pattern.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::pattern::{ColorSet, HarmonyPattern};
use crate::color::Srgb;
use crate::HarmonyError;

/// One score per [`HarmonyPattern`], stored in tie-break order.
///
/// Serializes as a JSON object keyed by pattern label, in that same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarmonyScores {
    scores: [u8; 7],
}

impl HarmonyScores {
    /// Score `set` against all seven patterns.
    pub fn compute(set: &ColorSet) -> Self {
        Self {
            scores: HarmonyPattern::ALL.map(|pattern| pattern.score(set)),
        }
    }

    #[inline]
    pub fn get(&self, pattern: HarmonyPattern) -> u8 {
        self.scores[pattern.index()]
    }

    /// `(pattern, score)` pairs in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (HarmonyPattern, u8)> + '_ {
        HarmonyPattern::ALL.into_iter().zip(self.scores.iter().copied())
    }

    /// The highest-scoring pattern; the earliest one wins a tie.
    ///
    /// With every score at zero this is [`HarmonyPattern::Monochromatic`].
    pub fn best(&self) -> HarmonyPattern {
        let mut best = HarmonyPattern::ALL[0];
        for (pattern, score) in self.iter() {
            // Strictly greater keeps the first maximum.
            if score > self.get(best) {
                best = pattern;
            }
        }
        best
    }
}

impl Serialize for HarmonyScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (pattern, score) in self.iter() {
            map.serialize_entry(pattern.label(), &score)?;
        }
        map.end()
    }
}

/// Score a palette of 3 or more colors and pick its best pattern.
///
/// # Errors
///
/// [`HarmonyError::InsufficientColors`] for fewer than 3 colors.
///
/// # Example
///
/// ```
/// use color_harmony::{total_score, HarmonyPattern, Srgb};
///
/// let palette = ["#ff0000", "#00ffff", "#808080"]
///     .map(|hex| Srgb::from_hex(hex).unwrap());
/// let (best, scores) = total_score(&palette).unwrap();
/// assert_eq!(best, HarmonyPattern::Complementary);
/// assert_eq!(scores.get(HarmonyPattern::Complementary), 5);
/// ```
pub fn total_score(colors: &[Srgb]) -> Result<(HarmonyPattern, HarmonyScores), HarmonyError> {
    let set = ColorSet::new(colors)?;
    let scores = HarmonyScores::compute(&set);
    Ok((scores.best(), scores))
}
