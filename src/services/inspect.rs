use color_harmony::{total_score, HarmonyPattern, HarmonyScores, Hex, Hsl, Oklab, Oklch, Srgb};
use serde::Serialize;

use crate::error::BatchError;

/// `total_score` result for an ad-hoc palette
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub palette: Vec<Hex>,
    pub best_match: HarmonyPattern,
    pub scores: HarmonyScores,
}

/// Every representation of a single color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: Hex,
    pub srgb: Srgb,
    pub hsl: Hsl,
    pub oklab: Oklab,
    pub oklch: Oklch,
    pub achromatic: bool,
}

pub fn score_hexes<S: AsRef<str>>(hexes: &[S]) -> Result<ScoreReport, BatchError> {
    let palette = hexes
        .iter()
        .map(|s| Hex::parse(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let colors: Vec<Srgb> = palette.iter().map(|hex| hex.to_srgb()).collect();
    let (best_match, scores) = total_score(&colors)?;

    Ok(ScoreReport {
        palette,
        best_match,
        scores,
    })
}

pub fn describe_hex(hex: &str) -> Result<ColorReport, BatchError> {
    let hex = Hex::parse(hex)?;
    let srgb = hex.to_srgb();
    let hsl = srgb.to_hsl();

    Ok(ColorReport {
        hex,
        srgb,
        hsl,
        oklab: srgb.to_oklab(),
        oklch: srgb.to_oklch(),
        achromatic: hsl.is_achromatic(),
    })
}
