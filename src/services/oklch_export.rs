//! OKLCH dataset export.
//!
//! Turns hex palettes into `[L, C, H/360]` triples for training and
//! visualization. Colors are ordered by hue inside each palette, and palettes
//! by the hue of their first color.

use color_harmony::Hex;
use serde::Serialize;
use std::cmp::Ordering;

use crate::models::PaletteInput;

/// Precisions above this are treated as this.
pub const MAX_PRECISION: u32 = 15;

/// `[lightness, chroma, hue / 360]`
pub type OklchTriple = [f64; 3];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OklchExport {
    /// Converted palettes, sorted
    pub palettes: Vec<Vec<OklchTriple>>,
    /// Palettes dropped because a color did not convert cleanly
    pub skipped: usize,
}

/// Convert and sort palettes, rounding every value to `precision` decimals.
///
/// A palette is dropped (and counted in [`OklchExport::skipped`]) when it is
/// empty, holds a malformed hex string, or yields a non-finite value.
pub fn export_palettes(inputs: &[PaletteInput], precision: u32) -> OklchExport {
    let mut palettes = Vec::with_capacity(inputs.len());
    let mut skipped = 0;

    for (index, input) in inputs.iter().enumerate() {
        match convert_palette(input.colors(), precision) {
            Some(palette) => palettes.push(palette),
            None => {
                tracing::debug!(index, "Dropping palette from OKLCH export");
                skipped += 1;
            }
        }
    }

    // Both sorts are stable, so equal hues keep their input order
    for palette in &mut palettes {
        palette.sort_by(|a, b| by_hue(a, b));
    }
    palettes.sort_by(|a, b| by_hue(&a[0], &b[0]));

    OklchExport { palettes, skipped }
}

fn convert_palette(colors: &[String], precision: u32) -> Option<Vec<OklchTriple>> {
    if colors.is_empty() {
        return None;
    }
    colors
        .iter()
        .map(|hex| convert_color(hex, precision))
        .collect()
}

fn convert_color(hex: &str, precision: u32) -> Option<OklchTriple> {
    let lch = Hex::parse(hex).ok()?.to_oklch();
    let triple = [lch.l, lch.c, lch.h / 360.0].map(|v| round_to(v, precision));
    triple.iter().all(|v| v.is_finite()).then_some(triple)
}

/// Round half away from zero to `precision` decimal places
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

fn by_hue(a: &OklchTriple, b: &OklchTriple) -> Ordering {
    a[2].total_cmp(&b[2])
}
