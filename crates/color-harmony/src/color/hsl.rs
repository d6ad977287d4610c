//! HSL cylindrical model derived directly from sRGB.

use serde::{Deserialize, Serialize};

use super::{Hex, Oklab, Oklch, Srgb};

/// Hue, saturation and lightness of an sRGB color.
///
/// # Achromatic colors
///
/// When all three sRGB channels are equal, hue is meaningless. Conversion sets
/// `h = 0.0` and `s = 0.0` exactly. A hue of zero is therefore ambiguous
/// between "red" and "grey"; use [`Hsl::is_achromatic`] to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0 (circular)
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// True when the hue carries no information (zero saturation).
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::from(self)
    }

    pub fn to_hex(self) -> Hex {
        self.to_srgb().to_hex()
    }

    pub fn to_oklab(self) -> Oklab {
        self.to_srgb().to_oklab()
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_srgb().to_oklch()
    }
}

impl From<Srgb> for Hsl {
    /// Max/min channel decomposition.
    ///
    /// Hue comes from the piecewise formula for whichever channel is largest
    /// (red wins ties, then green), scaled by 60. For in-range input the
    /// result lands in 0.0..360.0 without a separate modulo.
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l != 0.0 {
            d / (1.0 - (2.0 * l - 1.0).abs())
        } else {
            0.0
        };

        let sector = if max == c.r {
            (c.g - c.b) / d + if c.g < c.b { 6.0 } else { 0.0 }
        } else if max == c.g {
            (c.b - c.r) / d + 2.0
        } else {
            (c.r - c.g) / d + 4.0
        };

        Self {
            h: sector * 60.0,
            s,
            l,
        }
    }
}

impl From<Hsl> for Srgb {
    /// Chroma/second-component reconstruction over six 60° sectors.
    ///
    /// Hues outside 0.0..360.0 fall into the last sector (red-magenta); callers
    /// that synthesize hues should normalize them first.
    fn from(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (chroma, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, chroma, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, chroma, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, chroma)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Srgb::new(r + m, g + m, b + m)
    }
}
