//! Oklch: polar form of Oklab.
//!
//! Hue is expressed in degrees so it can be compared directly with HSL hues
//! and exported as-is.

use serde::{Deserialize, Serialize};

use super::{Hex, Hsl, Oklab, Srgb};

/// Lightness, chroma and hue (degrees) of an Oklab color.
///
/// For achromatic colors (`c` near zero) the hue is undefined and whatever
/// `atan2` yields is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness, same as Oklab L
    pub l: f64,
    /// Chroma, distance from the neutral axis (>= 0.0)
    pub c: f64,
    /// Hue angle in degrees, 0.0..360.0
    pub h: f64,
}

impl Oklch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Plain Euclidean distance over the raw `(l, c, h)` triple.
    ///
    /// Hue is in degrees and is not wrapped, so it dominates the result. The
    /// balance scorer depends on exactly this behavior.
    pub fn raw_distance(self, other: Oklch) -> f64 {
        let dl = self.l - other.l;
        let dc = self.c - other.c;
        let dh = self.h - other.h;
        (dl * dl + dc * dc + dh * dh).sqrt()
    }

    #[inline]
    pub fn to_oklab(self) -> Oklab {
        Oklab::from(self)
    }

    pub fn to_srgb(self) -> Srgb {
        self.to_oklab().to_srgb()
    }

    pub fn to_hex(self) -> Hex {
        self.to_srgb().to_hex()
    }

    pub fn to_hsl(self) -> Hsl {
        self.to_srgb().to_hsl()
    }
}

/// Map an angle from `atan2` (-180.0..=180.0) into 0.0..360.0.
#[inline]
fn normalize_degrees(deg: f64) -> f64 {
    let deg = if deg < 0.0 { deg + 360.0 } else { deg };
    // -1e-15 + 360.0 rounds to 360.0
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = normalize_degrees(lab.b.atan2(lab.a).to_degrees());
        Self { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}
