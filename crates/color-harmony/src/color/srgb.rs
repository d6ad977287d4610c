//! sRGB color type
//!
//! Channels are gamma-encoded values in 0.0..=1.0. The kernel never
//! linearizes them: the OKLab matrices are applied to these values directly.

use serde::{Deserialize, Serialize};

use super::{Hex, Hsl, Oklab, Oklch};
use crate::HarmonyError;

/// A color in sRGB color space.
///
/// Values are nominally in the range 0.0..=1.0 but are never clamped; colors
/// coming back from OKLab/OKLCH may fall outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Parse a `#rrggbb` string straight into sRGB.
    ///
    /// # Errors
    ///
    /// [`HarmonyError::InvalidFormat`] for anything but 6 hex digits with an
    /// optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, HarmonyError> {
        Hex::parse(s).map(Self::from)
    }

    /// Quantize to 8-bit hex notation.
    ///
    /// Each channel is scaled by 255 and truncated toward zero, not rounded.
    /// Out-of-range channels saturate at 0 and 255 (NaN becomes 0).
    ///
    /// ```
    /// use color_harmony::Srgb;
    /// // 0.999 * 255 = 254.745 truncates to 254
    /// assert_eq!(Srgb::new(0.999, 0.0, 1.0).to_hex().to_string(), "#fe00ff");
    /// ```
    pub fn to_hex(self) -> Hex {
        // `as u8` truncates toward zero and saturates out-of-range floats.
        Hex::from_bytes([
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ])
    }

    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    #[inline]
    pub fn to_oklab(self) -> Oklab {
        Oklab::from(self)
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_oklch()
    }
}

impl From<Hex> for Srgb {
    fn from(hex: Hex) -> Self {
        let [r, g, b] = hex.to_bytes();
        Self::from_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_values() {
        let color = Srgb::from_hex("#ff8000").unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 128.0 / 255.0);
        assert_eq!(color.b, 0.0);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(
            Srgb::from_hex("#12345"),
            Err(HarmonyError::InvalidFormat { .. })
        ));
    }

    /// Every 8-bit value must survive u8 -> f64 -> u8 through truncation.
    #[test]
    fn test_hex_round_trip_all_channel_values() {
        for v in 0..=255u8 {
            let hex = Hex::from_bytes([v, 255 - v, v / 2]);
            assert_eq!(Srgb::from(hex).to_hex(), hex, "round trip failed for {v}");
        }
    }

    #[test]
    fn test_to_hex_truncates() {
        // 0.5 * 255 = 127.5 -> 127, where rounding would give 128
        assert_eq!(Srgb::new(0.5, 0.5, 0.5).to_hex().to_string(), "#7f7f7f");
    }

    #[test]
    fn test_to_hex_saturates_out_of_gamut() {
        let hex = Srgb::new(1.2, -0.1, f64::NAN).to_hex();
        assert_eq!(hex.to_bytes(), [255, 0, 0]);
    }

    #[test]
    fn test_srgb_hex_srgb_is_lossy() {
        let original = Srgb::new(0.3, 0.6, 0.9);
        let back = original.to_hex().to_srgb();
        assert_ne!(original, back);
        assert!((original.r - back.r).abs() < 1.0 / 255.0);
        assert!((original.g - back.g).abs() < 1.0 / 255.0);
        assert!((original.b - back.b).abs() < 1.0 / 255.0);
    }
}
