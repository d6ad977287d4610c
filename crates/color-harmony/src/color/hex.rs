//! Hexadecimal color notation
//!
//! A [`Hex`] holds the three 8-bit channels of a `#rrggbb` string. Parsing is
//! case-insensitive and accepts an optional leading `#`; display always
//! produces lowercase with the `#` prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Hsl, Oklab, Oklch, Srgb};
use crate::HarmonyError;

/// A 24-bit color in `#rrggbb` notation.
///
/// # Example
///
/// ```
/// use color_harmony::Hex;
///
/// let teal: Hex = "#00FFFF".parse().unwrap();
/// assert_eq!(teal.to_string(), "#00ffff");
/// assert_eq!(teal, "00ffff".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex {
    rgb: [u8; 3],
}

impl Hex {
    /// Create a hex color from 8-bit channels.
    #[inline]
    pub fn from_bytes(rgb: [u8; 3]) -> Self {
        Self { rgb }
    }

    /// The 8-bit channels in `[r, g, b]` order.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        self.rgb
    }

    /// Parse `#rrggbb` or `rrggbb`.
    ///
    /// # Errors
    ///
    /// [`HarmonyError::InvalidFormat`] unless the input, after stripping one
    /// leading `#`, is exactly 6 ASCII hex digits. No whitespace trimming and
    /// no 3-digit shorthand.
    pub fn parse(s: &str) -> Result<Self, HarmonyError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        // Checking bytes up front keeps the slicing below on char boundaries
        // and rejects the sign prefix that from_str_radix would accept.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HarmonyError::invalid_format(s));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| HarmonyError::invalid_format(s))
        };
        Ok(Self {
            rgb: [channel(0)?, channel(2)?, channel(4)?],
        })
    }

    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::from(self)
    }

    pub fn to_hsl(self) -> Hsl {
        self.to_srgb().to_hsl()
    }

    pub fn to_oklab(self) -> Oklab {
        self.to_srgb().to_oklab()
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_srgb().to_oklch()
    }
}

impl FromStr for Hex {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
