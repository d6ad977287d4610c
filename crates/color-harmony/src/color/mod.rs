//! Color representations and conversions
//!
//! Five immutable value types, each convertible to the others:
//!
//! ```text
//! Hex <-> Srgb <-> Hsl
//!           |
//!         Oklab <-> Oklch
//! ```
//!
//! The primitive conversions are `From` impls along the edges above. Every
//! type also has `to_*` methods for the remaining targets; those are plain
//! compositions of the primitives, so their precision is exactly that of the
//! chain.
//!
//! Nothing is clamped. Colors that leave the sRGB gamut on the way back from
//! Oklab carry channels outside 0.0..=1.0 until quantized by [`Srgb::to_hex`].
//!
//! # Example
//!
//! ```
//! use color_harmony::{Hex, Oklch};
//!
//! let hex: Hex = "#336699".parse().unwrap();
//! let lch: Oklch = hex.to_oklch();
//! assert!((0.0..360.0).contains(&lch.h));
//!
//! // The way back is only approximate, and hex quantization truncates
//! let back = lch.to_srgb();
//! assert!((back.g - 0.4).abs() < 1e-6);
//! ```

mod hex;
mod hsl;
mod oklab;
mod oklch;
mod srgb;

pub use hex::Hex;
pub use hsl::Hsl;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use srgb::Srgb;
