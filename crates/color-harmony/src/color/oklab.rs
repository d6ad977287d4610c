//! Oklab perceptual color space
//!
//! The forward transform applies two fixed 3x3 matrices around a signed cube
//! root; the inverse applies the inverse matrices around a plain cube. Both
//! operate on the gamma-encoded [`Srgb`] channels as given.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use serde::{Deserialize, Serialize};

use super::{Hex, Hsl, Oklch, Srgb};

/// sRGB to LMS.
const RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted LMS to Oklab.
const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Oklab to cube-rooted LMS.
const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS to sRGB.
const LMS_TO_RGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Cube root that keeps the sign of its argument.
#[inline]
fn signed_cbrt(x: f64) -> f64 {
    x.abs().cbrt() * x.signum()
}

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, about 1.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// No bounds are enforced on any component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::from(self)
    }

    #[inline]
    pub fn to_oklch(self) -> Oklch {
        Oklch::from(self)
    }

    pub fn to_hex(self) -> Hex {
        self.to_srgb().to_hex()
    }

    pub fn to_hsl(self) -> Hsl {
        self.to_srgb().to_hsl()
    }
}

impl From<Srgb> for Oklab {
    /// ```
    /// use color_harmony::{Oklab, Srgb};
    ///
    /// let grey = Oklab::from(Srgb::new(0.5, 0.5, 0.5));
    /// assert!(grey.a.abs() < 1e-6);
    /// assert!(grey.b.abs() < 1e-6);
    /// ```
    fn from(c: Srgb) -> Self {
        let lms = mul(&RGB_TO_LMS, [c.r, c.g, c.b]);
        // LMS can go negative for out-of-gamut input; a plain cbrt of |x| would
        // fold those onto the positive side.
        let lms_ = lms.map(signed_cbrt);
        let [l, a, b] = mul(&LMS_TO_LAB, lms_);
        Self { l, a, b }
    }
}

impl From<Oklab> for Srgb {
    /// Inverse transform. The result is not clamped.
    fn from(lab: Oklab) -> Self {
        let lms_ = mul(&LAB_TO_LMS, [lab.l, lab.a, lab.b]);
        let lms = lms_.map(|x| x * x * x);
        let [r, g, b] = mul(&LMS_TO_RGB, lms);
        Srgb::new(r, g, b)
    }
}
