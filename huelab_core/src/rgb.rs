//! 8-bit device RGB with alpha.
//!
//! [`Rgb`] is the canonical interchange type: every other color space
//! converts to and from it, and the palette/harmony layers operate on it
//! directly. All operations are total: arithmetic saturates, ratios and
//! factors clamp, and nothing returns an error.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Device RGB color with four 8-bit channels.
///
/// Field order (r, g, b, a) is the fixed layout exposed to external codecs.
/// Every operation returns a new value; nothing mutates in place.
///
/// # Examples
///
/// ```
/// use huelab_core::Rgb;
///
/// let coral = Rgb::new(255, 127, 80);
/// let dimmed = coral * 0.5;
/// assert_eq!(dimmed, Rgb::new(127, 63, 40));
/// assert!(coral.is_light());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const TRANSPARENT: Rgb = Rgb::rgba(0, 0, 0, 0);

    /// Opaque color from three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Fraction of light blocked: 0.0 for opaque, 1.0 for fully transparent.
    pub fn transparency(self) -> f64 {
        1.0 - self.a as f64 / 255.0
    }

    pub const fn is_transparent(self) -> bool {
        self.a < 255
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Perceived brightness on the 0–255 scale, using the fixed
    /// 0.299/0.587/0.114 weights shared with [`crate::Gray`].
    pub fn luminance(self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    pub fn is_dark(self) -> bool {
        self.luminance() < 128.0
    }

    pub fn is_light(self) -> bool {
        self.luminance() >= 128.0
    }

    /// Linear interpolation toward `other`; ratio clamps to [0, 1] and
    /// applies to all four channels.
    pub fn mix(self, other: Rgb, ratio: f64) -> Rgb {
        let t = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
        Rgb {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    /// Additive blend, saturating at white. Alpha comes from `self`.
    pub fn blend_add(self, other: Rgb) -> Rgb {
        Rgb {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            a: self.a,
        }
    }

    /// Subtractive blend, saturating at black. Alpha comes from `self`.
    pub fn blend_subtract(self, other: Rgb) -> Rgb {
        Rgb {
            r: self.r.saturating_sub(other.r),
            g: self.g.saturating_sub(other.g),
            b: self.b.saturating_sub(other.b),
            a: self.a,
        }
    }

    /// Multiplicative blend; always darkens.
    pub fn blend_multiply(self, other: Rgb) -> Rgb {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Rgb {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: self.a,
        }
    }

    /// Screen blend; always lightens.
    pub fn blend_screen(self, other: Rgb) -> Rgb {
        let screen = |a: u8, b: u8| {
            (255 - ((255 - a as u16) * (255 - b as u16)) / 255) as u8
        };
        Rgb {
            r: screen(self.r, other.r),
            g: screen(self.g, other.g),
            b: screen(self.b, other.b),
            a: self.a,
        }
    }

    /// Overlay blend: multiply where the base channel is below 128, screen
    /// where it is at or above.
    pub fn blend_overlay(self, other: Rgb) -> Rgb {
        let overlay = |base: u8, blend: u8| -> u8 {
            if base < 128 {
                ((2 * base as u16 * blend as u16) / 255) as u8
            } else {
                (255 - (2 * (255 - base as u16) * (255 - blend as u16)) / 255) as u8
            }
        };
        Rgb {
            r: overlay(self.r, other.r),
            g: overlay(self.g, other.g),
            b: overlay(self.b, other.b),
            a: self.a,
        }
    }

    /// Porter-Duff "over" compositing of `self` onto `background`.
    ///
    /// Fully opaque foreground returns `self`, fully transparent returns the
    /// background, and a combined alpha of zero yields transparent black.
    pub fn alpha_blend(self, background: Rgb) -> Rgb {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return background;
        }

        let alpha_fg = self.a as f64 / 255.0;
        let alpha_bg = background.a as f64 / 255.0;
        let alpha_out = alpha_fg + alpha_bg * (1.0 - alpha_fg);

        if alpha_out == 0.0 {
            return Rgb::TRANSPARENT;
        }

        let blend = |fg: u8, bg: u8| {
            ((fg as f64 * alpha_fg + bg as f64 * alpha_bg * (1.0 - alpha_fg)) / alpha_out) as u8
        };
        Rgb {
            r: blend(self.r, background.r),
            g: blend(self.g, background.g),
            b: blend(self.b, background.b),
            a: (alpha_out * 255.0) as u8,
        }
    }

    /// Fast compositing that treats the background as opaque: a plain lerp
    /// by this color's alpha fraction, with the result forced opaque.
    pub fn alpha_blend_simple(self, background: Rgb) -> Rgb {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return background;
        }

        let alpha = self.a as f64 / 255.0;
        let inv = 1.0 - alpha;
        Rgb {
            r: (self.r as f64 * alpha + background.r as f64 * inv) as u8,
            g: (self.g as f64 * alpha + background.g as f64 * inv) as u8,
            b: (self.b as f64 * alpha + background.b as f64 * inv) as u8,
            a: 255,
        }
    }

    /// Scales the color channels by `1 + factor`.
    pub fn brighten(self, factor: f64) -> Rgb {
        self * (1.0 + factor)
    }

    /// Scales the color channels by `1 - factor`.
    pub fn darken(self, factor: f64) -> Rgb {
        self * (1.0 - factor)
    }

    /// Encodes the color with the given display gamma: each channel is
    /// normalized, raised to `1/gamma`, rescaled and rounded.
    pub fn apply_gamma(self, gamma: f64) -> Rgb {
        self.map_channels(|v| (v / 255.0).powf(1.0 / gamma) * 255.0)
    }

    /// Inverse of [`Rgb::apply_gamma`]: raises normalized channels to
    /// `gamma`. Round-tripping with the same gamma stays within ±2.
    pub fn remove_gamma(self, gamma: f64) -> Rgb {
        self.map_channels(|v| (v / 255.0).powf(gamma) * 255.0)
    }

    /// Contrast stretch about the 128 pivot; `contrast` clamps to [-1, 1].
    pub fn adjust_contrast(self, contrast: f64) -> Rgb {
        let c = contrast.clamp(-1.0, 1.0);
        let factor = (259.0 * (c * 255.0 + 255.0)) / (255.0 * (259.0 - c * 255.0));
        let stretch = |v: u8| (factor * (v as f64 - 128.0) + 128.0) as i32;
        Rgb {
            r: stretch(self.r).clamp(0, 255) as u8,
            g: stretch(self.g).clamp(0, 255) as u8,
            b: stretch(self.b).clamp(0, 255) as u8,
            a: self.a,
        }
    }

    /// Replicates the luminance into all three color channels.
    pub fn to_grayscale(self) -> Rgb {
        let gray = self.luminance() as u8;
        Rgb::rgba(gray, gray, gray, self.a)
    }

    /// Channel-wise inversion; alpha unchanged.
    pub const fn invert(self) -> Rgb {
        Rgb::rgba(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// Shifts the color toward red/yellow. `factor` clamps to [0, 1].
    pub fn warm(self, factor: f64) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb {
            r: ((self.r as f64 + 255.0 * f * 0.3) as i32).clamp(0, 255) as u8,
            g: ((self.g as f64 + 255.0 * f * 0.1) as i32).clamp(0, 255) as u8,
            b: self.b,
            a: self.a,
        }
    }

    /// Shifts the color toward blue/cyan. `factor` clamps to [0, 1].
    pub fn cool(self, factor: f64) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb {
            r: self.r,
            g: ((self.g as f64 + 255.0 * f * 0.1) as i32).clamp(0, 255) as u8,
            b: ((self.b as f64 + 255.0 * f * 0.3) as i32).clamp(0, 255) as u8,
            a: self.a,
        }
    }

    /// `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa` notation; the alpha digits are appended only when the
    /// color is not fully opaque.
    pub fn to_hex_alpha(self) -> String {
        if self.a == 255 {
            self.to_hex()
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    fn map_channels(self, f: impl Fn(f64) -> f64) -> Rgb {
        let apply = |v: u8| f(v as f64).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
            a: self.a,
        }
    }
}

impl Add for Rgb {
    type Output = Rgb;

    /// Per-channel saturating addition, alpha included.
    fn add(self, other: Rgb) -> Rgb {
        Rgb {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            a: self.a.saturating_add(other.a),
        }
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    /// Per-channel saturating subtraction, alpha included.
    fn sub(self, other: Rgb) -> Rgb {
        Rgb {
            r: self.r.saturating_sub(other.r),
            g: self.g.saturating_sub(other.g),
            b: self.b.saturating_sub(other.b),
            a: self.a.saturating_sub(other.a),
        }
    }
}

impl Mul<f64> for Rgb {
    type Output = Rgb;

    /// Scalar scaling of the color channels; alpha is preserved so that
    /// brighten/darken never change opacity.
    fn mul(self, factor: f64) -> Rgb {
        let scale = |v: u8| (v as f64 * factor).clamp(0.0, 255.0) as u8;
        Rgb {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
