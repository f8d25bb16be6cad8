//! Single-channel gray with alpha.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

/// Grayscale value with alpha, derived from [`Rgb`] through the fixed
/// luminance weights. Field order (v, a) is the fixed layout exposed to
/// external codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gray {
    pub v: u8,
    pub a: u8,
}

impl Default for Gray {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Gray {
    pub const BLACK: Gray = Gray::new(0);
    pub const WHITE: Gray = Gray::new(255);
    pub const GRAY: Gray = Gray::new(128);

    pub const fn new(v: u8) -> Self {
        Self { v, a: 255 }
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            v: self.v,
            a: alpha,
        }
    }

    /// Collapses a device color to its luminance.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            v: rgb.luminance() as u8,
            a: rgb.a,
        }
    }

    /// Replicates the value into all three color channels.
    pub const fn to_rgb(self) -> Rgb {
        Rgb::rgba(self.v, self.v, self.v, self.a)
    }

    pub const fn invert(self) -> Gray {
        Gray {
            v: 255 - self.v,
            a: self.a,
        }
    }

    pub fn mix(self, other: Gray, ratio: f64) -> Gray {
        let t = ratio.clamp(0.0, 1.0);
        Gray {
            v: (self.v as f64 * (1.0 - t) + other.v as f64 * t) as u8,
            a: (self.a as f64 * (1.0 - t) + other.a as f64 * t) as u8,
        }
    }

    pub fn brighten(self, factor: f64) -> Gray {
        self * (1.0 + factor)
    }

    pub fn darken(self, factor: f64) -> Gray {
        self * (1.0 - factor)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}", self.v)
    }
}

impl Add for Gray {
    type Output = Gray;

    fn add(self, other: Gray) -> Gray {
        Gray {
            v: self.v.saturating_add(other.v),
            a: self.a,
        }
    }
}

impl Sub for Gray {
    type Output = Gray;

    fn sub(self, other: Gray) -> Gray {
        Gray {
            v: self.v.saturating_sub(other.v),
            a: self.a,
        }
    }
}

impl Mul<f64> for Gray {
    type Output = Gray;

    fn mul(self, factor: f64) -> Gray {
        Gray {
            v: (self.v as f64 * factor).clamp(0.0, 255.0) as u8,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_luminance_weights() {
        let g = Gray::from_rgb(Rgb::new(255, 0, 0));
        assert_eq!(g.v, 76); // 0.299 * 255 truncated
        let white = Gray::from_rgb(Rgb::WHITE);
        assert_eq!(white.v, 255);
    }

    #[test]
    fn round_trips_through_rgb() {
        let g = Gray::new(200).with_alpha(40);
        let rgb = g.to_rgb();
        assert_eq!(rgb, Rgb::rgba(200, 200, 200, 40));
        assert_eq!(Gray::from_rgb(rgb), g);
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!((Gray::new(200) + Gray::new(100)).v, 255);
        assert_eq!((Gray::new(20) - Gray::new(100)).v, 0);
        assert_eq!((Gray::new(128) * 3.0).v, 255);
    }

    #[test]
    fn mix_and_invert() {
        assert_eq!(Gray::BLACK.mix(Gray::WHITE, 0.5).v, 127);
        assert_eq!(Gray::new(10).invert().v, 245);
    }
}
