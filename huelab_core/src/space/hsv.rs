//! HSV with floating hue.
//!
//! Unlike [`Hsl`](crate::Hsl), HSV keeps its hue as an `f32` in degrees.
//! The tradeoff is deliberate: HSV is the artist-facing adjustment space
//! where the asymmetric brightness/saturation easing matters more than
//! drift-free rotation, so [`Hsv::normalize`] wraps the hue on demand
//! instead of storing it fixed-point.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

/// HSV color: hue in degrees [0, 360), saturation and value in [0, 1].
///
/// Field order (h, s, v) is the fixed layout exposed to external codecs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }.normalize()
    }

    /// Wraps the hue into [0, 360) and clamps saturation and value to
    /// [0, 1]. Idempotent: normalizing a normal value changes nothing.
    pub fn normalize(self) -> Self {
        let mut h = self.h;
        if !(0.0..360.0).contains(&h) {
            h %= 360.0;
            if h < 0.0 {
                h += 360.0;
            }
        }
        Self {
            h,
            s: self.s.clamp(0.0, 1.0),
            v: self.v.clamp(0.0, 1.0),
        }
    }

    /// Six-case max-channel hue derivation; alpha is ignored.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = if delta < 1e-6 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        if h < 0.0 {
            h += 360.0;
        }

        let s = if max < 1e-6 { 0.0 } else { delta / max };

        Self { h, s, v: max }.normalize()
    }

    /// Sector-based chroma reconstruction; the result is opaque.
    pub fn to_rgb(self) -> Rgb {
        let c = self.v * self.s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (rp, gp, bp) = if self.h < 60.0 {
            (c, x, 0.0)
        } else if self.h < 120.0 {
            (x, c, 0.0)
        } else if self.h < 180.0 {
            (0.0, c, x)
        } else if self.h < 240.0 {
            (0.0, x, c)
        } else if self.h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(
            ((rp + m) * 255.0).round() as u8,
            ((gp + m) * 255.0).round() as u8,
            ((bp + m) * 255.0).round() as u8,
        )
    }

    /// Eases the value channel: positive `delta` moves it toward 1 by
    /// `delta * (1 - v)`, negative moves it toward 0 by `delta * v`.
    /// The asymmetry means ±delta never overshoots either bound.
    pub fn adjust_brightness(self, delta: f32) -> Self {
        let delta = delta.clamp(-1.0, 1.0);
        let v = if delta > 0.0 {
            self.v + delta * (1.0 - self.v)
        } else {
            self.v + delta * self.v
        };
        Self {
            v: v.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same easing as [`Hsv::adjust_brightness`], applied to saturation.
    pub fn adjust_saturation(self, delta: f32) -> Self {
        let delta = delta.clamp(-1.0, 1.0);
        let s = if delta > 0.0 {
            self.s + delta * (1.0 - self.s)
        } else {
            self.s + delta * self.s
        };
        Self {
            s: s.clamp(0.0, 1.0),
            ..self
        }
    }
}
