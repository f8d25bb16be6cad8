//! Cylindrical (polar) form of LAB.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;
use crate::space::lab::Lab;

/// LCH color: L* in [0, 100], chroma ≥ 0, hue in degrees [0, 360).
///
/// Field order (l, c, h) is the fixed layout exposed to external codecs.
/// Constructed values are always normalized.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }.normalize()
    }

    /// Clamps lightness to [0, 100], chroma to non-negative, and wraps the
    /// hue into [0, 360). Idempotent.
    pub fn normalize(self) -> Self {
        let mut h = self.h;
        if !(0.0..360.0).contains(&h) {
            h %= 360.0;
            if h < 0.0 {
                h += 360.0;
            }
        }
        Self {
            l: self.l.clamp(0.0, 100.0),
            c: self.c.max(0.0),
            h,
        }
    }

    /// Polar reparametrization of the a*/b* plane; a negative atan2 angle
    /// is shifted up a full turn before normalization.
    pub fn from_lab(lab: Lab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let mut h = lab.b.atan2(lab.a) * 180.0 / PI;
        if h < 0.0 {
            h += 360.0;
        }
        Self { l: lab.l, c, h }.normalize()
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_lab(Lab::from_rgb(rgb))
    }

    /// Back to rectangular LAB via cos/sin at the hue angle.
    pub fn to_lab(self) -> Lab {
        let h_rad = self.h * PI / 180.0;
        Lab::new(self.l, self.c * h_rad.cos(), self.c * h_rad.sin())
    }

    pub fn to_rgb(self) -> Rgb {
        self.to_lab().to_rgb()
    }

    pub fn lightness(self) -> f64 {
        self.l
    }

    pub fn chroma(self) -> f64 {
        self.c
    }

    pub fn hue(self) -> f64 {
        self.h
    }

    pub fn hue_radians(self) -> f64 {
        self.h * PI / 180.0
    }

    /// Shifts L* by `delta`, clamped to [0, 100].
    pub fn adjust_lightness(self, delta: f64) -> Self {
        Self::new(self.l + delta, self.c, self.h)
    }

    /// Shifts chroma by `delta`, floored at zero.
    pub fn adjust_chroma(self, delta: f64) -> Self {
        Self::new(self.l, self.c + delta, self.h)
    }

    /// Scales chroma by `factor`, floored at zero.
    pub fn scale_chroma(self, factor: f64) -> Self {
        Self::new(self.l, self.c * factor, self.h)
    }

    /// Rotates the hue; the wrap happens in normalization.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self::new(self.l, self.c, self.h + degrees)
    }

    /// Replaces the hue outright.
    pub fn set_hue(self, hue_degrees: f64) -> Self {
        Self::new(self.l, self.c, hue_degrees)
    }

    /// Chroma-weighted cylindrical distance.
    ///
    /// The hue delta takes the shortest path around the circle (corrected
    /// when |Δh| exceeds 180°) and is weighted by
    /// `2·√(c₁·c₂)·sin(Δh·π/360)` before entering the Euclidean
    /// combination. A bespoke metric, not a CIE standard; the geometric
    /// mean keeps it symmetric in its arguments.
    pub fn distance(self, other: Lch) -> f64 {
        let dl = self.l - other.l;
        let dc = self.c - other.c;
        let mut dh = self.h - other.h;

        if dh.abs() > 180.0 {
            dh = if dh > 0.0 { dh - 360.0 } else { dh + 360.0 };
        }

        let dh_weighted = 2.0 * (self.c * other.c).sqrt() * (dh * PI / 360.0).sin();

        (dl * dl + dc * dc + dh_weighted * dh_weighted).sqrt()
    }

    /// Opposite point on the hue circle.
    pub fn complement(self) -> Self {
        self.rotate_hue(180.0)
    }

    /// Hues at ±30°.
    pub fn analogous(self) -> (Lch, Lch) {
        (self.rotate_hue(-30.0), self.rotate_hue(30.0))
    }

    /// Hues a third of a turn away.
    pub fn triadic(self) -> (Lch, Lch) {
        (self.rotate_hue(120.0), self.rotate_hue(240.0))
    }

    /// Hues straddling the complement at ±30°.
    pub fn split_complementary(self) -> (Lch, Lch) {
        (self.rotate_hue(150.0), self.rotate_hue(210.0))
    }

    /// Square scheme: quarter-turn rotations.
    pub fn tetradic(self) -> (Lch, Lch, Lch) {
        (
            self.rotate_hue(90.0),
            self.rotate_hue(180.0),
            self.rotate_hue(270.0),
        )
    }

    /// Component-wise approximate equality at 1e-6.
    pub fn approx_eq(self, other: Lch) -> bool {
        const EPSILON: f64 = 1e-6;
        (self.l - other.l).abs() < EPSILON
            && (self.c - other.c).abs() < EPSILON
            && (self.h - other.h).abs() < EPSILON
    }
}
