//! Oklab, the alternative perceptually-uniform space.
//!
//! The pipeline (LMS matrix, cube root, second matrix) is numerically
//! independent of the CIE LAB constants; the two sets of matrices must
//! never be mixed.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;
use crate::tables::Tables;

/// Oklab color: lightness in [0, 1], a and b roughly in [-0.4, 0.4].
/// No embedded alpha. Field order (l, a, b) is the fixed layout exposed to
/// external codecs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Linearize, project onto the LMS cone responses, compress with a
    /// per-channel cube root, then project into Oklab.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let tables = Tables::shared();
        let r = tables.gamma_to_linear(rgb.r);
        let g = tables.gamma_to_linear(rgb.g);
        let b = tables.gamma_to_linear(rgb.b);

        let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
        let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
        let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

        Self {
            l: 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
            a: 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
            b: 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
        }
    }

    /// Exact inverse: back to LMS, cube, back to linear RGB, gamma encode.
    pub fn to_rgb(self) -> Rgb {
        let l = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s = self.l - 0.089_484_177_5 * self.a - 1.291_485_548_0 * self.b;

        let l3 = l * l * l;
        let m3 = m * m * m;
        let s3 = s * s * s;

        let r_lin = 4.076_741_662_1 * l3 - 3.307_711_591_3 * m3 + 0.230_969_929_2 * s3;
        let g_lin = -1.268_438_004_6 * l3 + 2.609_757_401_1 * m3 - 0.341_319_396_5 * s3;
        let b_lin = -0.004_196_086_3 * l3 - 0.703_418_614_7 * m3 + 1.707_614_701_0 * s3;

        let tables = Tables::shared();
        let encode = |v: f64| (tables.linear_to_gamma(v) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(encode(r_lin), encode(g_lin), encode(b_lin))
    }

    pub fn lightness(self) -> f64 {
        self.l
    }

    /// Colorfulness: the radius in the a/b plane.
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    pub fn hue_radians(self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Hue angle in degrees, lifted into [0, 360).
    pub fn hue_degrees(self) -> f64 {
        let h = self.hue_radians() * 180.0 / PI;
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }

    /// Shifts lightness by `delta`, clamped to [0, 1].
    pub fn adjust_lightness(self, delta: f64) -> Self {
        Self {
            l: (self.l + delta).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Scales both chroma axes by `factor`.
    pub fn adjust_chroma(self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            b: self.b * factor,
            ..self
        }
    }

    /// Rotates the a/b plane by the given angle.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let radians = degrees * PI / 180.0;
        let (sin_h, cos_h) = radians.sin_cos();
        Self {
            l: self.l,
            a: self.a * cos_h - self.b * sin_h,
            b: self.a * sin_h + self.b * cos_h,
        }
    }

    /// Plain Euclidean distance; Oklab is close enough to uniform that no
    /// extra weighting is applied.
    pub fn distance(self, other: Oklab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Component-wise approximate equality at 1e-6.
    pub fn approx_eq(self, other: Oklab) -> bool {
        const EPSILON: f64 = 1e-6;
        (self.l - other.l).abs() < EPSILON
            && (self.a - other.a).abs() < EPSILON
            && (self.b - other.b).abs() < EPSILON
    }
}
