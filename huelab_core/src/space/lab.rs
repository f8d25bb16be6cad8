//! CIE L*a*b* and the Delta E family.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;
use crate::space::xyz::{D65_WHITE, RGB_TO_XYZ, XYZ_TO_RGB};
use crate::tables::Tables;

/// Default [`Lab::is_similar`] threshold, calibrated against CIE76.
pub const SIMILARITY_THRESHOLD: f64 = 2.3;

/// CIE LAB color referenced to D65.
///
/// L* spans [0, 100]; a* and b* are unbounded chroma axes. Alpha is carried
/// as a float approximating [0, 255], the one floating alpha in the
/// library, preserved so LAB values survive round trips through external
/// codecs without re-quantizing coverage. Field order (l, a, b, alpha) is
/// the fixed layout exposed to external codecs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Default for Lab {
    fn default() -> Self {
        Self {
            l: 0.0,
            a: 0.0,
            b: 0.0,
            alpha: 255.0,
        }
    }
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l,
            a,
            b,
            alpha: 255.0,
        }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            l: self.l,
            a: self.a,
            b: self.b,
            alpha,
        }
    }

    /// Full pipeline: gamma table linearization, sRGB matrix, D65 white
    /// normalization, f() table, then the L*/a*/b* combination.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let tables = Tables::shared();
        let r = tables.gamma_to_linear(rgb.r);
        let g = tables.gamma_to_linear(rgb.g);
        let b = tables.gamma_to_linear(rgb.b);

        let x = (r * RGB_TO_XYZ[0][0] + g * RGB_TO_XYZ[0][1] + b * RGB_TO_XYZ[0][2])
            / (D65_WHITE[0] / 100.0);
        let y = (r * RGB_TO_XYZ[1][0] + g * RGB_TO_XYZ[1][1] + b * RGB_TO_XYZ[1][2])
            / (D65_WHITE[1] / 100.0);
        let z = (r * RGB_TO_XYZ[2][0] + g * RGB_TO_XYZ[2][1] + b * RGB_TO_XYZ[2][2])
            / (D65_WHITE[2] / 100.0);

        let fx = tables.lab_f(x);
        let fy = tables.lab_f(y);
        let fz = tables.lab_f(z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: rgb.a as f64,
        }
    }

    /// Inverse pipeline through the f⁻¹() table; out-of-gamut values clamp
    /// to the 8-bit range.
    pub fn to_rgb(self) -> Rgb {
        let tables = Tables::shared();

        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let x = tables.lab_f_inv(fx) * (D65_WHITE[0] / 100.0);
        let y = tables.lab_f_inv(fy) * (D65_WHITE[1] / 100.0);
        let z = tables.lab_f_inv(fz) * (D65_WHITE[2] / 100.0);

        let r_lin = x * XYZ_TO_RGB[0][0] + y * XYZ_TO_RGB[0][1] + z * XYZ_TO_RGB[0][2];
        let g_lin = x * XYZ_TO_RGB[1][0] + y * XYZ_TO_RGB[1][1] + z * XYZ_TO_RGB[1][2];
        let b_lin = x * XYZ_TO_RGB[2][0] + y * XYZ_TO_RGB[2][1] + z * XYZ_TO_RGB[2][2];

        let encode = |v: f64| (tables.linear_to_gamma(v) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::rgba(
            encode(r_lin),
            encode(g_lin),
            encode(b_lin),
            self.alpha.clamp(0.0, 255.0) as u8,
        )
    }

    /// CIE76 color difference: plain Euclidean distance in (L*, a*, b*).
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Simplified CIEDE2000-style difference with fixed weighting
    /// (sl = 1, sc = 1 + 0.045·c1, sh = 1 + 0.015·c1).
    ///
    /// This is NOT the full reference formula; the downstream similarity
    /// thresholds are calibrated against this approximation, so the
    /// simplification is part of the contract.
    pub fn delta_e_2000(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;

        let c1 = (self.a * self.a + self.b * self.b).sqrt();
        let c2 = (other.a * other.a + other.b * other.b).sqrt();
        let dc = c1 - c2;

        let dh = (da * da + db * db - dc * dc).max(0.0).sqrt();

        let sc = 1.0 + 0.045 * c1;
        let sh = 1.0 + 0.015 * c1;

        (dl * dl + (dc / sc) * (dc / sc) + (dh / sh) * (dh / sh)).sqrt()
    }

    /// Perceptual similarity under the default CIE76 threshold.
    pub fn is_similar(self, other: Lab) -> bool {
        self.is_similar_within(other, SIMILARITY_THRESHOLD)
    }

    /// Perceptual similarity under an explicit CIE76 threshold.
    pub fn is_similar_within(self, other: Lab, threshold: f64) -> bool {
        self.delta_e(other) < threshold
    }

    /// Shifts L* by `amount`, clamped to [0, 100].
    pub fn adjust_lightness(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Linear interpolation of all four components; ratio clamps to [0, 1].
    pub fn mix(self, other: Lab, ratio: f64) -> Self {
        let t = ratio.clamp(0.0, 1.0);
        Self {
            l: self.l * (1.0 - t) + other.l * t,
            a: self.a * (1.0 - t) + other.a * t,
            b: self.b * (1.0 - t) + other.b * t,
            alpha: self.alpha * (1.0 - t) + other.alpha * t,
        }
    }
}
