//! HSL with fixed-point hue storage.
//!
//! Hue is stored as an integer in hundredths of a degree over [0, 36000).
//! Repeated rotations therefore never accumulate floating-point drift: the
//! double-modulo wrap keeps the stored value exact no matter how many
//! rotations are applied. Saturation, lightness and alpha are 8-bit
//! magnitudes.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

/// Hundredths of a degree in a full turn.
const HUE_SCALE: i32 = 36000;

/// HSL color with fixed-point hue.
///
/// Field order (h, s, l, alpha) is the fixed layout exposed to external
/// codecs. Hue is always normalized to [0, 36000) after construction or
/// rotation.
///
/// # Examples
///
/// ```
/// use huelab_core::{Hsl, Rgb};
///
/// let red = Hsl::from_rgb(Rgb::new(255, 0, 0));
/// assert_eq!(red.h, 0);
/// assert_eq!(red.s, 255);
///
/// let cyan = red.complement();
/// assert_eq!(cyan.hue_degrees(), 180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in hundredths of a degree, [0, 36000).
    pub h: u16,
    /// Saturation magnitude, 0-255 mapping to [0, 1].
    pub s: u8,
    /// Lightness magnitude, 0-255 mapping to [0, 1].
    pub l: u8,
    /// Alpha, 0-255.
    pub alpha: u8,
}

impl Default for Hsl {
    fn default() -> Self {
        Self {
            h: 0,
            s: 0,
            l: 0,
            alpha: 255,
        }
    }
}

impl Hsl {
    /// Builds an HSL value from floating components: hue in degrees (any
    /// value, wrapped into range), saturation and lightness in [0, 1].
    pub fn new(hue_degrees: f64, saturation: f64, lightness: f64) -> Self {
        let wrapped = hue_degrees.rem_euclid(360.0);
        Self {
            h: (wrapped * 100.0) as u16,
            s: (saturation.clamp(0.0, 1.0) * 255.0) as u8,
            l: (lightness.clamp(0.0, 1.0) * 255.0) as u8,
            alpha: 255,
        }
        .normalize()
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            h: self.h,
            s: self.s,
            l: self.l,
            alpha,
        }
    }

    /// Hue as floating degrees in [0, 360).
    pub fn hue_degrees(self) -> f64 {
        self.h as f64 / 100.0
    }

    /// Saturation as a fraction in [0, 1].
    pub fn saturation(self) -> f64 {
        self.s as f64 / 255.0
    }

    /// Lightness as a fraction in [0, 1].
    pub fn lightness(self) -> f64 {
        self.l as f64 / 255.0
    }

    /// Re-wraps the hue into [0, 36000). Idempotent; the double modulo
    /// keeps values produced by signed arithmetic correct.
    pub fn normalize(self) -> Self {
        Self {
            h: (((self.h as i32 % HUE_SCALE) + HUE_SCALE) % HUE_SCALE) as u16,
            ..self
        }
    }

    /// Standard max/min/delta derivation. Achromatic input (delta == 0)
    /// yields hue 0 and saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let lightness = (max + min) / 2.0;
        let mut out = Hsl {
            h: 0,
            s: 0,
            l: (lightness * 255.0) as u8,
            alpha: rgb.a,
        };

        if delta != 0.0 {
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            out.s = (saturation * 255.0) as u8;

            let mut hue = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            hue /= 6.0;
            hue *= 360.0;
            out.h = (hue * 100.0) as u16;
        }

        out.normalize()
    }

    /// Converts back to device RGB through the p/q interpolation bounds,
    /// sampling the hue helper at +1/3, 0 and -1/3 of a turn.
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0 {
            return Rgb::rgba(self.l, self.l, self.l, self.alpha);
        }

        let l = self.l as f64 / 255.0;
        let s = self.s as f64 / 255.0;

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = self.hue_degrees() / 360.0;

        let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
        let g = hue_to_rgb(p, q, h);
        let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

        Rgb::rgba(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            self.alpha,
        )
    }

    /// Rotates the hue by the given degrees (negative and multi-turn
    /// rotations included) without touching saturation or lightness.
    pub fn adjust_hue(self, degrees: f64) -> Self {
        let shifted = self.h as i32 + (degrees * 100.0) as i32;
        Self {
            h: (((shifted % HUE_SCALE) + HUE_SCALE) % HUE_SCALE) as u16,
            ..self
        }
    }

    /// Multiplies saturation by `factor`, clamped to the storage range.
    pub fn adjust_saturation(self, factor: f64) -> Self {
        Self {
            s: (self.s as f64 * factor).clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    /// Multiplies lightness by `factor`, clamped to the storage range.
    pub fn adjust_lightness(self, factor: f64) -> Self {
        Self {
            l: (self.l as f64 * factor).clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    /// Adds `amount` (in [0, 1] units) to saturation.
    pub fn saturate(self, amount: f64) -> Self {
        Self {
            s: (self.s as i32 + (amount * 255.0) as i32).clamp(0, 255) as u8,
            ..self
        }
    }

    /// Subtracts `amount` (in [0, 1] units) from saturation.
    pub fn desaturate(self, amount: f64) -> Self {
        Self {
            s: (self.s as i32 - (amount * 255.0) as i32).clamp(0, 255) as u8,
            ..self
        }
    }

    /// Adds `amount` (in [0, 1] units) to lightness.
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l as i32 + (amount * 255.0) as i32).clamp(0, 255) as u8,
            ..self
        }
    }

    /// Subtracts `amount` (in [0, 1] units) from lightness.
    pub fn darken(self, amount: f64) -> Self {
        Self {
            l: (self.l as i32 - (amount * 255.0) as i32).clamp(0, 255) as u8,
            ..self
        }
    }

    /// Opposite point on the hue circle.
    pub fn complement(self) -> Self {
        self.adjust_hue(180.0)
    }

    /// Self plus the two hues a third of a turn away.
    pub fn triadic(self) -> [Hsl; 3] {
        [self, self.adjust_hue(120.0), self.adjust_hue(240.0)]
    }

    /// Neighbors at ±`angle`, with self in the middle.
    pub fn analogous(self, angle: f64) -> [Hsl; 3] {
        [self.adjust_hue(-angle), self, self.adjust_hue(angle)]
    }

    /// Self plus the two hues straddling the complement at ±`angle`.
    pub fn split_complementary(self, angle: f64) -> [Hsl; 3] {
        [
            self,
            self.adjust_hue(180.0 - angle),
            self.adjust_hue(180.0 + angle),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_maps_to_canonical_components() {
        let hsl = Hsl::from_rgb(Rgb::new(255, 0, 0));
        assert_eq!(hsl.h, 0);
        assert_eq!(hsl.s, 255);
        assert!((hsl.l as i32 - 127).abs() <= 2);

        let back = hsl.to_rgb();
        assert!((back.r as i32 - 255).abs() <= 1);
        assert!(back.g <= 1);
        assert!(back.b <= 1);
    }

    #[test]
    fn achromatic_input_yields_zero_hue_and_saturation() {
        let hsl = Hsl::from_rgb(Rgb::new(93, 93, 93));
        assert_eq!(hsl.h, 0);
        assert_eq!(hsl.s, 0);
        assert_eq!(hsl.to_rgb(), Rgb::new(93, 93, 93));
    }

    #[test]
    fn primary_hues_land_on_expected_angles() {
        assert_eq!(Hsl::from_rgb(Rgb::new(0, 255, 0)).h, 12000);
        assert_eq!(Hsl::from_rgb(Rgb::new(0, 0, 255)).h, 24000);
        assert_eq!(Hsl::from_rgb(Rgb::new(255, 255, 0)).h, 6000);
    }

    #[test]
    fn hue_rotation_handles_negative_and_multi_turn() {
        let base = Hsl::new(10.0, 0.5, 0.5);
        assert_eq!(base.adjust_hue(-30.0).h, 34000);
        assert_eq!(base.adjust_hue(720.0).h, base.h);
        assert_eq!(base.adjust_hue(360.0), base);
        assert_eq!(base.adjust_hue(-3650.0).h, 32000);
    }

    #[test]
    fn normalize_is_idempotent() {
        let h = Hsl::new(359.99, 1.0, 0.5);
        assert_eq!(h.normalize(), h);
        assert!(h.h < 36000);
    }

    #[test]
    fn complement_is_self_inverse() {
        let base = Hsl::new(33.0, 0.7, 0.4);
        assert_eq!(base.complement().complement(), base);
    }

    #[test]
    fn triadic_angles_are_exact_in_fixed_point() {
        let base = Hsl::new(300.0, 0.8, 0.5);
        let [a, b, c] = base.triadic();
        assert_eq!(a.h, 30000);
        assert_eq!(b.h, 6000);
        assert_eq!(c.h, 18000);
    }

    #[test]
    fn split_complementary_straddles_the_complement() {
        let base = Hsl::new(0.0, 1.0, 0.5);
        let [_, left, right] = base.split_complementary(30.0);
        assert_eq!(left.h, 15000);
        assert_eq!(right.h, 21000);
    }

    #[test]
    fn repeated_rotation_does_not_drift() {
        let mut hsl = Hsl::new(17.0, 0.5, 0.5);
        for _ in 0..3600 {
            hsl = hsl.adjust_hue(0.1);
        }
        // 3600 rotations of 0.1 degree are exactly one full turn.
        assert_eq!(hsl.h, 1700);
    }

    #[test]
    fn lightness_and_saturation_adjustments_clamp() {
        let base = Hsl::new(100.0, 0.5, 0.5);
        assert_eq!(base.lighten(2.0).l, 255);
        assert_eq!(base.darken(2.0).l, 0);
        assert_eq!(base.saturate(2.0).s, 255);
        assert_eq!(base.desaturate(2.0).s, 0);
        assert_eq!(base.adjust_saturation(0.5).s, 63);
    }
}
