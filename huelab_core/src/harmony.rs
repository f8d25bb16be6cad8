//! Harmony schemes: deterministic rules deriving related colors from one
//! base color.
//!
//! Every generator pivots through HSL, rotates the fixed-point hue, and
//! converts back, so repeated generation never drifts. The base color is
//! always the first element of the returned palette.

use std::fmt;
use std::str::FromStr;

use crate::rgb::Rgb;
use crate::space::hsl::Hsl;

/// Hue step of the golden-ratio scheme, in degrees.
pub const GOLDEN_ANGLE: f64 = 137.507_764_050;

/// The supported harmony rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyScheme {
    Complementary,
    Triadic,
    SplitComplementary,
    Analogous,
    Tetradic,
    Monochromatic,
    GoldenRatio,
}

impl HarmonyScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::SplitComplementary => "split_complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Tetradic => "tetradic",
            HarmonyScheme::Monochromatic => "monochromatic",
            HarmonyScheme::GoldenRatio => "golden_ratio",
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complementary" => Ok(HarmonyScheme::Complementary),
            "triadic" => Ok(HarmonyScheme::Triadic),
            "split_complementary" => Ok(HarmonyScheme::SplitComplementary),
            "analogous" => Ok(HarmonyScheme::Analogous),
            "tetradic" => Ok(HarmonyScheme::Tetradic),
            "monochromatic" => Ok(HarmonyScheme::Monochromatic),
            "golden_ratio" => Ok(HarmonyScheme::GoldenRatio),
            other => Err(format!("unknown harmony scheme '{}'", other)),
        }
    }
}

/// Generates a palette for the given scheme. The base color leads; the
/// companions follow in rotation order.
///
/// # Examples
///
/// ```
/// use huelab_core::{generate_harmony, HarmonyScheme, Rgb};
///
/// let palette = generate_harmony(Rgb::new(200, 40, 40), HarmonyScheme::Triadic);
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette[0], Rgb::new(200, 40, 40));
/// ```
pub fn generate_harmony(base: Rgb, scheme: HarmonyScheme) -> Vec<Rgb> {
    let hsl = Hsl::from_rgb(base);
    let mut colors = vec![base];

    match scheme {
        HarmonyScheme::Complementary => {
            colors.push(hsl.complement().to_rgb());
        }
        HarmonyScheme::Triadic => {
            let [_, second, third] = hsl.triadic();
            colors.push(second.to_rgb());
            colors.push(third.to_rgb());
        }
        HarmonyScheme::SplitComplementary => {
            let [_, left, right] = hsl.split_complementary(30.0);
            colors.push(left.to_rgb());
            colors.push(right.to_rgb());
        }
        HarmonyScheme::Analogous => {
            let [before, _, after] = hsl.analogous(30.0);
            colors.push(before.to_rgb());
            colors.push(after.to_rgb());
        }
        HarmonyScheme::Tetradic => {
            colors.push(hsl.adjust_hue(90.0).to_rgb());
            colors.push(hsl.adjust_hue(180.0).to_rgb());
            colors.push(hsl.adjust_hue(270.0).to_rgb());
        }
        HarmonyScheme::Monochromatic => {
            return generate_monochromatic(base, 5);
        }
        HarmonyScheme::GoldenRatio => {
            return generate_golden_ratio(base, 5);
        }
    }

    colors
}

/// Lightness ladder at fixed hue and saturation: the darker half first,
/// the base unchanged in the middle, then the lighter half. Steps are 0.1
/// of the lightness range per slot.
pub fn generate_monochromatic(base: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = Hsl::from_rgb(base);
    let mut colors = Vec::with_capacity(count);
    let middle = count / 2;

    for i in 0..count {
        if i == middle {
            colors.push(base);
        } else if i < middle {
            let steps = (middle - i) as f64;
            colors.push(hsl.darken(0.1 * steps).to_rgb());
        } else {
            let steps = (i - middle) as f64;
            colors.push(hsl.lighten(0.1 * steps).to_rgb());
        }
    }

    colors
}

/// Split-complementary with a caller-chosen spread angle.
pub fn generate_split_complementary(base: Rgb, angle: f64) -> Vec<Rgb> {
    let hsl = Hsl::from_rgb(base);
    vec![
        base,
        hsl.adjust_hue(180.0 - angle).to_rgb(),
        hsl.adjust_hue(180.0 + angle).to_rgb(),
    ]
}

/// Successive golden-angle rotations; adjacent hues never repeat because
/// the step is irrational with respect to the full turn.
pub fn generate_golden_ratio(base: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = Hsl::from_rgb(base);
    let mut colors = Vec::with_capacity(count);
    colors.push(base);

    for i in 1..count {
        colors.push(hsl.adjust_hue(GOLDEN_ANGLE * i as f64).to_rgb());
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_names_round_trip() {
        for scheme in [
            HarmonyScheme::Complementary,
            HarmonyScheme::Triadic,
            HarmonyScheme::SplitComplementary,
            HarmonyScheme::Analogous,
            HarmonyScheme::Tetradic,
            HarmonyScheme::Monochromatic,
            HarmonyScheme::GoldenRatio,
        ] {
            assert_eq!(scheme.as_str().parse::<HarmonyScheme>().unwrap(), scheme);
        }
        assert!("pastel".parse::<HarmonyScheme>().is_err());
    }

    #[test]
    fn every_scheme_leads_with_the_base_color() {
        let base = Rgb::new(180, 90, 30);
        for scheme in [
            HarmonyScheme::Complementary,
            HarmonyScheme::Triadic,
            HarmonyScheme::SplitComplementary,
            HarmonyScheme::Analogous,
            HarmonyScheme::Tetradic,
            HarmonyScheme::Monochromatic,
            HarmonyScheme::GoldenRatio,
        ] {
            let palette = generate_harmony(base, scheme);
            assert_eq!(palette[0], base, "{:?}", scheme);
            assert!(palette.len() >= 2);
        }
    }

    #[test]
    fn triadic_spreads_hues_a_third_of_a_turn() {
        let base = Rgb::new(255, 0, 0);
        let palette = generate_harmony(base, HarmonyScheme::Triadic);
        assert_eq!(palette.len(), 3);
        let hues: Vec<u16> = palette.iter().map(|&c| Hsl::from_rgb(c).h).collect();
        assert_eq!(hues[0], 0);
        assert!((hues[1] as i32 - 12000).abs() <= 100);
        assert!((hues[2] as i32 - 24000).abs() <= 100);
    }

    #[test]
    fn complementary_pair_sits_opposite() {
        let palette = generate_harmony(Rgb::new(0, 120, 255), HarmonyScheme::Complementary);
        assert_eq!(palette.len(), 2);
        let h0 = Hsl::from_rgb(palette[0]).hue_degrees();
        let h1 = Hsl::from_rgb(palette[1]).hue_degrees();
        let diff = (h0 - h1).abs();
        let wrapped = if diff > 180.0 { 360.0 - diff } else { diff };
        assert!((wrapped - 180.0).abs() < 2.0);
    }

    #[test]
    fn tetradic_has_four_colors() {
        let palette = generate_harmony(Rgb::new(10, 200, 60), HarmonyScheme::Tetradic);
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn monochromatic_keeps_the_base_in_the_middle() {
        let base = Rgb::new(60, 120, 180);
        let palette = generate_monochromatic(base, 5);
        assert_eq!(palette.len(), 5);
        assert_eq!(palette[2], base);

        // Lightness must be non-decreasing across the ladder.
        let lightness: Vec<f64> = palette
            .iter()
            .map(|&c| Hsl::from_rgb(c).lightness())
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] <= pair[1] + 0.02, "ladder went dark: {:?}", lightness);
        }
    }

    #[test]
    fn monochromatic_handles_tiny_counts() {
        let base = Rgb::new(10, 10, 200);
        assert_eq!(generate_monochromatic(base, 1), vec![base]);
        let two = generate_monochromatic(base, 2);
        assert_eq!(two.len(), 2);
        assert_eq!(two[1], base);
    }

    #[test]
    fn golden_ratio_scheme_produces_distinct_hues() {
        let palette = generate_golden_ratio(Rgb::new(255, 80, 0), 5);
        assert_eq!(palette.len(), 5);
        let mut hues: Vec<u16> = palette.iter().map(|&c| Hsl::from_rgb(c).h).collect();
        hues.sort_unstable();
        hues.dedup();
        assert_eq!(hues.len(), 5);
    }

    #[test]
    fn split_angle_is_parameterized() {
        let base = Rgb::new(255, 0, 0);
        let palette = generate_split_complementary(base, 10.0);
        let h1 = Hsl::from_rgb(palette[1]).hue_degrees();
        let h2 = Hsl::from_rgb(palette[2]).hue_degrees();
        assert!((h1 - 170.0).abs() < 2.0);
        assert!((h2 - 190.0).abs() < 2.0);
    }
}
