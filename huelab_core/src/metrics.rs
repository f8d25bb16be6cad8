//! Distance, similarity and accessibility metrics over device colors.
//!
//! Two distance families are exposed side by side: [`color_distance`] is
//! the perceptual reference (CIE76 in LAB), [`rgb_distance`] the cheap
//! 8-bit Euclidean fallback. Callers choose per call site; the palette
//! algorithms document which one they use.

use serde::{Deserialize, Serialize};

use crate::config::SimilarityConfig;
use crate::rgb::Rgb;
use crate::space::hsl::Hsl;
use crate::space::lab::Lab;

/// WCAG contrast-ratio buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityLevel {
    Fail,
    /// 3:1, large text only.
    AaLarge,
    /// 4.5:1.
    AaNormal,
    /// 4.5:1, large text.
    AaaLarge,
    /// 7:1.
    AaaNormal,
}

/// WCAG relative-luminance contrast ratio in [1, 21].
///
/// # Examples
///
/// ```
/// use huelab_core::{contrast_ratio, Rgb};
///
/// assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::BLACK), 21.0);
/// assert_eq!(contrast_ratio(Rgb::RED, Rgb::RED), 1.0);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let lum_a = a.luminance() / 255.0;
    let lum_b = b.luminance() / 255.0;
    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    (lighter + 0.05) / (darker + 0.05)
}

/// Buckets a foreground/background pair into WCAG levels. The 3:1 bucket
/// only applies to large text.
pub fn check_accessibility(foreground: Rgb, background: Rgb, large_text: bool) -> AccessibilityLevel {
    let ratio = contrast_ratio(foreground, background);

    if ratio >= 7.0 {
        return AccessibilityLevel::AaaNormal;
    }
    if ratio >= 4.5 {
        return if large_text {
            AccessibilityLevel::AaaLarge
        } else {
            AccessibilityLevel::AaNormal
        };
    }
    if ratio >= 3.0 && large_text {
        return AccessibilityLevel::AaLarge;
    }
    AccessibilityLevel::Fail
}

/// Black or white, whichever contrasts more against the background.
pub fn best_contrast_color(background: Rgb) -> Rgb {
    if contrast_ratio(Rgb::WHITE, background) > contrast_ratio(Rgb::BLACK, background) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

/// Perceptual distance: CIE76 Delta E between the LAB projections.
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    Lab::from_rgb(a).delta_e(Lab::from_rgb(b))
}

/// Plain Euclidean distance in 8-bit RGB space. Cheaper and less accurate
/// than [`color_distance`].
pub fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Absolute difference of perceived luminance, 0-255 scale.
pub fn brightness_difference(a: Rgb, b: Rgb) -> f64 {
    (a.luminance() - b.luminance()).abs()
}

/// Shortest angular hue distance in degrees, always in [0, 180].
pub fn hue_difference(a: Rgb, b: Rgb) -> f64 {
    let h1 = Hsl::from_rgb(a).hue_degrees();
    let h2 = Hsl::from_rgb(b).hue_degrees();
    let diff = (h1 - h2).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Absolute HSL saturation difference as a fraction.
pub fn saturation_difference(a: Rgb, b: Rgb) -> f64 {
    (Hsl::from_rgb(a).saturation() - Hsl::from_rgb(b).saturation()).abs()
}

/// Absolute HSL lightness difference as a fraction.
pub fn lightness_difference(a: Rgb, b: Rgb) -> f64 {
    (Hsl::from_rgb(a).lightness() - Hsl::from_rgb(b).lightness()).abs()
}

/// Similarity under the default thresholds (rgb 30, brightness 20,
/// hue 15°). All three criteria must pass.
pub fn colors_similar(a: Rgb, b: Rgb) -> bool {
    colors_similar_with(a, b, &SimilarityConfig::default())
}

/// Similarity as the conjunction of three independent thresholds: RGB
/// distance, luminance difference and hue difference.
pub fn colors_similar_with(a: Rgb, b: Rgb, config: &SimilarityConfig) -> bool {
    rgb_distance(a, b) < config.rgb_threshold
        && brightness_difference(a, b) < config.brightness_threshold
        && hue_difference(a, b) < config.hue_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_on_black_is_the_maximum_ratio() {
        assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::BLACK), 21.0);
        // Symmetric: argument order never matters.
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
        assert_eq!(contrast_ratio(Rgb::new(90, 90, 90), Rgb::new(90, 90, 90)), 1.0);
    }

    #[test]
    fn accessibility_buckets_follow_wcag_thresholds() {
        assert_eq!(
            check_accessibility(Rgb::WHITE, Rgb::BLACK, false),
            AccessibilityLevel::AaaNormal
        );
        assert_eq!(
            check_accessibility(Rgb::WHITE, Rgb::WHITE, false),
            AccessibilityLevel::Fail
        );
        // This gray on black sits in the 4.5-7 band.
        let fg = Rgb::new(60, 60, 60);
        assert_eq!(
            check_accessibility(fg, Rgb::BLACK, false),
            AccessibilityLevel::AaNormal
        );
        assert_eq!(
            check_accessibility(fg, Rgb::BLACK, true),
            AccessibilityLevel::AaaLarge
        );
        // A ratio between 3 and 4.5 passes only for large text.
        let dim = Rgb::new(35, 35, 35);
        assert_eq!(
            check_accessibility(dim, Rgb::BLACK, false),
            AccessibilityLevel::Fail
        );
        assert_eq!(
            check_accessibility(dim, Rgb::BLACK, true),
            AccessibilityLevel::AaLarge
        );
    }

    #[test]
    fn best_contrast_picks_the_readable_extreme() {
        assert_eq!(best_contrast_color(Rgb::new(20, 20, 40)), Rgb::WHITE);
        assert_eq!(best_contrast_color(Rgb::new(240, 240, 200)), Rgb::BLACK);
    }

    #[test]
    fn distances_vanish_on_identity_and_are_symmetric() {
        let a = Rgb::new(12, 90, 200);
        let b = Rgb::new(200, 14, 60);
        let metrics: [fn(Rgb, Rgb) -> f64; 4] = [
            color_distance,
            rgb_distance,
            brightness_difference,
            hue_difference,
        ];
        for d in metrics {
            assert_eq!(d(a, a), 0.0);
            assert!((d(a, b) - d(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn rgb_distance_matches_euclidean_expectation() {
        assert!((rgb_distance(Rgb::BLACK, Rgb::new(3, 4, 0)) - 5.0).abs() < 1e-12);
        let corner = rgb_distance(Rgb::BLACK, Rgb::WHITE);
        assert!((corner - (3.0f64).sqrt() * 255.0).abs() < 1e-9);
    }

    #[test]
    fn hue_difference_wraps_around_the_circle() {
        // Hues 10 and 350 are 20 degrees apart, not 340.
        let a = Hsl::new(10.0, 1.0, 0.5).to_rgb();
        let b = Hsl::new(350.0, 1.0, 0.5).to_rgb();
        let diff = hue_difference(a, b);
        assert!(diff < 25.0, "wrapped distance was {}", diff);
    }

    #[test]
    fn similarity_requires_all_three_criteria() {
        let base = Rgb::new(100, 100, 100);
        assert!(colors_similar(base, Rgb::new(104, 100, 100)));
        assert!(!colors_similar(base, Rgb::new(200, 200, 200)));

        // Tight hue threshold alone can reject an otherwise close pair.
        let strict = SimilarityConfig {
            rgb_threshold: 1000.0,
            brightness_threshold: 1000.0,
            hue_threshold: 0.5,
        };
        let red = Rgb::new(200, 40, 40);
        let orange = Rgb::new(200, 90, 40);
        assert!(!colors_similar_with(red, orange, &strict));
        let loose = SimilarityConfig::default();
        assert!(!colors_similar_with(red, Rgb::new(40, 200, 40), &loose));
    }
}
