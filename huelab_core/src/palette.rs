//! Palette algorithms: nearest-match, quantization, dedup and dominant
//! color extraction.
//!
//! All functions are read-only over caller-supplied slices. The scans are
//! linear or quadratic with deterministic tie-breaks, so the per-item work
//! can be parallelized without changing results; [`quantize_to_palette`]
//! does exactly that with rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::metrics::{color_distance, rgb_distance};
use crate::rgb::Rgb;
use crate::space::hsl::Hsl;

/// Default [`remove_duplicates`] distance threshold.
pub const DEDUP_THRESHOLD: f64 = 5.0;

/// Default [`extract_dominant_colors`] palette size.
pub const DOMINANT_COUNT: usize = 5;

/// Nearest palette entry under perceptual ([`color_distance`]) distance.
///
/// Ties keep the first-encountered entry; an empty palette returns the
/// query unchanged rather than failing.
pub fn find_closest_color(target: Rgb, palette: &[Rgb]) -> Rgb {
    let mut best = match palette.first() {
        Some(&first) => first,
        None => return target,
    };
    let mut best_distance = color_distance(target, best);

    for &candidate in &palette[1..] {
        let distance = color_distance(target, candidate);
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }
    best
}

/// Maps every input color onto its nearest palette entry, preserving
/// order. Items are independent, so the scan runs in parallel.
pub fn quantize_to_palette(colors: &[Rgb], palette: &[Rgb]) -> Vec<Rgb> {
    colors
        .par_iter()
        .map(|&color| find_closest_color(color, palette))
        .collect()
}

/// Greedy order-preserving dedup: a color is kept iff its
/// [`rgb_distance`] to every already-kept color is at least `threshold`.
pub fn remove_duplicates(palette: &[Rgb], threshold: f64) -> Vec<Rgb> {
    let mut unique: Vec<Rgb> = Vec::new();
    for &color in palette {
        let is_duplicate = unique
            .iter()
            .any(|&kept| rgb_distance(color, kept) < threshold);
        if !is_duplicate {
            unique.push(color);
        }
    }
    unique
}

/// Greedy farthest-point (maximin) selection of up to `count`
/// representatives.
///
/// Each round picks the remaining color whose minimum distance to the
/// already-selected set is largest; the strict comparison makes the first
/// maximum win, so the result is deterministic (and the very first pick is
/// always the first input color).
pub fn extract_dominant_colors(colors: &[Rgb], count: usize) -> Vec<Rgb> {
    if colors.is_empty() {
        return Vec::new();
    }

    let mut dominant: Vec<Rgb> = Vec::with_capacity(count.min(colors.len()));
    let mut remaining: Vec<Rgb> = colors.to_vec();

    while dominant.len() < count && !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = 0.0;

        for (index, &candidate) in remaining.iter().enumerate() {
            let min_distance = dominant
                .iter()
                .map(|&selected| rgb_distance(candidate, selected))
                .fold(f64::MAX, f64::min);

            if min_distance > best_distance {
                best_distance = min_distance;
                best_index = index;
            }
        }

        dominant.push(remaining.remove(best_index));
    }

    dominant
}

/// Sorts by HSL hue angle, ascending.
pub fn sort_by_hue(colors: &mut [Rgb]) {
    colors.sort_by_key(|&c| Hsl::from_rgb(c).h);
}

/// Sorts by perceived luminance, ascending.
pub fn sort_by_brightness(colors: &mut [Rgb]) {
    colors.sort_by(|a, b| {
        a.luminance()
            .partial_cmp(&b.luminance())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Sorts by HSL saturation, ascending.
pub fn sort_by_saturation(colors: &mut [Rgb]) {
    colors.sort_by_key(|&c| Hsl::from_rgb(c).s);
}

/// Summary statistics over a palette, consumed by the logging layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteStatistics {
    pub count: usize,
    pub mean_rgb: [f64; 3],
    pub min_luminance: f64,
    pub max_luminance: f64,
}

impl PaletteStatistics {
    pub fn compute(colors: &[Rgb]) -> Self {
        if colors.is_empty() {
            return Self {
                count: 0,
                mean_rgb: [0.0; 3],
                min_luminance: 0.0,
                max_luminance: 0.0,
            };
        }

        let n = colors.len() as f64;
        let mut mean = [0.0f64; 3];
        let mut min_lum = f64::MAX;
        let mut max_lum = f64::MIN;
        for &c in colors {
            mean[0] += c.r as f64;
            mean[1] += c.g as f64;
            mean[2] += c.b as f64;
            let lum = c.luminance();
            min_lum = min_lum.min(lum);
            max_lum = max_lum.max(lum);
        }
        Self {
            count: colors.len(),
            mean_rgb: [mean[0] / n, mean[1] / n, mean[2] / n],
            min_luminance: min_lum,
            max_luminance: max_lum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_color_returns_query_on_empty_palette() {
        let query = Rgb::new(12, 34, 56);
        assert_eq!(find_closest_color(query, &[]), query);
    }

    #[test]
    fn closest_color_prefers_first_on_ties() {
        let query = Rgb::new(100, 100, 100);
        let twin = Rgb::new(90, 100, 100);
        // Identical entries tie; the scan must keep the first one it saw.
        let palette = [twin, twin, Rgb::new(0, 0, 0)];
        assert_eq!(find_closest_color(query, &palette), twin);
    }

    #[test]
    fn closest_color_is_perceptual() {
        let palette = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
        assert_eq!(
            find_closest_color(Rgb::new(250, 30, 20), &palette),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn quantization_preserves_order_and_length() {
        let palette = [Rgb::BLACK, Rgb::WHITE];
        let input = [
            Rgb::new(10, 10, 10),
            Rgb::new(250, 250, 250),
            Rgb::new(5, 5, 5),
        ];
        let out = quantize_to_palette(&input, &palette);
        assert_eq!(out, vec![Rgb::BLACK, Rgb::WHITE, Rgb::BLACK]);
        assert!(quantize_to_palette(&input, &[]).iter().eq(input.iter()));
    }

    #[test]
    fn dedup_is_greedy_and_order_preserving() {
        let palette = [
            Rgb::new(10, 10, 10),
            Rgb::new(11, 10, 10), // within default threshold of the first
            Rgb::new(100, 100, 100),
            Rgb::new(10, 10, 12), // within threshold of the first again
        ];
        let unique = remove_duplicates(&palette, DEDUP_THRESHOLD);
        assert_eq!(unique, vec![Rgb::new(10, 10, 10), Rgb::new(100, 100, 100)]);
    }

    #[test]
    fn dedup_keeps_everything_under_zero_threshold() {
        let palette = [Rgb::new(1, 1, 1), Rgb::new(1, 1, 1)];
        assert_eq!(remove_duplicates(&palette, 0.0).len(), 2);
    }

    #[test]
    fn dominant_extraction_handles_degenerate_inputs() {
        assert!(extract_dominant_colors(&[], 5).is_empty());
        let single = [Rgb::new(40, 80, 120)];
        assert_eq!(extract_dominant_colors(&single, 5), vec![single[0]]);
    }

    #[test]
    fn dominant_extraction_is_maximin() {
        let colors = [
            Rgb::new(0, 0, 0),
            Rgb::new(10, 10, 10),
            Rgb::new(255, 255, 255),
            Rgb::new(250, 250, 250),
            Rgb::new(128, 128, 128),
        ];
        let picked = extract_dominant_colors(&colors, 3);
        // First input first, then the farthest point, then the midpoint.
        assert_eq!(picked[0], Rgb::new(0, 0, 0));
        assert_eq!(picked[1], Rgb::new(255, 255, 255));
        assert_eq!(picked[2], Rgb::new(128, 128, 128));
    }

    #[test]
    fn dominant_extraction_is_deterministic() {
        let colors: Vec<Rgb> = (0..40)
            .map(|i| Rgb::new((i * 6) as u8, (255 - i * 3) as u8, (i * 5 % 200) as u8))
            .collect();
        let a = extract_dominant_colors(&colors, 6);
        let b = extract_dominant_colors(&colors, 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn sorts_order_by_the_right_key() {
        let mut colors = [Rgb::new(0, 0, 255), Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
        sort_by_hue(&mut colors);
        assert_eq!(
            colors,
            [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );

        let mut colors = [Rgb::WHITE, Rgb::BLACK, Rgb::new(128, 128, 128)];
        sort_by_brightness(&mut colors);
        assert_eq!(colors[0], Rgb::BLACK);
        assert_eq!(colors[2], Rgb::WHITE);

        let mut colors = [Rgb::new(255, 0, 0), Rgb::new(128, 100, 100)];
        sort_by_saturation(&mut colors);
        assert_eq!(colors[1], Rgb::new(255, 0, 0));
    }

    #[test]
    fn statistics_summarize_the_palette() {
        let stats = PaletteStatistics::compute(&[Rgb::BLACK, Rgb::WHITE]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean_rgb, [127.5, 127.5, 127.5]);
        assert_eq!(stats.min_luminance, 0.0);
        assert_eq!(stats.max_luminance, 255.0);

        let empty = PaletteStatistics::compute(&[]);
        assert_eq!(empty.count, 0);
    }
}
