//! # Huelab Core
//!
//! A deterministic color-science engine: canonical color representations
//! with bounded-error bidirectional conversions, arithmetic and blending,
//! perceptual distance metrics, and hue-based harmony generation for
//! palettes and accessibility checks.
//!
//! ## Quick Start
//!
//! ```rust
//! use huelab_core::{contrast_ratio, generate_harmony, HarmonyScheme, Lab, Rgb};
//!
//! let brand = Rgb::new(30, 60, 120);
//!
//! // Perceptual distance between two candidates.
//! let delta = Lab::from_rgb(brand).delta_e(Lab::from_rgb(Rgb::new(36, 66, 130)));
//! assert!(delta < 10.0);
//!
//! // Accessibility of white text on the brand color.
//! assert!(contrast_ratio(Rgb::WHITE, brand) > 3.0);
//!
//! // A triadic palette built on the brand hue.
//! let palette = generate_harmony(brand, HarmonyScheme::Triadic);
//! assert_eq!(palette.len(), 3);
//! ```
//!
//! ## Core Modules
//!
//! - [`tables`] - Write-once lookup tables behind the nonlinear transforms
//! - [`rgb`] / [`gray`] - 8-bit device color and single-channel gray
//! - [`space`] - HSL, HSV, XYZ, LAB, LCH and Oklab value types
//! - [`metrics`] - Distance, similarity and WCAG accessibility checks
//! - [`palette`] - Nearest-match, quantization, dedup, dominant extraction
//! - [`harmony`] - Deterministic harmony-scheme generators
//! - [`filters`] - Vision simulation, temperature and toning filters
//! - [`parse`] - Hex and CSS textual front end
//! - [`config`] - Threshold configuration via TOML
//! - [`logging`] - JSON line-delimited operation logs

pub mod config;
pub mod filters;
pub mod gray;
pub mod harmony;
pub mod logging;
pub mod metrics;
pub mod palette;
pub mod parse;
pub mod rgb;
pub mod space;
pub mod tables;

pub use config::{ConfigError, HarmonyConfig, HuelabConfig, PaletteConfig, SimilarityConfig};
pub use filters::{
    color_temperature, grayscale_average, grayscale_desaturate, grayscale_lightness,
    grayscale_luminance, is_warm_color, sepia, simulate_color_blindness, temperature_to_rgb,
    ColorBlindness,
};
pub use gray::Gray;
pub use harmony::{
    generate_golden_ratio, generate_harmony, generate_monochromatic,
    generate_split_complementary, HarmonyScheme, GOLDEN_ANGLE,
};
pub use metrics::{
    best_contrast_color, brightness_difference, check_accessibility, color_distance,
    colors_similar, colors_similar_with, contrast_ratio, hue_difference, lightness_difference,
    rgb_distance, saturation_difference, AccessibilityLevel,
};
pub use palette::{
    extract_dominant_colors, find_closest_color, quantize_to_palette, remove_duplicates,
    sort_by_brightness, sort_by_hue, sort_by_saturation, PaletteStatistics,
};
pub use parse::{parse_hsl, parse_rgb, ParseError, ParseResult};
pub use rgb::Rgb;
pub use space::{Hsl, Hsv, Lab, Lch, Oklab, Xyz};
pub use tables::Tables;
