//! Threshold and angle configuration via TOML files.
//!
//! Every tunable the palette and harmony layers consume has a calibrated
//! default; a TOML file can override any subset. Values are validated on
//! load: non-finite or negative thresholds and zero counts are rejected
//! rather than silently repaired.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Library configuration with `[similarity]`, `[palette]` and `[harmony]`
/// sections.
///
/// # Examples
///
/// ```
/// use huelab_core::HuelabConfig;
///
/// let config = HuelabConfig::from_toml_str("[palette]\ndedup_threshold = 8.0").unwrap();
/// assert_eq!(config.palette.dedup_threshold, 8.0);
/// assert_eq!(config.similarity.rgb_threshold, 30.0);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct HuelabConfig {
    pub similarity: SimilarityConfig,
    pub palette: PaletteConfig,
    pub harmony: HarmonyConfig,
}

impl HuelabConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;

        Ok(Self {
            similarity: SimilarityConfig::try_from_raw(&raw.similarity)?,
            palette: PaletteConfig::try_from_raw(&raw.palette)?,
            harmony: HarmonyConfig::try_from_raw(&raw.harmony)?,
        })
    }
}

/// Thresholds for [`colors_similar_with`](crate::colors_similar_with); all
/// three criteria must pass.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityConfig {
    /// Maximum Euclidean RGB distance.
    pub rgb_threshold: f64,
    /// Maximum luminance difference on the 0-255 scale.
    pub brightness_threshold: f64,
    /// Maximum hue difference in degrees.
    pub hue_threshold: f64,
}

impl SimilarityConfig {
    fn try_from_raw(raw: &RawSimilarity) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("similarity.rgb_threshold", raw.rgb_threshold),
            ("similarity.brightness_threshold", raw.brightness_threshold),
            ("similarity.hue_threshold", raw.hue_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Parse(format!(
                    "{} must be a non-negative finite number",
                    name
                )));
            }
        }

        Ok(Self {
            rgb_threshold: raw.rgb_threshold,
            brightness_threshold: raw.brightness_threshold,
            hue_threshold: raw.hue_threshold,
        })
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            rgb_threshold: 30.0,
            brightness_threshold: 20.0,
            hue_threshold: 15.0,
        }
    }
}

/// Palette algorithm tunables.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteConfig {
    /// Distance below which two palette entries collapse in dedup.
    pub dedup_threshold: f64,
    /// Default size of an extracted dominant palette.
    pub dominant_count: usize,
}

impl PaletteConfig {
    fn try_from_raw(raw: &RawPalette) -> Result<Self, ConfigError> {
        if !raw.dedup_threshold.is_finite() || raw.dedup_threshold < 0.0 {
            return Err(ConfigError::Parse(
                "palette.dedup_threshold must be a non-negative finite number".into(),
            ));
        }
        if raw.dominant_count == 0 {
            return Err(ConfigError::Parse(
                "palette.dominant_count must be at least 1".into(),
            ));
        }

        Ok(Self {
            dedup_threshold: raw.dedup_threshold,
            dominant_count: raw.dominant_count,
        })
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            dedup_threshold: 5.0,
            dominant_count: 5,
        }
    }
}

/// Harmony generator tunables.
#[derive(Debug, Clone, Serialize)]
pub struct HarmonyConfig {
    /// Spread of the analogous scheme, degrees.
    pub analogous_angle: f64,
    /// Spread of the split-complementary scheme, degrees.
    pub split_angle: f64,
    /// Ladder length of the monochromatic scheme.
    pub monochromatic_count: usize,
    /// Palette size of the golden-ratio scheme.
    pub golden_count: usize,
}

impl HarmonyConfig {
    fn try_from_raw(raw: &RawHarmony) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("harmony.analogous_angle", raw.analogous_angle),
            ("harmony.split_angle", raw.split_angle),
        ] {
            if !value.is_finite() || value < 0.0 || value > 180.0 {
                return Err(ConfigError::Parse(format!(
                    "{} must be a finite angle in [0, 180]",
                    name
                )));
            }
        }
        if raw.monochromatic_count == 0 || raw.golden_count == 0 {
            return Err(ConfigError::Parse(
                "harmony counts must be at least 1".into(),
            ));
        }

        Ok(Self {
            analogous_angle: raw.analogous_angle,
            split_angle: raw.split_angle,
            monochromatic_count: raw.monochromatic_count,
            golden_count: raw.golden_count,
        })
    }
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            analogous_angle: 30.0,
            split_angle: 30.0,
            monochromatic_count: 5,
            golden_count: 5,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    similarity: RawSimilarity,
    #[serde(default)]
    palette: RawPalette,
    #[serde(default)]
    harmony: RawHarmony,
}

#[derive(Debug, Deserialize)]
struct RawSimilarity {
    #[serde(default = "default_rgb_threshold")]
    rgb_threshold: f64,
    #[serde(default = "default_brightness_threshold")]
    brightness_threshold: f64,
    #[serde(default = "default_hue_threshold")]
    hue_threshold: f64,
}

impl Default for RawSimilarity {
    fn default() -> Self {
        Self {
            rgb_threshold: default_rgb_threshold(),
            brightness_threshold: default_brightness_threshold(),
            hue_threshold: default_hue_threshold(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPalette {
    #[serde(default = "default_dedup_threshold")]
    dedup_threshold: f64,
    #[serde(default = "default_dominant_count")]
    dominant_count: usize,
}

impl Default for RawPalette {
    fn default() -> Self {
        Self {
            dedup_threshold: default_dedup_threshold(),
            dominant_count: default_dominant_count(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawHarmony {
    #[serde(default = "default_analogous_angle")]
    analogous_angle: f64,
    #[serde(default = "default_split_angle")]
    split_angle: f64,
    #[serde(default = "default_monochromatic_count")]
    monochromatic_count: usize,
    #[serde(default = "default_golden_count")]
    golden_count: usize,
}

impl Default for RawHarmony {
    fn default() -> Self {
        Self {
            analogous_angle: default_analogous_angle(),
            split_angle: default_split_angle(),
            monochromatic_count: default_monochromatic_count(),
            golden_count: default_golden_count(),
        }
    }
}

fn default_rgb_threshold() -> f64 {
    30.0
}

fn default_brightness_threshold() -> f64 {
    20.0
}

fn default_hue_threshold() -> f64 {
    15.0
}

fn default_dedup_threshold() -> f64 {
    5.0
}

fn default_dominant_count() -> usize {
    5
}

fn default_analogous_angle() -> f64 {
    30.0
}

fn default_split_angle() -> f64 {
    30.0
}

fn default_monochromatic_count() -> usize {
    5
}

fn default_golden_count() -> usize {
    5
}

/// Errors surfaced while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_are_missing() {
        let config = HuelabConfig::from_toml_str("").unwrap();
        assert_eq!(config.similarity.rgb_threshold, 30.0);
        assert_eq!(config.similarity.brightness_threshold, 20.0);
        assert_eq!(config.similarity.hue_threshold, 15.0);
        assert_eq!(config.palette.dedup_threshold, 5.0);
        assert_eq!(config.palette.dominant_count, 5);
        assert_eq!(config.harmony.analogous_angle, 30.0);
        assert_eq!(config.harmony.monochromatic_count, 5);
    }

    #[test]
    fn custom_values_override_defaults_per_field() {
        let toml = "[similarity]\nrgb_threshold = 12.5\n\n[harmony]\nsplit_angle = 45.0\ngolden_count = 8";
        let config = HuelabConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.similarity.rgb_threshold, 12.5);
        // Untouched fields keep their defaults.
        assert_eq!(config.similarity.hue_threshold, 15.0);
        assert_eq!(config.harmony.split_angle, 45.0);
        assert_eq!(config.harmony.golden_count, 8);
        assert_eq!(config.harmony.analogous_angle, 30.0);
    }

    #[test]
    fn negative_thresholds_are_rejected() {
        let result = HuelabConfig::from_toml_str("[similarity]\nrgb_threshold = -1.0");
        assert!(result.is_err());
    }

    #[test]
    fn zero_counts_are_rejected() {
        let result = HuelabConfig::from_toml_str("[palette]\ndominant_count = 0");
        assert!(result.is_err());
        let result = HuelabConfig::from_toml_str("[harmony]\nmonochromatic_count = 0");
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_angles_are_rejected() {
        let result = HuelabConfig::from_toml_str("[harmony]\nanalogous_angle = 270.0");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = HuelabConfig::from_toml_str("[similarity\nrgb_threshold = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
