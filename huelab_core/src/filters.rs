//! Appearance filters: color-vision simulation, temperature estimation,
//! grayscale variants and toning.

use std::str::FromStr;

use crate::rgb::Rgb;
use crate::space::hsl::Hsl;

/// Color vision deficiency types. The dichromatic forms use fixed channel
/// mixing matrices; the anomalous forms blend the dichromatic simulation
/// 50/50 with the original color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBlindness {
    /// Red blind.
    Protanopia,
    /// Green blind.
    Deuteranopia,
    /// Blue blind.
    Tritanopia,
    /// Red weak.
    Protanomaly,
    /// Green weak.
    Deuteranomaly,
    /// Blue weak.
    Tritanomaly,
}

impl FromStr for ColorBlindness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protanopia" => Ok(ColorBlindness::Protanopia),
            "deuteranopia" => Ok(ColorBlindness::Deuteranopia),
            "tritanopia" => Ok(ColorBlindness::Tritanopia),
            "protanomaly" => Ok(ColorBlindness::Protanomaly),
            "deuteranomaly" => Ok(ColorBlindness::Deuteranomaly),
            "tritanomaly" => Ok(ColorBlindness::Tritanomaly),
            other => Err(format!("unknown color blindness type '{}'", other)),
        }
    }
}

/// Simulates how a color appears under the given deficiency.
pub fn simulate_color_blindness(color: Rgb, kind: ColorBlindness) -> Rgb {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let (nr, ng, nb) = match kind {
        ColorBlindness::Protanopia => (
            0.567 * r + 0.433 * g,
            0.558 * r + 0.442 * g,
            0.242 * g + 0.758 * b,
        ),
        ColorBlindness::Deuteranopia => (
            0.625 * r + 0.375 * g,
            0.7 * r + 0.3 * g,
            0.3 * g + 0.7 * b,
        ),
        ColorBlindness::Tritanopia => (
            0.95 * r + 0.05 * g,
            0.433 * g + 0.567 * b,
            0.475 * g + 0.525 * b,
        ),
        ColorBlindness::Protanomaly => {
            return simulate_color_blindness(color, ColorBlindness::Protanopia).mix(color, 0.5);
        }
        ColorBlindness::Deuteranomaly => {
            return simulate_color_blindness(color, ColorBlindness::Deuteranopia).mix(color, 0.5);
        }
        ColorBlindness::Tritanomaly => {
            return simulate_color_blindness(color, ColorBlindness::Tritanopia).mix(color, 0.5);
        }
    };

    Rgb::rgba(
        ((nr * 255.0) as i32).clamp(0, 255) as u8,
        ((ng * 255.0) as i32).clamp(0, 255) as u8,
        ((nb * 255.0) as i32).clamp(0, 255) as u8,
        color.a,
    )
}

/// Correlated color temperature estimate in Kelvin via chromaticity and
/// McCamy's approximation. Black falls back to daylight (6500 K).
pub fn color_temperature(color: Rgb) -> f64 {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
    let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
    let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

    let total = x + y + z;
    if total == 0.0 {
        return 6500.0;
    }

    let cx = x / total;
    let cy = y / total;

    let n = (cx - 0.3320) / (0.1858 - cy);
    449.0 * n * n * n + 3525.0 * n * n + 6823.3 * n + 5520.33
}

/// Whether the color reads as warm (below daylight temperature).
pub fn is_warm_color(color: Rgb) -> bool {
    color_temperature(color) < 5000.0
}

/// Approximate blackbody color for a temperature in Kelvin, clamped to
/// [1000, 40000].
pub fn temperature_to_rgb(kelvin: f64) -> Rgb {
    let temp = kelvin.clamp(1000.0, 40000.0) / 100.0;

    let red = if temp <= 66.0 {
        255.0
    } else {
        (329.698_727_446 * (temp - 60.0).powf(-0.133_204_759_2)).clamp(0.0, 255.0)
    };

    let green = if temp <= 66.0 {
        (99.470_802_586_1 * temp.ln() - 161.119_568_166_1).clamp(0.0, 255.0)
    } else {
        (288.122_169_528_3 * (temp - 60.0).powf(-0.075_514_849_2)).clamp(0.0, 255.0)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        (138.517_731_223_1 * (temp - 10.0).ln() - 305.044_792_730_7).clamp(0.0, 255.0)
    };

    Rgb::new(red as u8, green as u8, blue as u8)
}

/// Grayscale by plain channel average.
pub fn grayscale_average(color: Rgb) -> Rgb {
    let gray = ((color.r as u16 + color.g as u16 + color.b as u16) / 3) as u8;
    Rgb::rgba(gray, gray, gray, color.a)
}

/// Grayscale by perceived luminance (same weights as
/// [`Rgb::to_grayscale`]).
pub fn grayscale_luminance(color: Rgb) -> Rgb {
    color.to_grayscale()
}

/// Grayscale by the HSL lightness definition (max+min)/2.
pub fn grayscale_lightness(color: Rgb) -> Rgb {
    let max = color.r.max(color.g).max(color.b) as u16;
    let min = color.r.min(color.g).min(color.b) as u16;
    let gray = ((max + min) / 2) as u8;
    Rgb::rgba(gray, gray, gray, color.a)
}

/// Grayscale by zeroing HSL saturation while keeping hue and lightness.
pub fn grayscale_desaturate(color: Rgb) -> Rgb {
    let hsl = Hsl::from_rgb(color);
    Hsl::new(hsl.hue_degrees(), 0.0, hsl.lightness()).to_rgb()
}

/// Classic sepia toning matrix, clamped per channel.
pub fn sepia(color: Rgb) -> Rgb {
    let r = color.r as f64;
    let g = color.g as f64;
    let b = color.b as f64;

    Rgb::rgba(
        (r * 0.393 + g * 0.769 + b * 0.189).clamp(0.0, 255.0) as u8,
        (r * 0.349 + g * 0.686 + b * 0.168).clamp(0.0, 255.0) as u8,
        (r * 0.272 + g * 0.534 + b * 0.131).clamp(0.0, 255.0) as u8,
        color.a,
    )
}
