//! End-to-end walkthrough: parse a few colors, build a palette, check
//! accessibility and print a harmony scheme.
//!
//! Run with: cargo run --example demo

use huelab_core::{
    best_contrast_color, check_accessibility, contrast_ratio, extract_dominant_colors,
    generate_harmony, logging, parse_rgb, remove_duplicates, HarmonyScheme, HuelabConfig, Lab,
    PaletteStatistics, Rgb,
};

fn main() {
    let config = HuelabConfig::default();

    let swatches: Vec<Rgb> = [
        "#1e78c8", "#1e78c9", "#e63946", "#f1faee", "#2a9d8f", "#264653", "#ffb703",
    ]
    .iter()
    .map(|s| parse_rgb(s).expect("demo swatches are valid hex"))
    .collect();

    println!("loaded {} swatches", swatches.len());

    let unique = remove_duplicates(&swatches, config.palette.dedup_threshold);
    let dominant = extract_dominant_colors(&unique, config.palette.dominant_count);
    println!("deduplicated to {}, dominant set of {}", unique.len(), dominant.len());

    let stats = PaletteStatistics::compute(&dominant);
    if let Err(err) = logging::log_palette_operation("demo_dominant", swatches.len(), &stats) {
        eprintln!("failed to log palette operation: {err}");
    }

    for &color in &dominant {
        let text = best_contrast_color(color);
        let ratio = contrast_ratio(text, color);
        let level = check_accessibility(text, color, false);
        println!(
            "{}  text {}  contrast {:.2}  level {:?}",
            color.to_hex(),
            text.to_hex(),
            ratio,
            level
        );
    }

    let base = dominant[0];
    let harmony = generate_harmony(base, HarmonyScheme::Triadic);
    println!("triadic harmony for {}:", base.to_hex());
    for &color in &harmony {
        let lab = Lab::from_rgb(color);
        println!("  {}  L*={:.1} a*={:.1} b*={:.1}", color.to_hex(), lab.l, lab.a, lab.b);
    }
}
