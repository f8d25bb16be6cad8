//! JSON line-delimited logs for palette operations.
//!
//! The conversion core is pure and never logs; binaries and demos call
//! these helpers around palette work when they want an audit trail. Each
//! entry is a single JSON object appended to `logs/palette.jsonl`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::palette::PaletteStatistics;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// One palette operation: what ran, when, and the shape of its output.
#[derive(Debug, Serialize)]
pub struct PaletteLogEntry {
    pub operation: String,
    pub timestamp_ms: u128,
    pub input_count: usize,
    pub output_count: usize,
    pub mean_rgb: [f64; 3],
}

/// Appends a palette operation record to `logs/palette.jsonl`.
pub fn log_palette_operation(
    operation: &str,
    input_count: usize,
    output_stats: &PaletteStatistics,
) -> io::Result<()> {
    log_dir()?;
    let entry = PaletteLogEntry {
        operation: operation.to_string(),
        timestamp_ms: timestamp_ms(),
        input_count,
        output_count: output_stats.count,
        mean_rgb: output_stats.mean_rgb,
    };
    append_json_line("logs/palette.jsonl", &entry)
}
