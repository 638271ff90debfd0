//! Clipboard-facing export formatters over a swatch sequence.

use std::fmt::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Swatch;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum ExportFormat {
    /// CSS custom properties, one per swatch.
    #[default]
    Css,
    /// Comma-separated hex codes.
    HexList,
    /// Per-swatch block with hex, RGB and HSL strings.
    Verbose,
    /// Pretty-printed JSON swatch list.
    Json,
}

/// Render a swatch sequence in the requested format.
pub fn format_swatches(swatches: &[Swatch], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Css => Ok(format_css(swatches)),
        ExportFormat::HexList => Ok(format_hex_list(swatches)),
        ExportFormat::Verbose => Ok(format_verbose(swatches)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(swatches)?),
    }
}

/// One `--<kebab-role>: <HEX>;` line per swatch, newline-joined.
fn format_css(swatches: &[Swatch]) -> String {
    swatches
        .iter()
        .map(|s| format!("--{}: {};", s.role.kebab(), s.color.to_hex()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hex codes in swatch order, comma-and-space joined.
fn format_hex_list(swatches: &[Swatch]) -> String {
    swatches
        .iter()
        .map(|s| s.color.to_hex())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-swatch block: role, hex, RGB triple, HSL with whole-degree hue and
/// whole-percent saturation/lightness.
fn format_verbose(swatches: &[Swatch]) -> String {
    let mut out = String::new();
    for (i, swatch) in swatches.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let (r, g, b) = swatch.color.rgb_u8();
        writeln!(out, "{}: {}", swatch.role.label(), swatch.color.to_hex()).unwrap();
        writeln!(out, "  RGB: rgb({}, {}, {})", r, g, b).unwrap();
        write!(
            out,
            "  HSL: hsl({}, {}%, {}%)",
            swatch.color.hue().round() as i32,
            (swatch.color.saturation() * 100.0).round() as i32,
            (swatch.color.lightness() * 100.0).round() as i32
        )
        .unwrap();
        out.push('\n');
    }
    out
}
