//! color-theory-rs - Brand palette derivation from a single base color.
//!
//! Given a base color, this library derives a fixed-shape palette
//! (complementary, analogous, triadic, LAB shades, saturation variants),
//! classifies hues into canned psychology descriptions, attaches per-role
//! usage advice, and renders the result as CSS custom properties, hex lists,
//! verbose blocks or JSON. Everything is synchronous and pure: the same base
//! color always produces bit-identical output.
//!
//! # Example
//!
//! ```
//! use color_theory_rs::{export_palette, ExportFormat};
//!
//! let css = export_palette("#1E90FF", ExportFormat::Css).unwrap();
//! assert!(css.starts_with("--primary: #1E90FF;"));
//! ```

pub mod classify;
pub mod config;
pub mod contrast;
pub mod error;
pub mod generator;
pub mod model;
pub mod preview;

// Re-exports for convenience
pub use classify::{describe_by_hue, usage_advice, usage_advice_for_label, PsychologyDescription};
pub use config::{find_theme, ThemePreset, DEFAULT_CONTRAST_THRESHOLD};
pub use contrast::{contrast_ratio, relative_luminance, text_color_for};
pub use error::{PaletteError, Result};
pub use generator::{format_swatches, generate_palette, ExportFormat};
pub use model::{Color, Palette, Role, Swatch};
pub use preview::PreviewScheme;

/// Derive a palette from a hex string and render it in one step.
///
/// This is the main high-level function covering the full pipeline:
/// 1. Parse and validate the hex input
/// 2. Generate the palette
/// 3. Assemble the 9-swatch sequence
/// 4. Format it for export
pub fn export_palette(hex: &str, format: ExportFormat) -> Result<String> {
    let base = Color::from_hex(hex)?;
    let palette = generate_palette(base);
    tracing::debug!(base = %base, "generated palette");
    format_swatches(&palette.swatches(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_palette_pipeline() {
        let css = export_palette("#1E90FF", ExportFormat::Css).unwrap();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "--primary: #1E90FF;");
        assert!(lines[8].starts_with("--loud-variant:"));
    }

    #[test]
    fn test_export_palette_rejects_bad_hex() {
        assert!(export_palette("not-a-color", ExportFormat::Css).is_err());
    }
}
