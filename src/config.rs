//! Configuration constants and theme presets for the palette engine.

use crate::error::{PaletteError, Result};

/// Floating-point comparison epsilon.
pub const EPS: f32 = 0.0001;

/// Hue offset for the complementary color, in degrees.
pub const COMPLEMENTARY_DEG: f32 = 180.0;

/// Hue offset for analogous neighbors, in degrees.
pub const ANALOGOUS_DEG: f32 = 30.0;

/// Hue spacing for the triadic pair, in degrees.
pub const TRIADIC_DEG: f32 = 120.0;

/// Interpolation factor for monotonal shades (midpoint mix in LAB).
pub const SHADE_MIX_T: f32 = 0.5;

/// Saturation delta applied to the quiet/loud variants.
pub const SATURATION_STEP: f32 = 0.3;

/// Default contrast cutoff for readable-text selection (WCAG AA body text).
pub const DEFAULT_CONTRAST_THRESHOLD: f32 = 4.5;

/// Stricter contrast cutoff used by the white-base site preview.
pub const STRICT_CONTRAST_THRESHOLD: f32 = 7.5;

/// Default base color when none is supplied (dodger blue).
pub const DEFAULT_BASE_HEX: &str = "#1E90FF";

/// A named theme preset with a fixed base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    /// Lookup key (lowercase).
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Base color as a hex string.
    pub base_hex: &'static str,
}

/// Fixed preset table offered alongside the free-form color picker.
pub const THEME_PRESETS: &[ThemePreset] = &[
    ThemePreset {
        name: "ocean",
        label: "Ocean Blue",
        base_hex: "#1E90FF",
    },
    ThemePreset {
        name: "forest",
        label: "Forest Green",
        base_hex: "#228B22",
    },
    ThemePreset {
        name: "sunset",
        label: "Sunset Coral",
        base_hex: "#FF7F50",
    },
    ThemePreset {
        name: "royal",
        label: "Royal Purple",
        base_hex: "#6A5ACD",
    },
    ThemePreset {
        name: "rose",
        label: "Rose Pink",
        base_hex: "#FF69B4",
    },
    ThemePreset {
        name: "crimson",
        label: "Crimson",
        base_hex: "#DC143C",
    },
];

/// Look up a theme preset by name (case-insensitive).
pub fn find_theme(name: &str) -> Result<&'static ThemePreset> {
    let needle = name.trim().to_lowercase();
    THEME_PRESETS
        .iter()
        .find(|preset| preset.name == needle)
        .ok_or(PaletteError::UnknownTheme {
            name: name.to_string(),
        })
}

/// Utility functions for hue angle operations.
pub mod angle {
    /// Normalize an angle into [0, 360).
    #[inline]
    pub fn normalize_degrees(angle: f32) -> f32 {
        let mut a = angle % 360.0;
        if a < 0.0 {
            a += 360.0;
        }
        // Handle 360.0 and -0.0 cases
        if a >= 360.0 || a == 0.0 {
            a = 0.0;
        }
        a
    }

    /// Smallest absolute difference between two hue angles, in degrees.
    #[inline]
    pub fn distance_degrees(a: f32, b: f32) -> f32 {
        let d = (normalize_degrees(a) - normalize_degrees(b)).abs();
        if d > 180.0 {
            360.0 - d
        } else {
            d
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(angle::normalize_degrees(0.0), 0.0);
        assert_eq!(angle::normalize_degrees(360.0), 0.0);
        assert_eq!(angle::normalize_degrees(-30.0), 330.0);
        assert_eq!(angle::normalize_degrees(390.0), 30.0);
        assert_eq!(angle::normalize_degrees(-360.0), 0.0);
        assert_eq!(angle::normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_hue_distance() {
        assert_eq!(angle::distance_degrees(10.0, 350.0), 20.0);
        assert_eq!(angle::distance_degrees(0.0, 180.0), 180.0);
        assert_eq!(angle::distance_degrees(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_find_theme() {
        let preset = find_theme("ocean").unwrap();
        assert_eq!(preset.base_hex, "#1E90FF");

        let preset = find_theme("  Forest ").unwrap();
        assert_eq!(preset.base_hex, "#228B22");

        assert!(find_theme("neon").is_err());
    }
}
