//! Immutable color value with hex and HSL conversions.
//!
//! Wraps `palette::Srgb<f32>` so the rest of the crate can speak in hue
//! degrees, saturation/lightness fractions and hex strings without caring
//! about the underlying color-space plumbing. Every transformation returns a
//! new value.

use palette::{Clamp, FromColor, Hsl, Lab, Mix, Srgb};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::config::angle;
use crate::error::{PaletteError, Result};

/// An immutable sRGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Srgb<f32>);

impl Color {
    /// Create a color from sRGB components in [0, 1].
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Pure white.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Pure black.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PaletteError::EmptyInput);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PaletteError::InvalidHexLength {
                value: trimmed.to_string(),
            });
        }

        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let pair = &digits[i * 2..i * 2 + 2];
            *channel =
                u8::from_str_radix(pair, 16).map_err(|_| PaletteError::InvalidHexDigit {
                    value: trimmed.to_string(),
                    digits: pair.to_string(),
                })?;
        }

        let [r, g, b] = channels;
        Ok(Self(Srgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        )))
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.rgb_u8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Get the 8-bit RGB components.
    pub fn rgb_u8(self) -> (u8, u8, u8) {
        let quantized: Srgb<u8> = self.0.into_format();
        (quantized.red, quantized.green, quantized.blue)
    }

    /// Hue angle in [0, 360). Achromatic colors report 0.
    pub fn hue(self) -> f32 {
        let hsl = Hsl::from_color(self.0);
        angle::normalize_degrees(hsl.hue.into_positive_degrees())
    }

    /// HSL saturation in [0, 1].
    pub fn saturation(self) -> f32 {
        Hsl::from_color(self.0).saturation
    }

    /// HSL lightness in [0, 1].
    pub fn lightness(self) -> f32 {
        Hsl::from_color(self.0).lightness
    }

    /// New color with the given hue (degrees), keeping saturation and
    /// lightness.
    pub fn with_hue(self, hue_deg: f32) -> Self {
        let hsl = Hsl::from_color(self.0);
        let shifted = Hsl::new(angle::normalize_degrees(hue_deg), hsl.saturation, hsl.lightness);
        Self(Srgb::from_color(shifted))
    }

    /// New color with the given saturation, clamped into [0, 1], keeping hue
    /// and lightness.
    pub fn with_saturation(self, saturation: f32) -> Self {
        let hsl = Hsl::from_color(self.0);
        let adjusted = Hsl::new(hsl.hue, saturation.clamp(0.0, 1.0), hsl.lightness);
        Self(Srgb::from_color(adjusted))
    }

    /// Rotate the hue by `degrees` around the color wheel. Negative rotations
    /// wrap into [0, 360).
    pub fn rotate_hue(self, degrees: f32) -> Self {
        self.with_hue(self.hue() + degrees)
    }

    /// Interpolate toward `other` in CIE LAB space and convert back to sRGB,
    /// clamped into gamut. `t` = 0 yields `self`, `t` = 1 yields `other`.
    pub fn mix_lab(self, other: Self, t: f32) -> Self {
        let a = Lab::from_color(self.0);
        let b = Lab::from_color(other.0);
        let mixed = a.mix(b, t);
        Self(Srgb::from_color(mixed).clamp())
    }

    /// sRGB components as linear-light values (gamma expanded).
    pub fn linear_rgb(self) -> (f32, f32, f32) {
        let linear = self.0.into_linear();
        (linear.red, linear.green, linear.blue)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(de::Error::custom)
    }
}
