//! The fixed-shape palette record derived from one base color.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::swatch::{Role, Swatch};

/// Monotonal shades of the primary color (LAB midpoints toward white/black).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monotonal {
    pub light: Color,
    pub dark: Color,
}

/// Saturation variants of the primary color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variants {
    /// Saturation reduced, floor 0.
    pub quiet: Color,
    /// Saturation increased, ceiling 1.
    pub loud: Color,
}

/// A brand palette. Every slot is a deterministic pure function of
/// `primary`; no slot is mutated independently. Replaced wholesale when the
/// base color changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub complementary: Color,
    pub analogous: [Color; 2],
    pub triadic: [Color; 2],
    pub monotonal: Monotonal,
    pub variants: Variants,
}

impl Palette {
    /// Project the palette into the fixed 9-swatch sequence:
    /// Primary, Complementary, Analogous 1/2, Triadic 1/2, Light Shade,
    /// Dark Shade, Loud Variant. Downstream consumers rely on this order.
    pub fn swatches(&self) -> [Swatch; 9] {
        [
            Swatch::new(Role::Primary, self.primary),
            Swatch::new(Role::Complementary, self.complementary),
            Swatch::new(Role::Analogous1, self.analogous[0]),
            Swatch::new(Role::Analogous2, self.analogous[1]),
            Swatch::new(Role::Triadic1, self.triadic[0]),
            Swatch::new(Role::Triadic2, self.triadic[1]),
            Swatch::new(Role::LightShade, self.monotonal.light),
            Swatch::new(Role::DarkShade, self.monotonal.dark),
            Swatch::new(Role::LoudVariant, self.variants.loud),
        ]
    }

    /// Look up the color filling a given role.
    pub fn color_for(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::Complementary => self.complementary,
            Role::Analogous1 => self.analogous[0],
            Role::Analogous2 => self.analogous[1],
            Role::Triadic1 => self.triadic[0],
            Role::Triadic2 => self.triadic[1],
            Role::LightShade => self.monotonal.light,
            Role::DarkShade => self.monotonal.dark,
            Role::LoudVariant => self.variants.loud,
        }
    }
}
