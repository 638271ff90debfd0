//! Data model: colors, palettes, swatch roles.

pub mod color;
pub mod palette;
pub mod swatch;

pub use color::Color;
pub use palette::{Monotonal, Palette, Variants};
pub use swatch::{Role, Swatch};
