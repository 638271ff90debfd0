//! Palette derivation and export generation.

pub mod export;
pub mod palette;

pub use export::{format_swatches, ExportFormat};
pub use palette::generate_palette;
