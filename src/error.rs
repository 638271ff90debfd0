//! Error types for palette generation.

use thiserror::Error;

/// Main error type for the palette engine.
///
/// Malformed input is rejected at the boundary (hex parsing, theme lookup);
/// the generator and classifier operate on already-valid colors and are total.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Empty color input")]
    EmptyInput,

    #[error("Invalid hex color '{value}': expected 6 hex digits (#RRGGBB)")]
    InvalidHexLength { value: String },

    #[error("Invalid hex color '{value}': '{digits}' is not a hex byte")]
    InvalidHexDigit { value: String, digits: String },

    #[error("Unknown theme preset: '{name}'")]
    UnknownTheme { name: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
