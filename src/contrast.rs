//! WCAG relative luminance and readable-text-color selection.

use crate::model::Color;

/// Relative luminance of a color, per the WCAG definition (linear-light sRGB
/// weighted by the Rec. 709 coefficients).
pub fn relative_luminance(color: Color) -> f32 {
    let (r, g, b) = color.linear_rgb();
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in [1, 21]. Symmetric.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let lum_a = relative_luminance(a) + 0.05;
    let lum_b = relative_luminance(b) + 0.05;
    if lum_a > lum_b {
        lum_a / lum_b
    } else {
        lum_b / lum_a
    }
}

/// Pick a readable text color over `background`: black when its contrast
/// against black exceeds `threshold`, white otherwise.
///
/// The threshold is caller-supplied; see
/// [`crate::config::DEFAULT_CONTRAST_THRESHOLD`] and
/// [`crate::config::STRICT_CONTRAST_THRESHOLD`].
pub fn text_color_for(background: Color, threshold: f32) -> Color {
    if contrast_ratio(background, Color::black()) > threshold {
        Color::black()
    } else {
        Color::white()
    }
}
