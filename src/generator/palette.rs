//! Palette derivation from a single base color.

use crate::config::{ANALOGOUS_DEG, COMPLEMENTARY_DEG, SATURATION_STEP, SHADE_MIX_T, TRIADIC_DEG};
use crate::model::{Color, Monotonal, Palette, Variants};

/// Derive the full palette from a base color.
///
/// Total and pure: any valid color produces a valid palette, and equal inputs
/// produce bit-identical outputs. Hue rotations wrap modulo 360; saturation
/// deltas clamp at the [0, 1] bounds; the monotonal shades are LAB midpoints
/// toward white and black.
pub fn generate_palette(base: Color) -> Palette {
    let complementary = base.rotate_hue(COMPLEMENTARY_DEG);
    let analogous = [base.rotate_hue(ANALOGOUS_DEG), base.rotate_hue(-ANALOGOUS_DEG)];
    let triadic = [base.rotate_hue(TRIADIC_DEG), base.rotate_hue(2.0 * TRIADIC_DEG)];

    let monotonal = Monotonal {
        light: base.mix_lab(Color::white(), SHADE_MIX_T),
        dark: base.mix_lab(Color::black(), SHADE_MIX_T),
    };

    let saturation = base.saturation();
    let variants = Variants {
        quiet: base.with_saturation((saturation - SATURATION_STEP).max(0.0)),
        loud: base.with_saturation((saturation + SATURATION_STEP).min(1.0)),
    };

    Palette {
        primary: base,
        complementary,
        analogous,
        triadic,
        monotonal,
        variants,
    }
}
