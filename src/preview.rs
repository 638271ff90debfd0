//! Mock-site preview scheme.
//!
//! Maps palette slots to the section backgrounds of a sample landing page
//! (nav, hero, features, testimonial, CTA, footer) and picks a readable text
//! color for each. This is the data half of a site preview; actual rendering
//! belongs to a UI layer.

use serde::{Deserialize, Serialize};

use crate::contrast::text_color_for;
use crate::model::{Color, Palette};

/// A background/text color pair for one page section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionColors {
    pub background: Color,
    pub text: Color,
}

impl SectionColors {
    fn over(background: Color, threshold: f32) -> Self {
        Self {
            background,
            text: text_color_for(background, threshold),
        }
    }
}

/// Colors for every section of the sample page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewScheme {
    pub nav: SectionColors,
    pub hero: SectionColors,
    pub features: SectionColors,
    pub testimonial: SectionColors,
    pub cta: SectionColors,
    pub footer: SectionColors,
    pub hero_button: SectionColors,
}

impl PreviewScheme {
    /// Build the scheme from a palette.
    ///
    /// With `use_white_base` the page keeps mostly white backgrounds and uses
    /// the dark shade for the nav and footer; otherwise the palette slots
    /// color the sections directly. `threshold` is the contrast cutoff passed
    /// to [`text_color_for`].
    pub fn new(palette: &Palette, use_white_base: bool, threshold: f32) -> Self {
        let white = Color::white();
        let off_white = Color::new(253.0 / 255.0, 253.0 / 255.0, 253.0 / 255.0);

        let nav_bg = if use_white_base {
            palette.monotonal.dark
        } else {
            palette.primary
        };
        let hero_bg = if use_white_base {
            white
        } else {
            palette.monotonal.light
        };
        let features_bg = if use_white_base {
            white
        } else {
            palette.analogous[0]
        };
        let testimonial_bg = if use_white_base {
            off_white
        } else {
            palette.triadic[0]
        };
        let cta_bg = palette.variants.loud;
        let footer_bg = if use_white_base {
            palette.monotonal.dark
        } else {
            palette.complementary
        };
        let hero_button_bg = if use_white_base {
            palette.primary
        } else {
            palette.monotonal.dark
        };

        Self {
            nav: SectionColors::over(nav_bg, threshold),
            hero: SectionColors::over(hero_bg, threshold),
            features: SectionColors::over(features_bg, threshold),
            testimonial: SectionColors::over(testimonial_bg, threshold),
            cta: SectionColors::over(cta_bg, threshold),
            footer: SectionColors::over(footer_bg, threshold),
            hero_button: SectionColors::over(hero_button_bg, threshold),
        }
    }
}
