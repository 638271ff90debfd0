//! Integration tests for the palette pipeline.
//!
//! These exercise the full path a UI would take: parse a hex color, generate
//! the palette, assemble swatches, classify hues, and render exports. They
//! check structural and numeric properties rather than byte-exact color
//! values, to accommodate floating-point rounding in the color conversions.

use color_theory_rs::{
    classify, config, contrast, export_palette, find_theme, format_swatches, generate_palette,
    usage_advice_for_label, Color, ExportFormat, PreviewScheme, Role, Swatch,
};
use pretty_assertions::assert_eq;

fn hue_distance(a: f32, b: f32) -> f32 {
    config::angle::distance_degrees(a, b)
}

// ==================== Generation ====================

#[test]
fn generation_is_deterministic() {
    let base = Color::from_hex("#8A2BE2").unwrap();
    let first = generate_palette(base);
    let second = generate_palette(base);
    assert_eq!(first, second);

    let css_a = format_swatches(&first.swatches(), ExportFormat::Css).unwrap();
    let css_b = format_swatches(&second.swatches(), ExportFormat::Css).unwrap();
    assert_eq!(css_a, css_b);
}

#[test]
fn hue_rotation_round_trip() {
    let base = Color::from_hex("#1E90FF").unwrap();
    for degrees in [30.0_f32, -30.0, 120.0, 240.0, 180.0, 540.0, -390.0] {
        let rotated = base.rotate_hue(degrees);
        let expected = config::angle::normalize_degrees(base.hue() + degrees);
        assert!(
            hue_distance(rotated.hue(), expected) < 0.1,
            "rotation by {degrees} gave hue {} instead of {expected}",
            rotated.hue()
        );
    }
}

#[test]
fn complementary_is_involutive() {
    for hex in ["#1E90FF", "#FF0000", "#228B22", "#FF69B4"] {
        let base = Color::from_hex(hex).unwrap();
        let back = base.rotate_hue(180.0).rotate_hue(180.0);
        assert!(hue_distance(back.hue(), base.hue()) < 0.05);
        assert!((back.saturation() - base.saturation()).abs() < 0.001);
        assert!((back.lightness() - base.lightness()).abs() < 0.001);
    }
}

#[test]
fn triadic_hues_are_evenly_spaced() {
    let base = Color::from_hex("#FF7F50").unwrap();
    let palette = generate_palette(base);
    let h0 = base.hue();
    let h1 = palette.triadic[0].hue();
    let h2 = palette.triadic[1].hue();
    assert!((hue_distance(h0, h1) - 120.0).abs() < 0.1);
    assert!((hue_distance(h1, h2) - 120.0).abs() < 0.1);
    assert!((hue_distance(h0, h2) - 120.0).abs() < 0.1);
}

#[test]
fn saturation_variants_clamp_at_bounds() {
    // Already fully saturated
    let vivid = generate_palette(Color::from_hex("#00FF00").unwrap());
    assert!(vivid.variants.loud.saturation() <= 1.0);

    // Nearly desaturated
    let washed = generate_palette(Color::from_hex("#7F8284").unwrap());
    assert!(washed.variants.quiet.saturation() >= 0.0);
}

#[test]
fn dodger_blue_reference_palette() {
    let base = Color::from_hex("#1E90FF").unwrap();
    assert!((base.hue() - 209.6).abs() < 0.5);

    let palette = generate_palette(base);
    assert!((palette.complementary.hue() - 29.6).abs() < 0.5);
    assert_eq!(palette.primary.to_hex(), "#1E90FF");

    let desc = classify::describe_by_hue(base);
    assert!(desc.primary_impact.starts_with("Blues"));
}

// ==================== Swatch assembly ====================

#[test]
fn swatches_are_nine_in_fixed_order() {
    let palette = generate_palette(Color::from_hex("#6A5ACD").unwrap());
    let swatches = palette.swatches();
    assert_eq!(swatches.len(), 9);

    let labels: Vec<&str> = swatches.iter().map(|s| s.role.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Primary",
            "Complementary",
            "Analogous 1",
            "Analogous 2",
            "Triadic 1",
            "Triadic 2",
            "Light Shade",
            "Dark Shade",
            "Loud Variant",
        ]
    );
}

// ==================== Classification ====================

#[test]
fn every_hue_has_exactly_one_description() {
    for degree in 0..360 {
        let hue = degree as f32;
        let matches = classify::HUE_BUCKETS
            .iter()
            .filter(|(start, end, _)| hue >= *start && hue < *end)
            .count();
        assert_eq!(matches, 1, "hue {hue}");
    }
}

#[test]
fn boundary_hues_classify_into_upper_bucket() {
    // Each boundary hue must get the description of the bucket it opens
    let cases = [
        (20.0, "Oranges"),
        (50.0, "Bright yellows"),
        (70.0, "Greens"),
        (170.0, "Blues"),
        (250.0, "Purples"),
        (290.0, "Pinks"),
        (330.0, "Deep reds"),
    ];
    for (hue, prefix) in cases {
        let desc = classify::describe_hue(hue);
        assert!(
            desc.primary_impact.starts_with(prefix),
            "hue {hue} should start with '{prefix}', got: {}",
            &desc.primary_impact[..40]
        );
    }
}

#[test]
fn unknown_role_label_gets_sentinel() {
    assert_eq!(usage_advice_for_label("Chartreuse"), classify::NO_USAGE_DATA);
    assert_eq!(usage_advice_for_label("Primary "), classify::NO_USAGE_DATA);
}

// ==================== Exports ====================

#[test]
fn css_export_matches_reference() {
    let swatches = vec![
        Swatch::new(Role::Primary, Color::from_hex("#1E90FF").unwrap()),
        Swatch::new(Role::LightShade, Color::from_hex("#FFFFFF").unwrap()),
    ];
    let out = format_swatches(&swatches, ExportFormat::Css).unwrap();
    assert_eq!(out, "--primary: #1E90FF;\n--light-shade: #FFFFFF;");
}

#[test]
fn full_pipeline_exports() {
    let css = export_palette("#1E90FF", ExportFormat::Css).unwrap();
    assert_eq!(css.lines().count(), 9);

    let hexes = export_palette("#1E90FF", ExportFormat::HexList).unwrap();
    assert_eq!(hexes.split(", ").count(), 9);
    assert!(hexes.starts_with("#1E90FF, "));

    let verbose = export_palette("#1E90FF", ExportFormat::Verbose).unwrap();
    assert!(verbose.contains("Primary: #1E90FF"));
    assert!(verbose.contains("RGB: rgb(30, 144, 255)"));
    assert!(verbose.contains("HSL: hsl(210, 100%, 56%)"));

    let json = export_palette("#1E90FF", ExportFormat::Json).unwrap();
    let parsed: Vec<Swatch> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 9);
    assert_eq!(parsed[0].role, Role::Primary);
}

#[test]
fn malformed_input_is_rejected_at_the_boundary() {
    for input in ["", "#12345", "#12345G", "red", "#1E90FF7F"] {
        assert!(
            export_palette(input, ExportFormat::Css).is_err(),
            "'{input}' should be rejected"
        );
    }
}

// ==================== Contrast & preview ====================

#[test]
fn contrast_extremes() {
    assert!((contrast::contrast_ratio(Color::black(), Color::white()) - 21.0).abs() < 0.01);
    assert!((contrast::contrast_ratio(Color::white(), Color::white()) - 1.0).abs() < 0.001);
}

#[test]
fn preview_scheme_tracks_white_base_toggle() {
    let palette = generate_palette(Color::from_hex("#1E90FF").unwrap());

    let tinted = PreviewScheme::new(&palette, false, config::DEFAULT_CONTRAST_THRESHOLD);
    assert_eq!(tinted.nav.background, palette.primary);
    assert_eq!(tinted.footer.background, palette.complementary);

    let white = PreviewScheme::new(&palette, true, config::STRICT_CONTRAST_THRESHOLD);
    assert_eq!(white.nav.background, palette.monotonal.dark);
    assert_eq!(white.hero.background, Color::white());
    assert_eq!(white.hero.text, Color::black());
}

// ==================== Themes ====================

#[test]
fn theme_presets_resolve_to_valid_palettes() {
    for preset in config::THEME_PRESETS {
        let base = Color::from_hex(preset.base_hex).unwrap();
        let palette = generate_palette(base);
        assert_eq!(palette.swatches().len(), 9);
    }
}

#[test]
fn theme_lookup_is_case_insensitive_and_total() {
    assert_eq!(find_theme("OCEAN").unwrap().base_hex, "#1E90FF");
    assert!(find_theme("midnight").is_err());
}
