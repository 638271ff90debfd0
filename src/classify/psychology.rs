//! Hue-bucket psychology descriptions.
//!
//! Eight half-open buckets partition [0, 360): left-inclusive,
//! right-exclusive, so a hue of exactly 20.0 belongs to the orange bucket,
//! not the red one. Hue 360 never occurs because hues are normalized into
//! [0, 360) before lookup.

use crate::model::Color;

/// A primary/secondary prose pair describing the psychological impact of a
/// hue range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsychologyDescription {
    pub primary_impact: &'static str,
    pub secondary_impact: &'static str,
}

/// Ordered bucket table: (inclusive start, exclusive end, description).
pub const HUE_BUCKETS: &[(f32, f32, PsychologyDescription)] = &[
    (
        0.0,
        20.0,
        PsychologyDescription {
            primary_impact: "Reds can convey intensity, passion, and energy. They draw strong \
                attention, often used for bold branding or urgent calls to action. Red can \
                stimulate appetite, making it popular in food-related branding.",
            secondary_impact: "Secondarily, red may also evoke impulsiveness or aggression if \
                overused, so balance is key. Subtle usage can reinforce a sense of power, \
                strength, or urgency.",
        },
    ),
    (
        20.0,
        50.0,
        PsychologyDescription {
            primary_impact: "Oranges and deeper warm yellows radiate enthusiasm, optimism, and \
                creativity. They can add fun or adventure to a brand and encourage feelings of \
                confidence.",
            secondary_impact: "Additionally, these hues can cultivate a sense of friendliness \
                and approachability, but too much saturation may appear unprofessional or \
                overwhelming.",
        },
    ),
    (
        50.0,
        70.0,
        PsychologyDescription {
            primary_impact: "Bright yellows signify cheerfulness, friendliness, and clarity. \
                They catch the eye quickly and spark positivity, but can become fatiguing if \
                overused.",
            secondary_impact: "On another level, yellows can also symbolize caution (think of \
                safety signs). When toned down, they bring warmth and accessibility to a \
                design.",
        },
    ),
    (
        70.0,
        170.0,
        PsychologyDescription {
            primary_impact: "Greens symbolize growth, balance, and nature. They create a sense \
                of tranquility or environmental awareness, frequently used in health, \
                eco-friendly, or outdoor-related brands.",
            secondary_impact: "They can also suggest wealth or stability (especially deeper \
                greens), tying them well to financial services. Overly bright greens can become \
                neon and less 'natural'.",
        },
    ),
    (
        170.0,
        250.0,
        PsychologyDescription {
            primary_impact: "Blues carry associations with trust, stability, and calmness. \
                They're a top choice for businesses seeking a reliable and secure image, \
                particularly in technology and finance.",
            secondary_impact: "Light blues evoke tranquility or freedom (like a clear sky), \
                while dark blues can appear authoritative or professional. Overusing dark blues \
                may feel conservative or cold.",
        },
    ),
    (
        250.0,
        290.0,
        PsychologyDescription {
            primary_impact: "Purples blend the calmness of blue with the energy of red, often \
                seen as luxurious, creative, or spiritual. They're popular for brands wanting \
                elegance or imagination.",
            secondary_impact: "Lighter lavenders lean toward delicate, romantic feelings, \
                whereas very dark purples may suggest opulence or mystery. Too much purple can \
                seem childish or overly eccentric.",
        },
    ),
    (
        290.0,
        330.0,
        PsychologyDescription {
            primary_impact: "Pinks and magentas can represent romance, youthfulness, or edgy \
                flair. They're often used in fashion, beauty, or playful brands seeking a \
                vibrant, energetic vibe.",
            secondary_impact: "Hot pink especially grabs attention and fosters a sense of \
                excitement or fun, but can become overwhelming. Softer pinks imply tenderness \
                or compassion.",
        },
    ),
    (
        330.0,
        360.0,
        PsychologyDescription {
            primary_impact: "Deep reds and crimsons can symbolize power, passion, and \
                refinement. They can be used for a dramatic effect or to impart a bold, \
                luxurious statement.",
            secondary_impact: "They can also lean toward romance or emotional intensity. Be \
                mindful of cultural associations with red, which may vary widely around the \
                globe.",
        },
    ),
];

/// Describe a color's psychological impact by its hue bucket.
///
/// Total over valid colors: the buckets cover [0, 360) exhaustively and
/// saturation/lightness do not affect the lookup.
pub fn describe_by_hue(color: Color) -> &'static PsychologyDescription {
    describe_hue(color.hue())
}

/// Bucket lookup for a raw hue angle in degrees. Angles outside [0, 360) are
/// normalized first.
pub fn describe_hue(hue_deg: f32) -> &'static PsychologyDescription {
    let hue = crate::config::angle::normalize_degrees(hue_deg);
    for (start, end, desc) in HUE_BUCKETS {
        if hue >= *start && hue < *end {
            return desc;
        }
    }
    // Unreachable for normalized hues; the crimson bucket closes the wheel.
    &HUE_BUCKETS[HUE_BUCKETS.len() - 1].2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_index(hue: f32) -> usize {
        HUE_BUCKETS
            .iter()
            .position(|(start, end, _)| hue >= *start && hue < *end)
            .unwrap()
    }

    #[test]
    fn test_buckets_partition_the_wheel() {
        // Contiguous, ordered, covering [0, 360)
        assert_eq!(HUE_BUCKETS.first().unwrap().0, 0.0);
        assert_eq!(HUE_BUCKETS.last().unwrap().1, 360.0);
        for pair in HUE_BUCKETS.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_every_hue_maps_to_exactly_one_bucket() {
        for step in 0..3600 {
            let hue = step as f32 / 10.0;
            let matches = HUE_BUCKETS
                .iter()
                .filter(|(start, end, _)| hue >= *start && hue < *end)
                .count();
            assert_eq!(matches, 1, "hue {hue} matched {matches} buckets");
        }
    }

    #[test]
    fn test_boundaries_belong_to_upper_bucket() {
        assert_eq!(bucket_index(20.0), 1);
        assert_eq!(bucket_index(50.0), 2);
        assert_eq!(bucket_index(70.0), 3);
        assert_eq!(bucket_index(170.0), 4);
        assert_eq!(bucket_index(250.0), 5);
        assert_eq!(bucket_index(290.0), 6);
        assert_eq!(bucket_index(330.0), 7);
    }

    #[test]
    fn test_dodger_blue_is_in_the_blues_bucket() {
        let color = Color::from_hex("#1E90FF").unwrap();
        let desc = describe_by_hue(color);
        assert!(desc.primary_impact.starts_with("Blues"));
    }

    #[test]
    fn test_lookup_ignores_saturation_and_lightness() {
        let vivid = Color::from_hex("#FF0000").unwrap();
        let muted = vivid.with_saturation(0.2);
        assert_eq!(describe_by_hue(vivid), describe_by_hue(muted));
    }
}
