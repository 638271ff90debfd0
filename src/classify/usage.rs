//! Per-role usage advice.

use crate::model::Role;

/// Sentinel returned for labels that do not name a role.
pub const NO_USAGE_DATA: &str = "No usage data found.";

/// Fixed advisory sentence for a palette role.
pub fn usage_advice(role: Role) -> &'static str {
    match role {
        Role::Primary => {
            "Primary color: The main brand identifier - used for your logo, key headers, and \
             any element reflecting the core brand character."
        }
        Role::Complementary => {
            "Complementary color: Opposite on the wheel. Use for accent elements or \
             calls-to-action that need to pop."
        }
        Role::Analogous1 => {
            "Analogous color (first): Neighbor to the primary hue, ensuring cohesive, \
             harmonious design. Great for backgrounds or subtle highlights."
        }
        Role::Analogous2 => {
            "Analogous color (second): Another neighbor to maintain brand unity. Works well \
             for sidebars or alternate sections."
        }
        Role::Triadic1 => {
            "Triadic color #1: Part of a vibrant trio spaced evenly around the wheel. Inject \
             energy in headings or promotional labels."
        }
        Role::Triadic2 => {
            "Triadic color #2: Another hue in the triad. Great for interactive elements, hover \
             states, or secondary CTAs."
        }
        Role::LightShade => {
            "Light shade: A softer tint of your main hue. Useful for large background areas \
             or high readability."
        }
        Role::DarkShade => {
            "Dark shade: A deeper tone for strong contrast. Perfect for footers, header bars, \
             or bold text overlays."
        }
        Role::LoudVariant => {
            "Loud variant: A fully saturated hue. Use sparingly for urgent notices or a \
             prominent 'Buy Now' button."
        }
    }
}

/// Usage advice looked up by display label. Unrecognized labels return the
/// [`NO_USAGE_DATA`] sentinel so rendering stays total.
pub fn usage_advice_for_label(label: &str) -> &'static str {
    match Role::from_label(label) {
        Some(role) => usage_advice(role),
        None => NO_USAGE_DATA,
    }
}
