//! Swatch roles and the role/color pairing shown in the display grid.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// The nine palette roles, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Primary,
    Complementary,
    Analogous1,
    Analogous2,
    Triadic1,
    Triadic2,
    LightShade,
    DarkShade,
    LoudVariant,
}

impl Role {
    /// All roles in canonical order. Positional identity matters: the wheel
    /// diagram and grid layout index into this order.
    pub const ALL: [Role; 9] = [
        Role::Primary,
        Role::Complementary,
        Role::Analogous1,
        Role::Analogous2,
        Role::Triadic1,
        Role::Triadic2,
        Role::LightShade,
        Role::DarkShade,
        Role::LoudVariant,
    ];

    /// Human-readable label, e.g. "Analogous 1".
    pub fn label(self) -> &'static str {
        match self {
            Role::Primary => "Primary",
            Role::Complementary => "Complementary",
            Role::Analogous1 => "Analogous 1",
            Role::Analogous2 => "Analogous 2",
            Role::Triadic1 => "Triadic 1",
            Role::Triadic2 => "Triadic 2",
            Role::LightShade => "Light Shade",
            Role::DarkShade => "Dark Shade",
            Role::LoudVariant => "Loud Variant",
        }
    }

    /// Kebab-case name for CSS custom properties, e.g. "light-shade".
    pub fn kebab(self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }

    /// Resolve a display label back to a role. Unknown labels yield `None`
    /// so presentation lookups can stay total.
    pub fn from_label(label: &str) -> Option<Self> {
        Role::ALL.iter().copied().find(|r| r.label() == label)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A role/color pair, built fresh from a palette on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub role: Role,
    pub color: Color,
}

impl Swatch {
    pub fn new(role: Role, color: Color) -> Self {
        Self { role, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_names() {
        assert_eq!(Role::Primary.kebab(), "primary");
        assert_eq!(Role::LightShade.kebab(), "light-shade");
        assert_eq!(Role::Analogous1.kebab(), "analogous-1");
    }

    #[test]
    fn test_label_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_label(role.label()), Some(role));
        }
        assert_eq!(Role::from_label("Quiet Variant"), None);
    }
}
