//! The user-configurable main font.

use std::fmt;

/// A font the user selected for the application's main UI surfaces.
///
/// Equality is structural: two values describe the same selection exactly
/// when both the family name and the point size match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFont {
    name: String,
    size: u32,
}

impl CustomFont {
    /// Creates a font selection from a family name and a point size.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        return CustomFont {
            name: name.into(),
            size,
        };
    }

    /// The font family name, e.g. `Agency FB`.
    pub fn name(&self) -> &str {
        return &self.name;
    }

    /// The point size, e.g. `20`.
    pub fn size(&self) -> u32 {
        return self.size;
    }
}

impl fmt::Display for CustomFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{} {}pt", self.name, self.size);
    }
}

#[cfg(test)]
#[path = "./tests/test_font.rs"]
mod test_font;
