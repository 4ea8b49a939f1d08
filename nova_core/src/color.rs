//! Display colors for rarity and element badges.

use crate::card::{Element, Rarity};

/// A display color as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    /// Neutral gray used for common cards and for any unrecognized value.
    pub const NEUTRAL: Self = Self("#8e8e93");

    #[must_use]
    pub const fn hex(self) -> &'static str {
        self.0
    }

    /// Color for a rarity given by name. Unknown names fall back to `NEUTRAL`.
    #[must_use]
    pub fn for_rarity_name(name: &str) -> Self {
        name.parse::<Rarity>()
            .map_or(Self::NEUTRAL, color_for_rarity)
    }

    /// Color for an element given by name. Unknown names fall back to `NEUTRAL`.
    #[must_use]
    pub fn for_element_name(name: &str) -> Self {
        name.parse::<Element>()
            .map_or(Self::NEUTRAL, color_for_element)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[must_use]
pub const fn color_for_rarity(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::NEUTRAL,
        Rarity::Rare => Color("#007aff"),
        Rarity::Epic => Color("#af52de"),
        Rarity::Legendary => Color("#ff9500"),
    }
}

#[must_use]
pub const fn color_for_element(element: Element) -> Color {
    match element {
        Element::Fire => Color("#ff3b30"),
        Element::Water => Color("#007aff"),
        Element::Earth => Color("#34c759"),
        Element::Air => Color("#5ac8fa"),
        Element::Light => Color("#ffcc02"),
        Element::Dark => Color::NEUTRAL,
    }
}
