//! Card definitions and collected-card records.
//!
//! A `CardDefinition` is one entry of the printed catalog and never changes.
//! A `CollectedCard` is the user's copy of it: a snapshot of the definition
//! taken at first capture, plus when it was first scanned and how many times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rarity tier printed on a card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Self; 4] = [Self::Common, Self::Rare, Self::Epic, Self::Legendary];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

impl FromStr for Rarity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Common" => Ok(Self::Common),
            "Rare" => Ok(Self::Rare),
            "Epic" => Ok(Self::Epic),
            "Legendary" => Ok(Self::Legendary),
            _ => Err(anyhow::anyhow!("invalid rarity: {s}")),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elemental affinity of a card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
}

impl Element {
    pub const ALL: [Self; 6] = [
        Self::Fire,
        Self::Water,
        Self::Earth,
        Self::Air,
        Self::Light,
        Self::Dark,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl FromStr for Element {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fire" => Ok(Self::Fire),
            "Water" => Ok(Self::Water),
            "Earth" => Ok(Self::Earth),
            "Air" => Ok(Self::Air),
            "Light" => Ok(Self::Light),
            "Dark" => Ok(Self::Dark),
            _ => Err(anyhow::anyhow!("invalid element: {s}")),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static definition of a printed card.
///
/// `recognition_token` is the payload encoded in the card's QR code. It is
/// persisted as `qrCode` so stored collections stay readable by the mobile app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub element: Element,
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
    pub description: String,
    /// Asset file name of the card art.
    #[serde(default)]
    pub image: String,
    #[serde(rename = "qrCode", default, skip_serializing_if = "Option::is_none")]
    pub recognition_token: Option<String>,
}

impl CardDefinition {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
        element: Element,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
            element,
            attack: 0,
            defense: 0,
            health: 0,
            description: String::new(),
            image: String::new(),
            recognition_token: None,
        }
    }

    /// Set attack, defense and health.
    #[must_use]
    pub const fn with_stats(mut self, attack: u32, defense: u32, health: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.recognition_token = Some(token.into());
        self
    }
}

/// A card in the user's collection.
///
/// The definition fields are frozen at first capture; later catalog edits do
/// not reach records that already exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectedCard {
    #[serde(flatten)]
    pub card: CardDefinition,
    pub collected_at: DateTime<Utc>,
    pub scan_count: u32,
}

impl CollectedCard {
    /// Record the first successful scan of `card`.
    #[must_use]
    pub fn first_capture(card: &CardDefinition, at: DateTime<Utc>) -> Self {
        Self {
            card: card.clone(),
            collected_at: at,
            scan_count: 1,
        }
    }

    /// Count one more successful scan. `collected_at` is left untouched.
    pub const fn record_scan(&mut self) {
        self.scan_count = self.scan_count.saturating_add(1);
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.card.id
    }
}
