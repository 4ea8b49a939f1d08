//! The card catalog and token recognition.
//!
//! The catalog is validated once at construction: ids are unique and every
//! recognition token maps to exactly one card. After that it is read-only and
//! can be shared freely between tasks.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::card::{CardDefinition, Element, Rarity};
use crate::recognition::{Recognition, RecognitionError, ScanEvent, ScanMethod};

static NOVA_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(
        Catalog::new(nova_series())
            .unwrap_or_else(|err| panic!("built-in Nova catalog is invalid: {err}")),
    )
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate card id in catalog: {0}")]
    DuplicateId(String),

    #[error("recognition token {token} is used by both {first} and {second}")]
    DuplicateToken {
        token: String,
        first: String,
        second: String,
    },
}

/// Immutable set of card definitions with id and token indexes.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
    by_id: HashMap<String, usize>,
    by_token: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and duplicate tokens.
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(cards.len());
        let mut by_token = HashMap::with_capacity(cards.len());

        for (index, card) in cards.iter().enumerate() {
            if by_id.insert(card.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(card.id.clone()));
            }
            let Some(token) = &card.recognition_token else {
                continue;
            };
            if let Some(previous) = by_token.insert(token.clone(), index) {
                return Err(CatalogError::DuplicateToken {
                    token: token.clone(),
                    first: cards[previous].id.clone(),
                    second: card.id.clone(),
                });
            }
        }

        Ok(Self {
            cards,
            by_id,
            by_token,
        })
    }

    /// The shipped Nova series, built on first use.
    #[must_use]
    pub fn nova() -> Arc<Self> {
        Arc::clone(&NOVA_CATALOG)
    }

    #[must_use]
    pub fn lookup_by_id(&self, id: &str) -> Option<&CardDefinition> {
        self.by_id.get(id).map(|&index| &self.cards[index])
    }

    /// Exact-match lookup of a QR payload. No trimming or case folding.
    pub fn recognize_by_token(&self, token: &str) -> Result<&CardDefinition, RecognitionError> {
        self.by_token
            .get(token)
            .map(|&index| &self.cards[index])
            .ok_or_else(|| RecognitionError::TokenNotRecognized {
                token: token.to_string(),
                method: ScanMethod::Qr,
            })
    }

    /// Resolve a scan event: QR payloads by token, markers by card id.
    pub fn recognize(&self, event: &ScanEvent) -> Result<Recognition<'_>, RecognitionError> {
        let method = event.method();
        let card = match event {
            ScanEvent::Qr(token) => self.recognize_by_token(token)?,
            ScanEvent::Marker(id) => {
                self.lookup_by_id(id)
                    .ok_or_else(|| RecognitionError::TokenNotRecognized {
                        token: id.clone(),
                        method,
                    })?
            }
        };
        debug!("Recognized {} via {}", card.id, method);
        Ok(Recognition { card, method })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Definitions of the printed Nova cards.
#[must_use]
pub fn nova_series() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "NOVA_001",
            "Nova The Starbot - Tooth Guardian",
            Rarity::Legendary,
            Element::Light,
        )
        .with_stats(95, 90, 100)
        .with_description(
            "Pelindung gigi utama dengan kekuatan cahaya bintang yang melindungi dari semua ancaman",
        )
        .with_image("nova_starbot.png")
        .with_token("NOVA_STARBOT_001_LEGENDARY_TOOTH_GUARDIAN"),
        CardDefinition::new("NOVA_002", "Nova Fire Warrior", Rarity::Epic, Element::Fire)
            .with_stats(85, 70, 80)
            .with_description("Pejuang api yang melawan bakteri jahat")
            .with_image("nova_fire_warrior.png")
            .with_token("NOVA_FIRE_002_EPIC"),
        CardDefinition::new("NOVA_003", "Nova Aqua Healer", Rarity::Rare, Element::Water)
            .with_stats(60, 80, 90)
            .with_description("Penyembuh dengan kekuatan air yang menyegarkan")
            .with_image("nova_aqua_healer.png")
            .with_token("NOVA_AQUA_003_RARE"),
        CardDefinition::new("NOVA_004", "Nova Earth Guardian", Rarity::Epic, Element::Earth)
            .with_stats(75, 95, 85)
            .with_description("Penjaga bumi yang melindungi enamel gigi")
            .with_image("nova_earth_guardian.png")
            .with_token("NOVA_EARTH_004_EPIC"),
        CardDefinition::new("NOVA_005", "Nova Wind Scout", Rarity::Common, Element::Air)
            .with_stats(70, 60, 70)
            .with_description("Pengintai angin yang cepat dan lincah")
            .with_image("nova_wind_scout.png")
            .with_token("NOVA_WIND_005_COMMON"),
        CardDefinition::new("NOVA_006", "Nova Shadow Ninja", Rarity::Rare, Element::Dark)
            .with_stats(80, 65, 75)
            .with_description("Ninja bayangan yang menyerang dalam kegelapan")
            .with_image("nova_shadow_ninja.png")
            .with_token("NOVA_SHADOW_006_RARE"),
    ]
}
