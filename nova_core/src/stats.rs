//! Aggregate statistics over a collection.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::card::{CollectedCard, Element, Rarity};

/// Summary shown above the collection grid.
///
/// Always computed from the records themselves; rarities and elements that
/// do not occur are absent from the maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_cards: usize,
    pub total_scans: u64,
    pub rarity_count: BTreeMap<Rarity, usize>,
    pub element_count: BTreeMap<Element, usize>,
}

impl CollectionStats {
    #[must_use]
    pub fn from_records(records: &[CollectedCard]) -> Self {
        let mut stats = Self {
            total_cards: records.len(),
            ..Self::default()
        };

        for record in records {
            stats.total_scans += u64::from(record.scan_count);
            *stats.rarity_count.entry(record.card.rarity).or_insert(0) += 1;
            *stats.element_count.entry(record.card.element).or_insert(0) += 1;
        }

        stats
    }

    #[must_use]
    pub fn rarity(&self, rarity: Rarity) -> usize {
        self.rarity_count.get(&rarity).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn element(&self, element: Element) -> usize {
        self.element_count.get(&element).copied().unwrap_or(0)
    }

    /// Fraction of a catalog of `catalog_len` cards that has been collected,
    /// clamped to `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion(&self, catalog_len: usize) -> f64 {
        if catalog_len == 0 {
            return 0.0;
        }
        (self.total_cards as f64 / catalog_len as f64).min(1.0)
    }
}
