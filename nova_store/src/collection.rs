//! The collection store.
//!
//! The whole collection lives in one JSON array under a single storage key.
//! Reads parse the full array; writes replace it.

use nova_core::{
    CardDefinition, CollectedCard, CollectionStats, DEFAULT_COLLECTION_KEY, KeyValueStorage,
    StorageError,
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};

/// Why a set of records is not a valid collection.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("not a list of collected cards: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("duplicate record for card {0}")]
    DuplicateRecord(String),

    #[error("card {0} has a scan count of 0")]
    ZeroScanCount(String),
}

#[derive(Debug, Error)]
pub enum CollectionError {
    /// The stored blob could not be read back as a collection. Nothing is
    /// salvaged from it.
    #[error("collection {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: RecordError,
    },

    /// `save_all` was handed records that would corrupt the stored blob.
    /// Nothing was written.
    #[error("refusing to save collection {key}: {source}")]
    Rejected {
        key: String,
        #[source]
        source: RecordError,
    },

    #[error("collection storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CollectionError {
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Deduplicated, persisted set of collected cards.
///
/// Not safe for overlapping mutations: two `upsert` calls that are not
/// awaited in sequence can lose an update.
pub struct CollectionStore<S, C = SystemClock> {
    storage: S,
    key: String,
    clock: C,
}

impl<S: KeyValueStorage> CollectionStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_COLLECTION_KEY)
    }

    #[must_use]
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            clock: SystemClock,
        }
    }
}

impl<S: KeyValueStorage, C: Clock> CollectionStore<S, C> {
    /// Replace the clock used for `collectedAt`.
    #[must_use]
    pub fn with_clock<T: Clock>(self, clock: T) -> CollectionStore<S, T> {
        CollectionStore {
            storage: self.storage,
            key: self.key,
            clock,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the full collection in insertion order.
    ///
    /// No stored blob means an empty collection.
    pub async fn load_all(&self) -> Result<Vec<CollectedCard>, CollectionError> {
        let Some(blob) = self.storage.get(&self.key).await? else {
            debug!("No collection stored under {}, starting empty", self.key);
            return Ok(Vec::new());
        };

        let records: Vec<CollectedCard> = serde_json::from_str(&blob).map_err(|e| {
            warn!("Collection {} could not be parsed: {}", self.key, e);
            CollectionError::Corrupt {
                key: self.key.clone(),
                source: RecordError::Malformed(e),
            }
        })?;
        validate(&records).map_err(|source| {
            warn!("Collection {} is inconsistent: {}", self.key, source);
            CollectionError::Corrupt {
                key: self.key.clone(),
                source,
            }
        })?;

        Ok(records)
    }

    /// Persist `records` as the full collection.
    ///
    /// Records with repeated ids or a zero scan count are rejected before
    /// anything is written.
    pub async fn save_all(&self, records: &[CollectedCard]) -> Result<(), CollectionError> {
        validate(records).map_err(|source| CollectionError::Rejected {
            key: self.key.clone(),
            source,
        })?;
        let blob = serde_json::to_string(records).map_err(CollectionError::Encode)?;
        self.storage.set(&self.key, &blob).await?;
        debug!("Saved {} collected cards under {}", records.len(), self.key);
        Ok(())
    }

    /// Count a successful scan of `card`.
    ///
    /// The first scan creates the record with `scan_count == 1`; every later
    /// scan of the same id increments the count and keeps `collected_at`.
    pub async fn upsert(&self, card: &CardDefinition) -> Result<CollectedCard, CollectionError> {
        let mut records = self.load_all().await?;

        let record = match records.iter().position(|r| r.id() == card.id) {
            Some(index) => {
                let existing = &mut records[index];
                existing.record_scan();
                info!(
                    "Rescanned card: {} (count: {})",
                    existing.id(),
                    existing.scan_count
                );
                existing.clone()
            }
            None => {
                let record = CollectedCard::first_capture(card, self.clock.now());
                info!("Collected new card: {} ({})", record.id(), record.card.name);
                records.push(record.clone());
                record
            }
        };

        self.save_all(&records).await?;
        Ok(record)
    }

    pub async fn get(&self, id: &str) -> Result<Option<CollectedCard>, CollectionError> {
        Ok(self.load_all().await?.into_iter().find(|r| r.id() == id))
    }

    pub async fn contains(&self, id: &str) -> Result<bool, CollectionError> {
        Ok(self.load_all().await?.iter().any(|r| r.id() == id))
    }

    pub async fn compute_stats(&self) -> Result<CollectionStats, CollectionError> {
        let records = self.load_all().await?;
        Ok(CollectionStats::from_records(&records))
    }

    /// Delete the record for `id`. Absent ids are a no-op and do not write.
    pub async fn remove(&self, id: &str) -> Result<(), CollectionError> {
        let mut records = self.load_all().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            debug!("Card {} not in collection, nothing to remove", id);
            return Ok(());
        }

        self.save_all(&records).await?;
        info!("Removed card from collection: {}", id);
        Ok(())
    }

    /// Delete the entire collection.
    pub async fn clear(&self) -> Result<(), CollectionError> {
        self.storage.remove(&self.key).await?;
        info!("Cleared collection: {}", self.key);
        Ok(())
    }
}

fn validate(records: &[CollectedCard]) -> Result<(), RecordError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(RecordError::DuplicateRecord(record.id().to_string()));
        }
        if record.scan_count == 0 {
            return Err(RecordError::ZeroScanCount(record.id().to_string()));
        }
    }
    Ok(())
}
