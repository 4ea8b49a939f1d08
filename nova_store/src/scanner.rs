//! Scan flow: recognize a token, then record it in the collection.

use nova_core::{Catalog, CollectedCard, KeyValueStorage, RecognitionError, ScanEvent, ScanMethod};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::collection::{CollectionError, CollectionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Collected {
        record: CollectedCard,
        method: ScanMethod,
        /// True on the first ever scan of this card.
        is_new: bool,
    },
    NotRecognized(RecognitionError),
}

/// Couples the catalog with a collection store.
///
/// Scans through one `Scanner` are serialized, so a second scan starts only
/// after the first one has been written.
pub struct Scanner<S, C = SystemClock> {
    catalog: Arc<Catalog>,
    store: CollectionStore<S, C>,
    in_flight: Mutex<()>,
}

impl<S: KeyValueStorage, C: Clock> Scanner<S, C> {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, store: CollectionStore<S, C>) -> Self {
        Self {
            catalog,
            store,
            in_flight: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &CollectionStore<S, C> {
        &self.store
    }

    /// Handle one scan event.
    ///
    /// An unrecognized token is returned as `ScanOutcome::NotRecognized` and
    /// leaves the collection untouched. Only storage problems are errors.
    pub async fn scan(&self, event: &ScanEvent) -> Result<ScanOutcome, CollectionError> {
        debug!("Scanning {} token {}", event.method(), event.token());
        let recognition = match self.catalog.recognize(event) {
            Ok(recognition) => recognition,
            Err(error) => {
                info!("Scan not recognized: {}", error);
                return Ok(ScanOutcome::NotRecognized(error));
            }
        };

        let _guard = self.in_flight.lock().await;
        let record = self.store.upsert(recognition.card).await?;
        let is_new = record.scan_count == 1;

        Ok(ScanOutcome::Collected {
            record,
            method: recognition.method,
            is_new,
        })
    }
}
