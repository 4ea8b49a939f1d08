#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Durable card collection for the Nova companion.
//!
//! `CollectionStore` keeps one deduplicated record per scanned card on top of
//! any `KeyValueStorage`. Every mutation is a full read-modify-write of the
//! collection blob, so callers must await one mutation before issuing the
//! next; `Scanner` does that for the scan flow.

mod clock;
mod collection;
mod scanner;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::{CollectionError, CollectionStore, RecordError};
pub use scanner::{ScanOutcome, Scanner};
pub use storage::{FileStorage, InMemoryStorage};

pub use nova_core::{DEFAULT_COLLECTION_KEY, KeyValueStorage, StorageError};
