#![deny(
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

//! Domain types for the Nova card companion.
//!
//! The catalog of printed Nova cards, the recognizer that turns a scanned
//! token into one of them, the collected-card record shape and its derived
//! statistics, and the key/value storage seam the collection store is built on.

pub mod card;
pub mod catalog;
pub mod color;
pub mod recognition;
pub mod stats;
pub mod storage;

pub use card::{CardDefinition, CollectedCard, Element, Rarity};
pub use catalog::{Catalog, CatalogError};
pub use color::{Color, color_for_element, color_for_rarity};
pub use recognition::{Recognition, RecognitionError, ScanEvent, ScanMethod};
pub use stats::CollectionStats;
pub use storage::{DEFAULT_COLLECTION_KEY, KeyValueStorage, StorageError};
