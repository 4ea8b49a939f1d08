use async_trait::async_trait;
use thiserror::Error;

/// Key under which the collection blob is stored.
pub const DEFAULT_COLLECTION_KEY: &str = "nova_card_collection";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Get/set of serialized blobs by key.
///
/// Implementations only move strings around; they never interpret the
/// contents. A missing key is `Ok(None)`, not an error.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a key that does not exist succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
