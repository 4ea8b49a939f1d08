use async_trait::async_trait;
use nova_core::{KeyValueStorage, StorageError};
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage that keeps each key in its own file under a data directory.
///
/// Writes land in a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the data directory if needed and return the storage.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let storage = Self::new(root);
        tokio::fs::create_dir_all(&storage.root)
            .await
            .map_err(|source| StorageError::Io {
                key: storage.root.display().to_string(),
                source,
            })?;
        info!("File storage opened at {}", storage.root.display());
        Ok(storage)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No file for key {} at {}", key, path.display());
                Ok(None)
            }
            Err(source) => Err(io_error(key, source)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| io_error(key, source))?;

        let path = self.path_for(key);
        let tmp = self.root.join(format!(".{}.tmp", sanitize_key(key)));
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|source| io_error(key, source))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| io_error(key, source))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(io_error(key, source)),
        }
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

/// Map a storage key onto a safe file name.
///
/// `[A-Za-z0-9_-]` pass through and every other byte becomes `%XX`, so
/// distinct keys never share a file. The empty key maps to a lone `%`.
fn sanitize_key(key: &str) -> String {
    if key.is_empty() {
        return "%".to_string();
    }
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}
