//! File-based blob store.
//!
//! Stores each slot as one JSON file under a base directory. The slot
//! keys double as file stems, so the data directory is greppable.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{BlobStore, StoreError, StoreSlot};

/// One file per slot under `base_path`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn slot_path(&self, slot: StoreSlot) -> PathBuf {
        self.base_path.join(format!("{}.json", slot.key()))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn read(&self, slot: StoreSlot) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(Some(blob))
    }

    async fn write(&self, slot: StoreSlot, blob: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        fs::write(self.slot_path(slot), blob)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}
