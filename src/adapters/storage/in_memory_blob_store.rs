//! In-memory blob store for tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{BlobStore, StoreError, StoreSlot};

/// HashMap-backed store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    slots: Mutex<HashMap<StoreSlot, String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn read(&self, slot: StoreSlot) -> Result<Option<String>, StoreError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(slots.get(&slot).cloned())
    }

    async fn write(&self, slot: StoreSlot, blob: &str) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        slots.insert(slot, blob.to_string());
        Ok(())
    }
}
