//! Blob store port - durable key-value persistence.
//!
//! The store holds two independent slots, one for the serialized article
//! collection and one for the serialized site settings. It treats payloads
//! as opaque strings; structural validation and default fallback are the
//! content repository's concern.

use async_trait::async_trait;

/// The two persistence slots this engine uses.
///
/// Callers never touch raw storage keys; the slot enum is the only address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSlot {
    /// The ordered article collection.
    Articles,
    /// The singleton site settings record.
    Settings,
}

impl StoreSlot {
    /// Storage key for this slot. Kept stable so data written by earlier
    /// releases stays readable.
    pub fn key(&self) -> &'static str {
        match self {
            StoreSlot::Articles => "artontok_posts",
            StoreSlot::Settings => "artontok_settings",
        }
    }
}

/// Errors from blob store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for durable slot persistence.
///
/// `read` yields `Ok(None)` for an absent slot; it never invents an error
/// for missing data. Each slot is written independently, with no batching
/// across slots.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the raw blob stored in a slot, if any.
    async fn read(&self, slot: StoreSlot) -> Result<Option<String>, StoreError>;

    /// Write a blob to a slot, replacing any previous value.
    async fn write(&self, slot: StoreSlot, blob: &str) -> Result<(), StoreError>;
}
