//! Blob store adapters.

mod file_blob_store;
mod in_memory_blob_store;

pub use file_blob_store::FileBlobStore;
pub use in_memory_blob_store::InMemoryBlobStore;
