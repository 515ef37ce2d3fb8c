//! Blob store trait definition.

use async_trait::async_trait;

use visagevault_common::{BlobId, Result};
use visagevault_vault::SealedBlob;

/// Storage backend for sealed blobs.
///
/// Each blob is addressed by a caller-supplied [`BlobId`]; the backend
/// never invents names or locations. Blobs are immutable units — a `put`
/// to an existing id replaces the whole blob.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Get the backend name (e.g., "local", "memory").
    fn name(&self) -> &str;

    /// Store a sealed blob under the given id, replacing any previous one.
    async fn put(&self, id: &BlobId, blob: SealedBlob) -> Result<()>;

    /// Load the sealed blob stored under the given id.
    ///
    /// # Errors
    /// - `NotFound` if no blob exists under the id
    async fn get(&self, id: &BlobId) -> Result<SealedBlob>;

    /// Check whether a blob exists under the given id.
    async fn exists(&self, id: &BlobId) -> Result<bool>;

    /// Delete the blob stored under the given id.
    ///
    /// # Errors
    /// - `NotFound` if no blob exists under the id
    async fn delete(&self, id: &BlobId) -> Result<()>;

    /// List the ids of all stored blobs, in no particular order.
    async fn list(&self) -> Result<Vec<BlobId>>;
}
