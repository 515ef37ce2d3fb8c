//! In-memory blob store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::store::BlobStore;
use visagevault_common::{BlobId, Error, Result};
use visagevault_vault::SealedBlob;

/// In-memory blob store.
///
/// Useful for testing and development. All blobs are held in memory and
/// lost on drop.
pub struct MemoryStore {
    blobs: Arc<RwLock<HashMap<BlobId, SealedBlob>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(&self, id: &BlobId, blob: SealedBlob) -> Result<()> {
        self.blobs.write().unwrap().insert(id.clone(), blob);
        Ok(())
    }

    async fn get(&self, id: &BlobId) -> Result<SealedBlob> {
        self.blobs
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no sealed blob '{id}'")))
    }

    async fn exists(&self, id: &BlobId) -> Result<bool> {
        Ok(self.blobs.read().unwrap().contains_key(id))
    }

    async fn delete(&self, id: &BlobId) -> Result<()> {
        self.blobs
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("no sealed blob '{id}'")))
    }

    async fn list(&self) -> Result<Vec<BlobId>> {
        Ok(self.blobs.read().unwrap().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(bytes: &[u8]) -> SealedBlob {
        SealedBlob::from_bytes(bytes.to_vec())
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = MemoryStore::new();
        let id = BlobId::new("img1").unwrap();

        store.put(&id, blob(b"sealed bytes")).await.unwrap();
        let loaded = store.get(&id).await.unwrap();

        assert_eq!(loaded.as_bytes(), b"sealed bytes");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        let id = BlobId::new("absent").unwrap();

        assert!(matches!(
            store.get(&id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let store = MemoryStore::new();
        let id = BlobId::new("img1").unwrap();

        store.put(&id, blob(b"first")).await.unwrap();
        store.put(&id, blob(b"second")).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap().as_bytes(), b"second");
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let store = MemoryStore::new();
        let id = BlobId::new("img1").unwrap();

        assert!(!store.exists(&id).await.unwrap());
        store.put(&id, blob(b"data")).await.unwrap();
        assert!(store.exists(&id).await.unwrap());

        store.delete(&id).await.unwrap();
        assert!(!store.exists(&id).await.unwrap());
        assert!(matches!(store.delete(&id).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list() {
        let store = MemoryStore::new();
        store
            .put(&BlobId::new("a").unwrap(), blob(b"1"))
            .await
            .unwrap();
        store
            .put(&BlobId::new("b").unwrap(), blob(b"2"))
            .await
            .unwrap();

        let mut ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect();
        ids.sort();

        assert_eq!(ids, vec!["a", "b"]);
    }
}
