//! Filesystem blob store.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::store::BlobStore;
use visagevault_common::{BlobId, Error, Result};
use visagevault_vault::SealedBlob;

/// File extension for stored blobs.
const BLOB_EXTENSION: &str = "enc";

/// Blob store backed by a local directory.
///
/// Each blob lives in its own file, `<root>/<id>.enc`. The id is used
/// verbatim as the file stem, which [`BlobId`]'s validation makes safe.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, id: &BlobId) -> PathBuf {
        self.root.join(format!("{}.{BLOB_EXTENSION}", id.as_str()))
    }
}

#[async_trait]
impl BlobStore for LocalStore {
    fn name(&self) -> &str {
        "local"
    }

    async fn put(&self, id: &BlobId, blob: SealedBlob) -> Result<()> {
        debug!(id = %id, size = blob.len(), "Storing sealed blob");

        tokio::fs::write(self.blob_path(id), blob.as_bytes()).await?;

        info!(id = %id, size = blob.len(), "Sealed blob stored");
        Ok(())
    }

    async fn get(&self, id: &BlobId) -> Result<SealedBlob> {
        debug!(id = %id, "Loading sealed blob");

        match tokio::fs::read(self.blob_path(id)).await {
            Ok(bytes) => Ok(SealedBlob::from_bytes(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::NotFound(format!("no sealed blob '{id}'")))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, id: &BlobId) -> Result<bool> {
        Ok(tokio::fs::try_exists(self.blob_path(id)).await?)
    }

    async fn delete(&self, id: &BlobId) -> Result<()> {
        match tokio::fs::remove_file(self.blob_path(id)).await {
            Ok(()) => {
                info!(id = %id, "Sealed blob deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::NotFound(format!("no sealed blob '{id}'")))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<BlobId>> {
        let mut ids = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(BLOB_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(id) = BlobId::new(stem) {
                    ids.push(id);
                }
            }
        }

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visagevault_embedding::FloatVector;
    use visagevault_vault::seal;

    fn blob(bytes: &[u8]) -> SealedBlob {
        SealedBlob::from_bytes(bytes.to_vec())
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::create(dir.path()).await.unwrap();
        let id = BlobId::new("img1").unwrap();

        store.put(&id, blob(b"sealed bytes")).await.unwrap();
        let loaded = store.get(&id).await.unwrap();

        assert_eq!(loaded.as_bytes(), b"sealed bytes");
    }

    #[tokio::test]
    async fn test_blob_file_naming() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::create(dir.path()).await.unwrap();
        let id = BlobId::new("img1").unwrap();

        store.put(&id, blob(b"data")).await.unwrap();

        assert!(dir.path().join("img1.enc").is_file());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::create(dir.path()).await.unwrap();

        let result = store.get(&BlobId::new("absent").unwrap()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::create(dir.path()).await.unwrap();
        let id = BlobId::new("img1").unwrap();

        store.put(&id, blob(b"data")).await.unwrap();
        assert!(store.exists(&id).await.unwrap());

        store.delete(&id).await.unwrap();
        assert!(!store.exists(&id).await.unwrap());
        assert!(matches!(store.delete(&id).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_ignores_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::create(dir.path()).await.unwrap();

        store
            .put(&BlobId::new("img1").unwrap(), blob(b"1"))
            .await
            .unwrap();
        store
            .put(&BlobId::new("img2").unwrap(), blob(b"2"))
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("notes.txt"), b"not a blob")
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

        assert_eq!(ids, vec!["img1", "img2"]);
    }

    #[tokio::test]
    async fn test_stores_real_sealed_blobs() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::create(dir.path()).await.unwrap();
        let id = BlobId::new("subject").unwrap();

        let vector = FloatVector::from(vec![0.6f32, 0.8]);
        let sealed = seal(&vector, "pw").unwrap();
        let sealed_bytes = sealed.as_bytes().to_vec();

        store.put(&id, sealed).await.unwrap();
        let loaded = store.get(&id).await.unwrap();

        assert_eq!(loaded.as_bytes(), sealed_bytes);
    }
}
