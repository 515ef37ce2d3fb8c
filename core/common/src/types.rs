//! Common types used throughout VisageVault.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied identifier for a sealed blob.
///
/// The core never decides storage locations or file names; every persisted
/// blob is addressed by an explicit identifier chosen by the caller. The
/// identifier must be usable verbatim as a file name component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobId(String);

impl BlobId {
    /// Create a new BlobId from a string.
    ///
    /// # Preconditions
    /// - `id` must be non-empty
    /// - `id` must not contain path separators
    /// - `id` must not be `.` or `..`
    ///
    /// # Errors
    /// - Returns error if id violates any of the above
    pub fn new(id: impl Into<String>) -> crate::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(crate::Error::InvalidInput(
                "BlobId cannot be empty".to_string(),
            ));
        }
        if id.contains('/') || id.contains('\\') {
            return Err(crate::Error::InvalidInput(
                "BlobId cannot contain path separators".to_string(),
            ));
        }
        if id == "." || id == ".." {
            return Err(crate::Error::InvalidInput(
                "BlobId cannot be a relative path component".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_id_creation() {
        let id = BlobId::new("subject-1").unwrap();
        assert_eq!(id.as_str(), "subject-1");
    }

    #[test]
    fn test_blob_id_empty_fails() {
        assert!(BlobId::new("").is_err());
    }

    #[test]
    fn test_blob_id_separators_fail() {
        assert!(BlobId::new("a/b").is_err());
        assert!(BlobId::new("a\\b").is_err());
    }

    #[test]
    fn test_blob_id_dot_components_fail() {
        assert!(BlobId::new(".").is_err());
        assert!(BlobId::new("..").is_err());
    }

    #[test]
    fn test_blob_id_display() {
        let id = BlobId::new("img1").unwrap();
        assert_eq!(id.to_string(), "img1");
    }
}
