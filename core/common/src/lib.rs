//! Shared error and identifier types for VisageVault.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::BlobId;
