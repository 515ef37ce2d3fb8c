//! Common error types for VisageVault.

use thiserror::Error;

/// Top-level error type for VisageVault operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Vector payload could not be decoded (truncated or inconsistent header).
    #[error("Malformed vector payload: {0}")]
    MalformedPayload(String),

    /// Input too short to contain the expected fixed-size fields.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// AEAD tag verification failed: wrong password or tampered/corrupted
    /// ciphertext. The two causes are deliberately indistinguishable.
    #[error("Authentication failure: ciphertext did not verify")]
    AuthenticationFailure,

    /// Two vectors of different dimensionality were compared.
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A zero-norm vector was used where a direction is required.
    #[error("Degenerate vector: zero L2 norm")]
    DegenerateVector,

    /// Cryptographic operation failed.
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
