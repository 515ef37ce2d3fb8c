//! The sealed blob format and its seal/open operations.

use std::fmt;

use visagevault_common::{Error, Result};
use visagevault_crypto::{aead, derive_key, Nonce, Salt, NONCE_LENGTH, SALT_LENGTH};
use visagevault_embedding::{codec, FloatVector};

/// Smallest possible blob: salt and nonce with an empty ciphertext region.
/// Anything shorter cannot even be split into its fields.
pub const MIN_SEALED_LENGTH: usize = SALT_LENGTH + NONCE_LENGTH;

/// An encrypted vector together with the salt and nonce that sealed it.
///
/// Layout: `salt(16) || nonce(12) || ciphertext+tag`. Immutable once
/// produced; the unit of persistence. Salt and nonce are not secret.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedBlob(Vec<u8>);

impl SealedBlob {
    /// Wrap raw bytes read back from storage.
    ///
    /// No validation happens here; `open` rejects blobs that are too short
    /// or fail authentication.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes for persistence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the blob, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the blob is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SealedBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SealedBlob({} bytes)", self.0.len())
    }
}

/// Encrypt a vector under a password.
///
/// Draws a fresh random salt and nonce, derives the key, serializes the
/// vector, and encrypts. Because both salt and nonce are fresh per call,
/// sealing the same vector twice under the same password yields different
/// blobs, and key/nonce pairs never repeat.
pub fn seal(vector: &FloatVector, password: &str) -> Result<SealedBlob> {
    let salt = Salt::generate();
    let nonce = Nonce::generate();
    let key = derive_key(password, &salt)?;

    let payload = codec::serialize(vector);
    let ciphertext = aead::encrypt(&key, &nonce, &payload)?;

    let mut bytes = Vec::with_capacity(MIN_SEALED_LENGTH + ciphertext.len());
    bytes.extend_from_slice(salt.as_bytes());
    bytes.extend_from_slice(nonce.as_bytes());
    bytes.extend_from_slice(&ciphertext);

    Ok(SealedBlob::from_bytes(bytes))
}

/// Decrypt a sealed blob back into its vector.
///
/// # Errors
/// - `MalformedInput` if the blob is shorter than 28 bytes, or the
///   ciphertext region is shorter than the authentication tag
/// - `AuthenticationFailure` if the tag does not verify — a wrong password
///   and corrupted data are indistinguishable here by design
/// - `MalformedPayload` if the decrypted payload does not decode (cannot
///   occur for well-formed blobs, but is handled rather than assumed away)
pub fn open(blob: &SealedBlob, password: &str) -> Result<FloatVector> {
    let bytes = blob.as_bytes();
    if bytes.len() < MIN_SEALED_LENGTH {
        return Err(Error::MalformedInput(format!(
            "sealed blob too short: {} bytes, need at least {MIN_SEALED_LENGTH}",
            bytes.len()
        )));
    }

    let (salt_bytes, rest) = bytes.split_at(SALT_LENGTH);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LENGTH);

    let salt = Salt::try_from(salt_bytes)?;
    let nonce = Nonce::try_from(nonce_bytes)?;
    let key = derive_key(password, &salt)?;

    let payload = aead::decrypt(&key, &nonce, ciphertext)?;
    codec::deserialize(&payload)
}
