//! Key material and the random values stored alongside it.
//!
//! The derived key zeroizes its memory on drop to prevent sensitive data
//! from persisting in memory. Salts and nonces are not secret; they are
//! written next to the ciphertext they belong to.

use rand::{rngs::OsRng, RngCore};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use visagevault_common::Error;

/// Length of encryption keys in bytes (256-bit).
pub const KEY_LENGTH: usize = 32;

/// Length of key-derivation salts in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of AEAD nonces in bytes.
pub const NONCE_LENGTH: usize = 12;

/// Symmetric key derived from a password and salt.
///
/// Exists only for the duration of a single encrypt or decrypt call and is
/// never persisted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Create a derived key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED])")
    }
}

/// Salt for key derivation. Fresh per encryption, stored with the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt([u8; SALT_LENGTH]);

impl Salt {
    /// Generate a random salt.
    pub fn generate() -> Self {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);
        Self(salt)
    }

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SALT_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LENGTH] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Salt {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; SALT_LENGTH] = bytes.try_into().map_err(|_| {
            Error::MalformedInput(format!(
                "expected {SALT_LENGTH}-byte salt, got {} bytes",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

/// AEAD nonce. Fresh per encryption, stored with the ciphertext.
///
/// Never reused under the same key: every encryption pairs a fresh nonce
/// with a key derived from a fresh salt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_LENGTH]);

impl Nonce {
    /// Generate a random nonce.
    pub fn generate() -> Self {
        let mut nonce = [0u8; NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce);
        Self(nonce)
    }

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; NONCE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_LENGTH] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; NONCE_LENGTH] = bytes.try_into().map_err(|_| {
            Error::MalformedInput(format!(
                "expected {NONCE_LENGTH}-byte nonce, got {} bytes",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}
