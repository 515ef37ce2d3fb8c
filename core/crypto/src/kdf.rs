//! Key derivation using Argon2id.
//!
//! Argon2id is a memory-hard password hashing function that provides
//! resistance to both GPU and time-memory trade-off attacks. The cost
//! constants below are fixed: the sealed blob layout records no derivation
//! parameters, so every blob ever written must be openable with the same
//! settings.

use argon2::{Algorithm, Argon2, Params, Version};

use crate::keys::{DerivedKey, Salt, KEY_LENGTH};
use visagevault_common::{Error, Result};

/// Memory cost in KiB (19 MiB, the OWASP interactive baseline).
pub const KDF_MEMORY_KIB: u32 = 19_456;

/// Number of passes over memory.
pub const KDF_ITERATIONS: u32 = 2;

/// Degree of parallelism.
pub const KDF_PARALLELISM: u32 = 1;

/// Derive a symmetric key from a password and salt using Argon2id.
///
/// # Postconditions
/// - Returns a 256-bit key, deterministic for equal (password, salt)
/// - The key zeroizes on drop
///
/// # Security
/// - The password is not stored or logged
/// - An empty password is permitted: rejecting it is caller policy, and
///   whether a password is correct is only ever learned from tag
///   verification downstream
pub fn derive_key(password: &str, salt: &Salt) -> Result<DerivedKey> {
    let params = Params::new(
        KDF_MEMORY_KIB,
        KDF_ITERATIONS,
        KDF_PARALLELISM,
        Some(KEY_LENGTH),
    )
    .map_err(|e| Error::Crypto(format!("Invalid KDF parameters: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key_bytes = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut key_bytes)
        .map_err(|e| Error::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::SALT_LENGTH;

    #[test]
    fn test_derive_key_deterministic() {
        let salt = Salt::from_bytes([42u8; SALT_LENGTH]);

        let key1 = derive_key("test-password-123", &salt).unwrap();
        let key2 = derive_key("test-password-123", &salt).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_salt() {
        let salt1 = Salt::from_bytes([1u8; SALT_LENGTH]);
        let salt2 = Salt::from_bytes([2u8; SALT_LENGTH]);

        let key1 = derive_key("test-password-123", &salt1).unwrap();
        let key2 = derive_key("test-password-123", &salt2).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_password() {
        let salt = Salt::from_bytes([42u8; SALT_LENGTH]);

        let key1 = derive_key("password1", &salt).unwrap();
        let key2 = derive_key("password2", &salt).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_empty_password_permitted() {
        let salt = Salt::from_bytes([7u8; SALT_LENGTH]);

        let key = derive_key("", &salt).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
    }
}
