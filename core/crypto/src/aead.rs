//! Authenticated encryption using ChaCha20-Poly1305.
//!
//! The IETF variant with a 12-byte nonce. The nonce is an explicit
//! parameter because the sealed blob layout stores it next to the salt;
//! callers draw a fresh random nonce for every encryption.

use chacha20poly1305::{
    aead::{generic_array::GenericArray, Aead, KeyInit},
    ChaCha20Poly1305,
};

use crate::keys::{DerivedKey, Nonce};
use visagevault_common::{Error, Result};

/// Authentication tag size (16 bytes), appended to the ciphertext.
pub const TAG_LENGTH: usize = 16;

/// Encrypt plaintext under the given key and nonce.
///
/// # Preconditions
/// - `nonce` must be unique for each (key, plaintext) pair
///
/// # Postconditions
/// - Returns ciphertext || tag; length is plaintext length + TAG_LENGTH
/// - Pure function of its inputs
///
/// # Security
/// - No associated data is authenticated (empty AAD)
/// - Caller is responsible for nonce uniqueness
pub fn encrypt(key: &DerivedKey, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .encrypt(GenericArray::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|_| Error::Crypto("Encryption failed".to_string()))
}

/// Decrypt ciphertext under the given key and nonce.
///
/// # Preconditions
/// - `ciphertext` must be at least TAG_LENGTH bytes
/// - Ciphertext format: encrypted_data || tag
///
/// # Postconditions
/// - Returns the original plaintext only if the tag verifies
///
/// # Errors
/// - `MalformedInput` if the ciphertext is shorter than the tag
/// - `AuthenticationFailure` if the tag does not verify (wrong key,
///   corrupted data, or tampering — indistinguishable by design)
pub fn decrypt(key: &DerivedKey, nonce: &Nonce, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < TAG_LENGTH {
        return Err(Error::MalformedInput(format!(
            "ciphertext too short: {} bytes, need at least {TAG_LENGTH}",
            ciphertext.len()
        )));
    }

    let cipher = ChaCha20Poly1305::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .decrypt(GenericArray::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| Error::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KEY_LENGTH, NONCE_LENGTH};
    use proptest::prelude::*;

    fn test_key(byte: u8) -> DerivedKey {
        DerivedKey::from_bytes([byte; KEY_LENGTH])
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = test_key(42);
        let nonce = Nonce::generate();
        let plaintext = b"Hello, World!";

        let ciphertext = encrypt(&key, &nonce, plaintext).unwrap();
        let decrypted = decrypt(&key, &nonce, &ciphertext).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_ciphertext_size() {
        let key = test_key(42);
        let nonce = Nonce::generate();
        let plaintext = b"Test message";

        let ciphertext = encrypt(&key, &nonce, plaintext).unwrap();

        assert_eq!(ciphertext.len(), plaintext.len() + TAG_LENGTH);
    }

    #[test]
    fn test_same_inputs_same_ciphertext() {
        let key = test_key(42);
        let nonce = Nonce::from_bytes([1u8; NONCE_LENGTH]);
        let plaintext = b"Deterministic";

        let ct1 = encrypt(&key, &nonce, plaintext).unwrap();
        let ct2 = encrypt(&key, &nonce, plaintext).unwrap();

        // Pure function: same key/nonce/plaintext gives same output
        assert_eq!(ct1, ct2);
    }

    #[test]
    fn test_wrong_key_fails_authentication() {
        let nonce = Nonce::generate();
        let plaintext = b"Secret data";

        let ciphertext = encrypt(&test_key(1), &nonce, plaintext).unwrap();
        let result = decrypt(&test_key(2), &nonce, &ciphertext);

        assert!(matches!(
            result,
            Err(Error::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_wrong_nonce_fails_authentication() {
        let key = test_key(42);
        let plaintext = b"Secret data";

        let ciphertext =
            encrypt(&key, &Nonce::from_bytes([1u8; NONCE_LENGTH]), plaintext).unwrap();
        let result = decrypt(&key, &Nonce::from_bytes([2u8; NONCE_LENGTH]), &ciphertext);

        assert!(matches!(
            result,
            Err(Error::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = test_key(42);
        let nonce = Nonce::generate();

        let mut ciphertext = encrypt(&key, &nonce, b"Important data").unwrap();
        ciphertext[5] ^= 0xFF;

        let result = decrypt(&key, &nonce, &ciphertext);
        assert!(matches!(
            result,
            Err(Error::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_short_ciphertext_is_malformed() {
        let key = test_key(42);
        let nonce = Nonce::generate();

        let result = decrypt(&key, &nonce, &[0u8; TAG_LENGTH - 1]);
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_empty_plaintext() {
        let key = test_key(42);
        let nonce = Nonce::generate();

        let ciphertext = encrypt(&key, &nonce, b"").unwrap();
        assert_eq!(ciphertext.len(), TAG_LENGTH);

        let decrypted = decrypt(&key, &nonce, &ciphertext).unwrap();
        assert!(decrypted.is_empty());
    }

    proptest! {
        #[test]
        fn prop_roundtrip(plaintext in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let key = test_key(7);
            let nonce = Nonce::generate();

            let ciphertext = encrypt(&key, &nonce, &plaintext).unwrap();
            let decrypted = decrypt(&key, &nonce, &ciphertext).unwrap();

            prop_assert_eq!(decrypted, plaintext);
        }
    }
}
