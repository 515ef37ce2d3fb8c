//! Sealing and opening of password-encrypted embedding vectors.
//!
//! A sealed blob is `salt || nonce || ciphertext+tag`: everything needed to
//! re-derive the key (given the password) and authenticate the payload
//! travels with the ciphertext. There is no separate password check — a
//! wrong password surfaces as the same authentication failure as corrupted
//! or tampered data.

pub mod sealed;

pub use sealed::{open, seal, SealedBlob, MIN_SEALED_LENGTH};
