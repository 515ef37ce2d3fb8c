//! Cryptographic primitives for VisageVault.
//!
//! This module provides:
//! - Key derivation using Argon2id
//! - Authenticated encryption using ChaCha20-Poly1305
//! - Key material with automatic zeroization
//!
//! # Security Guarantees
//! - Derived keys are automatically zeroized on drop and never persisted
//! - A fresh salt and nonce are drawn for every sealing operation, so
//!   key/nonce pairs are never repeated
//! - Tag verification failure reveals nothing about its cause

pub mod aead;
pub mod kdf;
pub mod keys;

pub use aead::{decrypt, encrypt, TAG_LENGTH};
pub use kdf::derive_key;
pub use keys::{DerivedKey, Nonce, Salt, KEY_LENGTH, NONCE_LENGTH, SALT_LENGTH};
