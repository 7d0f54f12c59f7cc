//! Cryptographic primitives for totpvault.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption and decryption (`encryption`)
//! - Argon2id passphrase-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, generate_salt};
pub use encryption::{decrypt, encrypt, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, generate_salt, KEY_LEN, SALT_LEN};
