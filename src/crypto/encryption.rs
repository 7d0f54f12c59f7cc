//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! returns it alongside the ciphertext — the vault file format stores
//! the nonce at a fixed offset rather than prepending it to the
//! ciphertext.  The 16-byte authentication tag is appended to the
//! ciphertext by the cipher itself.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, TotpVaultError};

use super::kdf::KEY_LEN;

/// Size of the AES-256-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the ciphertext (tag appended) and the freshly generated
/// nonce.  A zero-length plaintext still yields a 16-byte tag-only
/// ciphertext.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<(Vec<u8>, [u8; NONCE_LEN])> {
    if key.len() != KEY_LEN {
        return Err(TotpVaultError::InvalidKeySize(key.len()));
    }

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| TotpVaultError::EncryptionFailed(format!("cipher init: {e}")))?;

    // Fresh random nonce per call — never reused for a given key.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| TotpVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok((ciphertext, nonce.into()))
}

/// Decrypt ciphertext produced by `encrypt`, verifying the auth tag.
///
/// Fails with `AuthenticationFailed` if the key is wrong, the nonce is
/// wrong, or any byte of the ciphertext (tag included) was altered.
/// The error carries no detail about which of these happened.
pub fn decrypt(ciphertext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
    if key.len() != KEY_LEN {
        return Err(TotpVaultError::InvalidKeySize(key.len()));
    }
    if nonce.len() != NONCE_LEN {
        return Err(TotpVaultError::InvalidNonceSize(nonce.len()));
    }

    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| TotpVaultError::AuthenticationFailed)?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| TotpVaultError::AuthenticationFailed)?;

    Ok(plaintext)
}
