//! Passphrase-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks.  The cost parameters are fixed constants so the
//! same (passphrase, salt) pair always yields the same key across
//! versions of this crate.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use crate::errors::{Result, TotpVaultError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Argon2id iteration count.
const ITERATIONS: u32 = 4;

/// Argon2id memory cost in KiB (64 MiB).
const MEMORY_KIB: u32 = 65_536;

/// Argon2id parallelism lanes.
const PARALLELISM: u32 = 4;

/// Derive a 32-byte key from a passphrase and salt using Argon2id.
///
/// The passphrase may be any byte string, including empty.  The salt
/// must be at least 16 bytes; anything shorter is a `ShortSalt` error.
/// The same passphrase + salt always produce the same key.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    if salt.len() < SALT_LEN {
        return Err(TotpVaultError::ShortSalt {
            need: SALT_LEN,
            got: salt.len(),
        });
    }

    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| TotpVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(passphrase, salt, &mut key)
        .map_err(|e| {
            TotpVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
        })?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
