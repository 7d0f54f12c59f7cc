//! Integration tests for the totpvault crypto module.

use totpvault::crypto::{decrypt, derive_key, encrypt, generate_salt, NONCE_LEN, TAG_LEN};
use totpvault::errors::TotpVaultError;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = b"{\"version\":1,\"entries\":[]}";

    let (ciphertext, nonce) = encrypt(plaintext, &key).expect("encrypt should succeed");

    // Ciphertext is plaintext plus the 16-byte tag.
    assert_eq!(ciphertext.len(), plaintext.len() + TAG_LEN);

    let recovered = decrypt(&ciphertext, &key, &nonce).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn empty_plaintext_still_produces_ciphertext() {
    let key = [0x01u8; 32];
    let (ciphertext, nonce) = encrypt(b"", &key).expect("encrypt");
    assert_eq!(ciphertext.len(), TAG_LEN, "tag-only ciphertext");
    assert_eq!(decrypt(&ciphertext, &key, &nonce).unwrap(), b"");
}

// ---------------------------------------------------------------------------
// Tamper detection
// ---------------------------------------------------------------------------

#[test]
fn flipping_any_ciphertext_bit_fails_decryption() {
    let key = [0xCDu8; 32];
    let (ciphertext, nonce) = encrypt(b"tamper-me", &key).expect("encrypt");

    for i in 0..ciphertext.len() {
        let mut corrupted = ciphertext.clone();
        corrupted[i] ^= 0x01;
        let result = decrypt(&corrupted, &key, &nonce);
        assert!(
            matches!(result, Err(TotpVaultError::AuthenticationFailed)),
            "bit flip at byte {i} must fail authentication"
        );
    }
}

#[test]
fn flipping_any_nonce_bit_fails_decryption() {
    let key = [0xEFu8; 32];
    let (ciphertext, nonce) = encrypt(b"nonce-matters", &key).expect("encrypt");

    for i in 0..NONCE_LEN {
        let mut wrong_nonce = nonce;
        wrong_nonce[i] ^= 0x80;
        let result = decrypt(&ciphertext, &key, &wrong_nonce);
        assert!(
            matches!(result, Err(TotpVaultError::AuthenticationFailed)),
            "nonce bit flip at byte {i} must fail authentication"
        );
    }
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];

    let (ciphertext, nonce) = encrypt(b"top secret", &key).expect("encrypt");
    let result = decrypt(&ciphertext, &wrong_key, &nonce);

    assert!(matches!(result, Err(TotpVaultError::AuthenticationFailed)));
}

// ---------------------------------------------------------------------------
// Size validation
// ---------------------------------------------------------------------------

#[test]
fn wrong_key_sizes_are_rejected() {
    assert!(matches!(
        encrypt(b"data", &[0u8; 16]),
        Err(TotpVaultError::InvalidKeySize(16))
    ));
    assert!(matches!(
        decrypt(b"data", &[0u8; 64], &[0u8; NONCE_LEN]),
        Err(TotpVaultError::InvalidKeySize(64))
    ));
}

#[test]
fn wrong_nonce_size_is_rejected() {
    assert!(matches!(
        decrypt(b"data", &[0u8; 32], &[0u8; 11]),
        Err(TotpVaultError::InvalidNonceSize(11))
    ));
}

// ---------------------------------------------------------------------------
// Key derivation (Argon2id)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_is_deterministic() {
    let salt = generate_salt();

    let key1 = derive_key(b"my-secure-passphrase", &salt).expect("derive 1");
    let key2 = derive_key(b"my-secure-passphrase", &salt).expect("derive 2");

    assert_eq!(key1, key2, "same passphrase + salt must yield the same key");
}

#[test]
fn derive_key_is_sensitive_to_passphrase_and_salt() {
    let salt1 = generate_salt();
    let salt2 = generate_salt();

    let base = derive_key(b"passphrase", &salt1).unwrap();
    assert_ne!(base, derive_key(b"passphrase!", &salt1).unwrap());
    assert_ne!(base, derive_key(b"passphrase", &salt2).unwrap());
}

#[test]
fn derive_key_rejects_short_salt() {
    let result = derive_key(b"passphrase", &[0u8; 8]);
    assert!(matches!(
        result,
        Err(TotpVaultError::ShortSalt { need: 16, got: 8 })
    ));
}

// ---------------------------------------------------------------------------
// Salt and nonce uniqueness
// ---------------------------------------------------------------------------

#[test]
fn generated_salts_are_pairwise_distinct() {
    let salts: Vec<[u8; 16]> = (0..100).map(|_| generate_salt()).collect();
    for i in 0..salts.len() {
        for j in (i + 1)..salts.len() {
            assert_ne!(salts[i], salts[j], "salts {i} and {j} collided");
        }
    }
}

#[test]
fn generated_nonces_are_pairwise_distinct() {
    let key = [0x55u8; 32];
    let nonces: Vec<[u8; NONCE_LEN]> = (0..100)
        .map(|_| encrypt(b"x", &key).expect("encrypt").1)
        .collect();
    for i in 0..nonces.len() {
        for j in (i + 1)..nonces.len() {
            assert_ne!(nonces[i], nonces[j], "nonces {i} and {j} collided");
        }
    }
}
