use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in totpvault.
#[derive(Debug, Error)]
pub enum TotpVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Uniform AEAD failure: a wrong key, a wrong nonce, and a flipped
    /// ciphertext byte all surface identically.
    #[error("Decryption failed — wrong passphrase or corrupted data")]
    AuthenticationFailed,

    #[error("Invalid key size: need 32 bytes, got {0}")]
    InvalidKeySize(usize),

    #[error("Invalid nonce size: need 12 bytes, got {0}")]
    InvalidNonceSize(usize),

    #[error("Salt too short: need at least {need} bytes, got {got}")]
    ShortSalt { need: usize, got: usize },

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- TOTP errors ---
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    // --- Vault errors ---
    #[error("Invalid entry name: {0}")]
    InvalidEntryName(String),

    #[error("Entry '{0}' already exists")]
    DuplicateEntry(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    // --- Store errors ---
    /// Uniform load failure covering wrong passphrase, tampered
    /// ciphertext, and garbled plaintext. Callers must not learn which.
    #[error("Unable to unlock vault — wrong passphrase or corrupted file")]
    AuthenticationOrCorruption,

    #[error("Unsupported vault format version {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid vault file: {0}")]
    InvalidFormat(String),

    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    // --- Authentication flow errors ---
    #[error("Passphrase must be at least {0} characters")]
    PassphraseTooShort(usize),

    #[error("Passphrase mismatch — passphrases do not match")]
    PassphraseMismatch,

    #[error("Authentication failed after {0} attempts")]
    AuthenticationExhausted(u32),

    #[error("Passphrase prompt failed: {0}")]
    PromptFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for totpvault results.
pub type Result<T> = std::result::Result<T, TotpVaultError>;
