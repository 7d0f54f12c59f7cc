//! The persistence engine: on-disk binary layout, atomic load/save,
//! and passphrase changes.
//!
//! A vault file has this layout (numeric fields little-endian):
//!
//! ```text
//! [version: 4 bytes u32][salt: 16 bytes][nonce: 12 bytes][ciphertext + 16-byte tag]
//! ```
//!
//! The ciphertext is the AES-256-GCM encryption of the vault JSON under
//! a key derived from the passphrase and the stored salt.  Wrong
//! passphrase, flipped ciphertext bytes, and garbled plaintext all
//! surface as one opaque `AuthenticationOrCorruption` error so a caller
//! cannot learn which step failed.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{decrypt, derive_key, encrypt, generate_salt, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{Result, TotpVaultError};

use super::entry::Entry;
use super::model::{Vault, FORMAT_VERSION};

/// Fixed-size file header: version (4) + salt (16) + nonce (12).
const HEADER_LEN: usize = 4 + SALT_LEN + NONCE_LEN;

/// Smallest possible valid file: header plus a tag-only ciphertext.
const MIN_FILE_LEN: usize = HEADER_LEN + TAG_LEN;

/// The live session handle: a decrypted [`Vault`] bound to its file
/// path and the passphrase currently unlocking it.
///
/// The `Store` owns the vault exclusively — no other component holds a
/// second live decrypted copy.  The passphrase is wiped from memory
/// when the store is dropped.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    passphrase: Zeroizing<String>,
    vault: Vault,
}

impl Store {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new empty vault bound to `path`.
    ///
    /// Ensures the parent directory exists with owner-only access and
    /// generates a fresh salt.  Nothing touches the disk until
    /// [`save`](Self::save) is called.
    pub fn create(path: &Path, passphrase: &str) -> Result<Self> {
        if path.exists() {
            return Err(TotpVaultError::VaultAlreadyExists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            create_private_dir(parent)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            passphrase: Zeroizing::new(passphrase.to_string()),
            vault: Vault::new(generate_salt()),
        })
    }

    /// Load and decrypt an existing vault file.
    ///
    /// A missing file is `VaultNotFound`; a file too short to hold the
    /// header or an unknown format version is an `InvalidFormat` /
    /// `UnsupportedVersion` error (fatal, never retried).  Everything
    /// past that point fails uniformly as `AuthenticationOrCorruption`.
    pub fn load(path: &Path, passphrase: &str) -> Result<Self> {
        if !path.exists() {
            return Err(TotpVaultError::VaultNotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        if data.len() < MIN_FILE_LEN {
            return Err(TotpVaultError::InvalidFormat(
                "file too small to be a valid vault".into(),
            ));
        }

        let version = u32::from_le_bytes(
            data[0..4]
                .try_into()
                .expect("slice of length 4 converts to [u8; 4]"),
        );
        if version != FORMAT_VERSION {
            return Err(TotpVaultError::UnsupportedVersion(version));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&data[4..4 + SALT_LEN]);
        let nonce = &data[4 + SALT_LEN..HEADER_LEN];
        let ciphertext = &data[HEADER_LEN..];

        // From here on every failure is reported identically so the
        // error never acts as a which-step-failed oracle.
        let mut key = derive_key(passphrase.as_bytes(), &salt)
            .map_err(|_| TotpVaultError::AuthenticationOrCorruption)?;
        let decrypted = decrypt(ciphertext, &key, nonce);
        key.zeroize();
        let mut plaintext = decrypted.map_err(|_| TotpVaultError::AuthenticationOrCorruption)?;

        let parsed: std::result::Result<Vault, _> = serde_json::from_slice(&plaintext);
        plaintext.zeroize();
        let mut vault = parsed.map_err(|_| TotpVaultError::AuthenticationOrCorruption)?;
        vault.salt = salt;

        Ok(Self {
            path: path.to_path_buf(),
            passphrase: Zeroizing::new(passphrase.to_string()),
            vault,
        })
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize, encrypt, and write the vault to disk atomically.
    ///
    /// The key is re-derived from the current passphrase and salt and a
    /// fresh nonce is generated for every save.  The file is written to
    /// a temporary path in the same directory with owner-only
    /// permissions, then renamed over the target; on rename failure the
    /// temp file is removed and the previous file is left intact.
    pub fn save(&mut self) -> Result<()> {
        let mut key = derive_key(self.passphrase.as_bytes(), &self.vault.salt)?;

        let mut plaintext = serde_json::to_vec(&self.vault).map_err(|e| {
            key.zeroize();
            TotpVaultError::SerializationError(format!("vault JSON: {e}"))
        })?;

        let encrypted = encrypt(&plaintext, &key);
        plaintext.zeroize();
        key.zeroize();
        let (ciphertext, nonce) = encrypted?;

        let mut buf = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        buf.extend_from_slice(&self.vault.format_version.to_le_bytes());
        buf.extend_from_slice(&self.vault.salt);
        buf.extend_from_slice(&nonce);
        buf.extend_from_slice(&ciphertext);

        write_atomic(&self.path, &buf)
    }

    /// Re-encrypt the vault under a new passphrase.
    ///
    /// Generates a brand-new salt, swaps the in-memory passphrase and
    /// salt, and performs a full [`save`](Self::save) — a complete
    /// re-encryption, not a key wrap.  If the save fails the old
    /// passphrase and salt are restored so the session still matches
    /// the untouched file on disk.
    pub fn change_passphrase(&mut self, new_passphrase: &str) -> Result<()> {
        let old_salt = self.vault.salt;
        let old_passphrase =
            std::mem::replace(&mut self.passphrase, Zeroizing::new(new_passphrase.to_string()));
        self.vault.salt = generate_salt();

        if let Err(e) = self.save() {
            self.passphrase = old_passphrase;
            self.vault.salt = old_salt;
            return Err(e);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Vault operations (delegated)
    // ------------------------------------------------------------------

    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        self.vault.add_entry(entry)
    }

    pub fn get_entry(&self, name: &str) -> Result<&Entry> {
        self.vault.get_entry(name)
    }

    pub fn update_last_used(&mut self, name: &str) -> Result<()> {
        self.vault.update_last_used(name)
    }

    pub fn entries(&self) -> &[Entry] {
        self.vault.entries()
    }

    pub fn entry_count(&self) -> usize {
        self.vault.len()
    }

    /// Path to the vault file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Create `dir` (and parents) with owner-only access.
fn create_private_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)?;
    }
    #[cfg(not(unix))]
    {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write `data` to `path` atomically: temp file in the same directory,
/// owner-only mode, then rename over the target.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    write_private_file(&tmp_path, data)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

/// Write a file readable and writable by the owner only (0600).
fn write_private_file(path: &Path, data: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(data)?;
        // The mode only applies at creation; enforce it on rewrites too.
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    {
        fs::write(path, data)?;
    }
    Ok(())
}
