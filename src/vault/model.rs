//! The decrypted vault record: format version plus the ordered entry
//! list.  The salt lives here too but is carried in the binary file
//! header, never inside the encrypted JSON.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::crypto::SALT_LEN;
use crate::errors::{Result, TotpVaultError};

use super::entry::Entry;

/// Current vault format version.  Unknown versions are rejected at
/// load time rather than guessed at.
pub const FORMAT_VERSION: u32 = 1;

/// The in-memory decrypted secret collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    /// Format version for future migrations.
    #[serde(rename = "version")]
    pub format_version: u32,

    /// Tracked entries, insertion order preserved.
    pub entries: Vec<Entry>,

    /// Argon2id salt — stored in the file header, not the JSON payload.
    #[serde(skip)]
    pub salt: [u8; SALT_LEN],
}

impl Vault {
    /// Create an empty vault at the current format version.
    pub fn new(salt: [u8; SALT_LEN]) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            entries: Vec::new(),
            salt,
        }
    }

    /// Add a validated entry, rejecting case-insensitive duplicates.
    ///
    /// On any error the vault is left unmodified.
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        entry.validate()?;

        if self.find(&entry.name).is_some() {
            return Err(TotpVaultError::DuplicateEntry(entry.name));
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by name, case-insensitively.
    pub fn get_entry(&self, name: &str) -> Result<&Entry> {
        self.find(name)
            .map(|i| &self.entries[i])
            .ok_or_else(|| TotpVaultError::EntryNotFound(name.to_string()))
    }

    /// Mark an entry's code as consumed by stamping `last_used`.
    ///
    /// `last_used`, once set, only moves forward: a clock that reads
    /// earlier than the recorded stamp leaves it unchanged.
    pub fn update_last_used(&mut self, name: &str) -> Result<()> {
        let i = self
            .find(name)
            .ok_or_else(|| TotpVaultError::EntryNotFound(name.to_string()))?;

        let now = Utc::now();
        let entry = &mut self.entries[i];
        match entry.last_used {
            Some(prev) if prev >= now => {}
            _ => entry.last_used = Some(now),
        }
        Ok(())
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }
}
