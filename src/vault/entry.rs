//! Entry type — one tracked account's shared secret plus metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TotpVaultError};
use crate::totp;

/// Maximum entry name length in characters.
const MAX_NAME_LEN: usize = 50;

/// A single tracked account inside a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display label, unique case-insensitively within a vault.
    pub name: String,

    /// Optional free-text disambiguator (account, email, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Base32-encoded shared secret — the canonical key material.
    pub secret: String,

    /// Set once when the entry is inserted, immutable afterwards.
    pub created_at: DateTime<Utc>,

    /// Set whenever a code for this entry is consumed; absent until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl Entry {
    /// Build a new entry with `created_at` set to now and no `last_used`.
    ///
    /// Validation happens at insertion (`Vault::add_entry`), not here.
    pub fn new(name: impl Into<String>, identifier: Option<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier,
            secret: secret.into(),
            created_at: Utc::now(),
            last_used: None,
        }
    }

    /// Validate the entry's name and secret.
    pub fn validate(&self) -> Result<()> {
        validate_entry_name(&self.name)?;
        totp::validate_secret(&self.secret)?;
        Ok(())
    }
}

/// Validate an entry name.
///
/// Allowed: 1–50 printable characters after trimming, no control
/// characters, no path separators (`/` or `\`).
pub fn validate_entry_name(name: &str) -> Result<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(TotpVaultError::InvalidEntryName(
            "name cannot be empty".into(),
        ));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(TotpVaultError::InvalidEntryName(format!(
            "name too long: max {MAX_NAME_LEN} characters"
        )));
    }

    for c in trimmed.chars() {
        if c.is_control() {
            return Err(TotpVaultError::InvalidEntryName(
                "name contains a control character".into(),
            ));
        }
        if c == '/' || c == '\\' {
            return Err(TotpVaultError::InvalidEntryName(
                "name cannot contain path separators".into(),
            ));
        }
    }

    Ok(())
}
