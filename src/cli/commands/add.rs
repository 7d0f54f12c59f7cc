//! `totpvault add` — add a new TOTP entry to the vault.
//!
//! Validates the Base32 secret before touching the vault so an obvious
//! typo fails fast, then unlocks (or first-run creates) the vault,
//! rejects duplicates, and saves.

use crate::auth::{unlock_or_create, TerminalPrompt};
use crate::cli::{output, vault_path, Cli};
use crate::errors::Result;
use crate::totp;
use crate::vault::Entry;

pub fn execute(cli: &Cli, name: &str, identifier: Option<&str>, secret: &str) -> Result<()> {
    // Fail fast on a bad secret before prompting for the passphrase.
    totp::validate_secret(secret)?;

    let path = vault_path(cli)?;
    let mut store = unlock_or_create(&path, &mut TerminalPrompt)?;

    let entry = Entry::new(name, identifier.map(str::to_string), secret);
    store.add_entry(entry)?;
    store.save()?;

    #[cfg(feature = "audit-log")]
    crate::audit::record(&path, "entry_added", Some(name), None);

    output::success(&format!("Entry '{name}' added"));
    output::success("Vault updated and re-encrypted");
    Ok(())
}
