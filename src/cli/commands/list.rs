//! `totpvault list` — one-shot table of current codes.
//!
//! This is the non-interactive stand-in for the viewer: it unlocks the
//! vault, prints every entry with its current 6-digit code and the
//! seconds left in the 30-second window, and exits.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::{unlock_or_create, TerminalPrompt};
use crate::cli::{output, vault_path, Cli};
use crate::errors::Result;

pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;
    let store = unlock_or_create(&path, &mut TerminalPrompt)?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    output::print_code_table(store.entries(), now);
    Ok(())
}
