//! `totpvault audit` — show recent vault operations.
//!
//! Reads the SQLite audit log next to the vault file.  No passphrase
//! is required: the log holds no secret material by construction.

use crate::audit::AuditLog;
use crate::cli::{output, vault_path, Cli};
use crate::errors::Result;

pub fn execute(cli: &Cli, last: usize) -> Result<()> {
    let path = vault_path(cli)?;

    match AuditLog::open(&path) {
        Some(log) => output::print_audit_table(&log.recent(last)),
        None => output::warning("Audit log unavailable."),
    }
    Ok(())
}
