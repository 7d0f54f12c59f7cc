//! `totpvault change-passphrase` — unlock, then fully re-encrypt the
//! vault under a new passphrase and a new salt.

use crate::auth::{unlock_or_create, PassphraseProvider, TerminalPrompt};
use crate::cli::{output, vault_path, Cli};
use crate::errors::{Result, TotpVaultError};

pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;
    if !path.exists() {
        return Err(TotpVaultError::VaultNotFound(path));
    }

    output::info("Changing vault passphrase...");
    let mut provider = TerminalPrompt;
    let mut store = unlock_or_create(&path, &mut provider)?;

    let new_passphrase = provider.read_new_passphrase()?;
    store.change_passphrase(&new_passphrase)?;

    #[cfg(feature = "audit-log")]
    crate::audit::record(&path, "passphrase_changed", None, None);

    output::success("Passphrase changed — the vault has been fully re-encrypted");
    Ok(())
}
