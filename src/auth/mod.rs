//! Authentication flow: first-run vault creation and attempt-limited
//! unlocking.
//!
//! Passphrase input is abstracted behind [`PassphraseProvider`] so the
//! flow can be driven by a real terminal prompt in production and by
//! canned responses in tests.

use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::output;
use crate::errors::{Result, TotpVaultError};
use crate::vault::Store;

/// Maximum number of unlock attempts before the session terminates.
pub const MAX_ATTEMPTS: u32 = 3;

/// Minimum passphrase length enforced at vault creation.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Source of passphrases for the authentication flow.
///
/// Implementations return `Zeroizing<String>` so every passphrase is
/// wiped from memory when it goes out of scope.
pub trait PassphraseProvider {
    /// Read a passphrase for unlocking an existing vault.
    fn read_passphrase(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    /// Read a new passphrase with confirmation (first-run setup and
    /// passphrase changes).  Must enforce the minimum length and that
    /// both reads match.
    fn read_new_passphrase(&mut self) -> Result<Zeroizing<String>>;
}

/// Interactive terminal prompts via `dialoguer` (input hidden).
///
/// The `TOTPVAULT_PASSPHRASE` environment variable short-circuits both
/// prompts, which keeps scripted and CI usage non-interactive.
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn from_env() -> Option<Zeroizing<String>> {
        match std::env::var("TOTPVAULT_PASSPHRASE") {
            Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
            _ => None,
        }
    }
}

impl PassphraseProvider for TerminalPrompt {
    fn read_passphrase(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        if let Some(pw) = Self::from_env() {
            return Ok(pw);
        }

        let pw = dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| TotpVaultError::PromptFailed(e.to_string()))?;
        Ok(Zeroizing::new(pw))
    }

    fn read_new_passphrase(&mut self) -> Result<Zeroizing<String>> {
        if let Some(pw) = Self::from_env() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(TotpVaultError::PassphraseTooShort(MIN_PASSPHRASE_LEN));
            }
            return Ok(pw);
        }

        loop {
            let pw = dialoguer::Password::new()
                .with_prompt("Choose vault passphrase")
                .with_confirmation("Confirm vault passphrase", "Passphrases do not match")
                .interact()
                .map_err(|e| TotpVaultError::PromptFailed(e.to_string()))?;

            if pw.len() < MIN_PASSPHRASE_LEN {
                output::warning(&format!(
                    "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
                ));
                continue;
            }

            return Ok(Zeroizing::new(pw));
        }
    }
}

/// Unlock the vault at `path`, or run first-run setup if none exists.
///
/// First run: prompt for a new passphrase (confirmed, minimum 8
/// characters), create the vault, and persist it immediately so the
/// file exists with owner-only permissions from the start.
///
/// Existing vault: up to [`MAX_ATTEMPTS`] unlock attempts.  Each
/// failure prints a generic "incorrect passphrase" line — never the
/// passphrase or the underlying error — and only
/// `AuthenticationOrCorruption` is retried; format and IO errors abort
/// immediately.  Exhausting the attempts emits a non-sensitive audit
/// line (path only) and terminates the session.
pub fn unlock_or_create<P: PassphraseProvider>(path: &Path, provider: &mut P) -> Result<Store> {
    if !path.exists() {
        return first_run_setup(path, provider);
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let passphrase = provider.read_passphrase("Enter vault passphrase")?;

        match Store::load(path, &passphrase) {
            Ok(store) => return Ok(store),
            Err(TotpVaultError::AuthenticationOrCorruption) => {
                output::error(&format!(
                    "Incorrect passphrase (attempt {attempt}/{MAX_ATTEMPTS})"
                ));
            }
            // Unsupported version, truncated file, IO failure: retrying
            // with another passphrase cannot help.
            Err(e) => return Err(e),
        }
    }

    eprintln!(
        "SECURITY: failed authentication attempts for vault: {}",
        path.display()
    );
    #[cfg(feature = "audit-log")]
    crate::audit::record(path, "auth_failed", None, Some("attempt limit reached"));

    Err(TotpVaultError::AuthenticationExhausted(MAX_ATTEMPTS))
}

fn first_run_setup<P: PassphraseProvider>(path: &Path, provider: &mut P) -> Result<Store> {
    output::info("No vault found. Creating a new one.");

    let passphrase = provider.read_new_passphrase()?;
    let mut store = Store::create(path, &passphrase)?;
    store.save()?;

    #[cfg(feature = "audit-log")]
    crate::audit::record(path, "vault_created", None, None);

    output::success("Vault created");
    output::success(&format!("Location: {}", path.display()));

    Ok(store)
}
