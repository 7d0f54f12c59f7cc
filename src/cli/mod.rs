//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::settings::{app_config_dir, Settings};
use crate::errors::Result;

/// totpvault CLI: passphrase-encrypted TOTP secret vault.
#[derive(Parser)]
#[command(
    name = "totpvault",
    about = "Local passphrase-encrypted TOTP secret vault",
    version
)]
pub struct Cli {
    /// Running without a subcommand shows the code table.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the vault file (default: XDG config dir)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new TOTP entry
    Add {
        /// Entry name (e.g. GitHub)
        #[arg(long)]
        name: String,

        /// Optional identifier (e.g. email, username)
        #[arg(long)]
        identifier: Option<String>,

        /// Base32 TOTP secret
        #[arg(long)]
        secret: String,
    },

    /// Show current codes for all entries
    List,

    /// Change the vault passphrase (full re-encryption)
    ChangePassphrase,

    /// View the audit log of vault operations
    #[cfg(feature = "audit-log")]
    Audit {
        /// Number of entries to show
        #[arg(long, default_value = "50")]
        last: usize,
    },
}

/// Resolve the vault file path: `--vault` flag first, then the settings
/// file, then the XDG default.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.vault {
        return Ok(path.clone());
    }
    let settings = Settings::load(&app_config_dir())?;
    Ok(settings.vault_path())
}
