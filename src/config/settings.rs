use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TotpVaultError};

/// Name of the per-user application directory under the config root.
const APP_DIR: &str = "totpvault";

/// Name of the encrypted vault file.
const VAULT_FILE: &str = "secrets.enc";

/// User-level configuration, loaded from `config.toml` in the
/// application config directory.
///
/// Every field has a default so totpvault works without any config
/// file at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Override for the vault file location.  When unset the XDG
    /// default (`<config>/totpvault/secrets.enc`) is used.
    #[serde(default)]
    pub vault_path: Option<PathBuf>,
}

impl Settings {
    /// Name of the config file inside the application directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<config_dir>/config.toml`.
    ///
    /// A missing file yields defaults; a file that exists but cannot be
    /// parsed is an error.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            TotpVaultError::ConfigError(format!("failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the vault path: explicit override, else XDG default.
    pub fn vault_path(&self) -> PathBuf {
        self.vault_path
            .clone()
            .unwrap_or_else(default_vault_path)
    }
}

/// The per-user application config directory.
///
/// `$XDG_CONFIG_HOME` if set, else `$HOME/.config`, with the
/// application subdirectory appended.
pub fn app_config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| {
            let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
            home.join(".config")
        });
    base.join(APP_DIR)
}

/// Default location of the encrypted vault file:
/// `<config_dir>/totpvault/secrets.enc`.
pub fn default_vault_path() -> PathBuf {
    app_config_dir().join(VAULT_FILE)
}
