//! Configuration: settings file parsing and default vault location.

pub mod settings;

pub use settings::{default_vault_path, Settings};
