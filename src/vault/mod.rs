//! Vault module — encrypted TOTP secret storage.
//!
//! This module provides:
//! - The `Entry` type with name/secret validation (`entry`)
//! - The decrypted `Vault` record (`model`)
//! - The `Store` binding a vault to its on-disk file (`store`)

pub mod entry;
pub mod model;
pub mod store;

// Re-export the most commonly used items.
pub use entry::Entry;
pub use model::{Vault, FORMAT_VERSION};
pub use store::Store;
