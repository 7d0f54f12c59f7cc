pub mod add;
pub mod change_passphrase;
pub mod list;

#[cfg(feature = "audit-log")]
pub mod audit_cmd;
