//! Audit log — SQLite-based operation history.
//!
//! Records vault operations (creation, entry additions, passphrase
//! changes, failed unlocks) in a local SQLite database next to the
//! vault file.  Only operation names, entry names, and timestamps are
//! stored — never passphrases or secret material.
//!
//! Designed for graceful degradation: if the database can't be opened
//! or written to, the calling operation continues without logging.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

/// A single audit log entry.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub entry_name: Option<String>,
    pub details: Option<String>,
}

/// SQLite-backed audit log.
pub struct AuditLog {
    conn: Connection,
}

impl AuditLog {
    /// Open (or create) the audit database next to the vault file.
    ///
    /// Returns `None` if the database can't be opened — callers should
    /// treat this as "audit logging unavailable" and continue normally.
    pub fn open(vault_path: &Path) -> Option<Self> {
        let dir = vault_path.parent()?;
        let db_path = dir.join("audit.db");
        let conn = Connection::open(&db_path).ok()?;

        // Owner-only, like the vault file itself.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&db_path, perms);
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS audit_log (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp  TEXT NOT NULL,
                operation  TEXT NOT NULL,
                entry_name TEXT,
                details    TEXT
            );",
        )
        .ok()?;

        Some(Self { conn })
    }

    /// Append one operation record.  Errors are swallowed.
    pub fn log(&self, operation: &str, entry_name: Option<&str>, details: Option<&str>) {
        let _ = self.conn.execute(
            "INSERT INTO audit_log (timestamp, operation, entry_name, details)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![Utc::now().to_rfc3339(), operation, entry_name, details],
        );
    }

    /// The most recent `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        let mut stmt = match self.conn.prepare(
            "SELECT id, timestamp, operation, entry_name, details
             FROM audit_log ORDER BY id DESC LIMIT ?1",
        ) {
            Ok(stmt) => stmt,
            Err(_) => return Vec::new(),
        };

        let rows = stmt.query_map([limit as i64], |row| {
            let ts: String = row.get(1)?;
            Ok(AuditEntry {
                id: row.get(0)?,
                timestamp: DateTime::parse_from_rfc3339(&ts)
                    .map(|t| t.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
                operation: row.get(2)?,
                entry_name: row.get(3)?,
                details: row.get(4)?,
            })
        });

        match rows {
            Ok(rows) => rows.flatten().collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// One-shot convenience: open, log, close.  Never fails.
pub fn record(vault_path: &Path, operation: &str, entry_name: Option<&str>, details: Option<&str>) {
    if let Some(log) = AuditLog::open(vault_path) {
        log.log(operation, entry_name, details);
    }
}
