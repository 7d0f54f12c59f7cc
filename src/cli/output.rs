//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the code table: one row per entry with its current code and
/// the seconds left in the window.
pub fn print_code_table(entries: &[Entry], unix_time: u64) {
    if entries.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `totpvault add --name <NAME> --secret <BASE32>` to add one.");
        return;
    }

    let remaining = crate::totp::time_remaining(unix_time);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Identifier", "Code", "Expires in"]);

    for entry in entries {
        let code = match crate::totp::generate_code(&entry.secret, unix_time) {
            Ok(code) => code,
            Err(_) => "------".to_string(),
        };
        table.add_row(vec![
            entry.name.clone(),
            entry.identifier.clone().unwrap_or_default(),
            code,
            format!("{remaining}s"),
        ]);
    }

    println!("{table}");
}

/// Print the audit log table, newest entries first.
#[cfg(feature = "audit-log")]
pub fn print_audit_table(entries: &[crate::audit::AuditEntry]) {
    if entries.is_empty() {
        info("Audit log is empty.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Entry", "Details"]);

    for e in entries {
        table.add_row(vec![
            e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            e.operation.clone(),
            e.entry_name.clone().unwrap_or_default(),
            e.details.clone().unwrap_or_default(),
        ]);
    }

    println!("{table}");
}
