//! End-to-end CLI tests for the totpvault binary.
//!
//! The `TOTPVAULT_PASSPHRASE` environment variable keeps every
//! invocation non-interactive.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SECRET: &str = "JBSWY3DPEHPK3PXP";
const PASSPHRASE: &str = "correct horse battery";

fn totpvault(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("totpvault").expect("binary builds");
    cmd.env("TOTPVAULT_PASSPHRASE", PASSPHRASE)
        .arg("--vault")
        .arg(dir.path().join("secrets.enc"));
    cmd
}

#[test]
fn add_creates_vault_and_exits_zero() {
    let dir = TempDir::new().unwrap();

    totpvault(&dir)
        .args(["add", "--name", "GitHub", "--secret", SECRET])
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));

    assert!(dir.path().join("secrets.enc").exists());
}

#[test]
fn add_with_identifier_then_list_shows_entry() {
    let dir = TempDir::new().unwrap();

    totpvault(&dir)
        .args([
            "add",
            "--name",
            "AWS",
            "--identifier",
            "me@example.com",
            "--secret",
            SECRET,
        ])
        .assert()
        .success();

    totpvault(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("AWS"))
        .stdout(predicate::str::contains("me@example.com"));
}

#[test]
fn duplicate_add_exits_one() {
    let dir = TempDir::new().unwrap();

    totpvault(&dir)
        .args(["add", "--name", "GitHub", "--secret", SECRET])
        .assert()
        .success();

    totpvault(&dir)
        .args(["add", "--name", "github", "--secret", SECRET])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_secret_fails_before_any_vault_io() {
    let dir = TempDir::new().unwrap();

    totpvault(&dir)
        .args(["add", "--name", "Broken", "--secret", "not-base32!"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid secret"));

    assert!(
        !dir.path().join("secrets.enc").exists(),
        "no vault should be created for a rejected secret"
    );
}

#[test]
fn wrong_passphrase_exhausts_attempts_and_exits_one() {
    let dir = TempDir::new().unwrap();

    totpvault(&dir)
        .args(["add", "--name", "GitHub", "--secret", SECRET])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("totpvault").unwrap();
    cmd.env("TOTPVAULT_PASSPHRASE", "totally wrong pw")
        .arg("--vault")
        .arg(dir.path().join("secrets.enc"))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Incorrect passphrase"));
}

#[test]
fn short_passphrase_is_rejected_at_first_run() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("totpvault").unwrap();
    cmd.env("TOTPVAULT_PASSPHRASE", "short")
        .arg("--vault")
        .arg(dir.path().join("secrets.enc"))
        .args(["add", "--name", "GitHub", "--secret", SECRET])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least 8 characters"));
}
