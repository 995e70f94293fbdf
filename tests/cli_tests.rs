//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Command for the compiled binary with no ambient TFE settings
fn tfe_bulk() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tfe-bulk"));
    for var in ["TFE_ORG", "TFE_HOSTNAME", "HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    tfe_bulk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulk operations on TFE/TFC workspaces"))
        .stdout(predicate::str::contains("--credentials"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    tfe_bulk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfe-bulk"));
}

/// Test that a command is required
#[test]
fn test_missing_command() {
    tfe_bulk()
        .args(["-o", "my-org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--command"));
}

/// Test invalid command name
#[test]
fn test_invalid_command() {
    tfe_bulk()
        .args(["-c", "drop_workspaces"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("drop_workspaces"));
}

/// Test invalid format argument
#[test]
fn test_invalid_format() {
    tfe_bulk()
        .args(["-c", "list_workspaces", "--format", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

/// A credentials file that does not exist leaves no token
#[test]
fn test_missing_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("credentials.tfrc.json");

    tfe_bulk()
        .args(["-c", "list_workspaces", "-o", "my-org", "--credentials"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

/// list_workspaces without an organization fails before any request
#[test]
fn test_list_without_org_fails() {
    tfe_bulk()
        .args(["-c", "list_workspaces", "-t", "dummy", "-H", "127.0.0.1:1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("organization"));
}

/// A malformed -v is rejected before any request
#[test]
fn test_set_var_requires_key_value() {
    tfe_bulk()
        .args([
            "-c",
            "set_workspace_var",
            "-o",
            "my-org",
            "-w",
            "wsA",
            "-v",
            "novalue",
            "-t",
            "dummy",
            "-H",
            "127.0.0.1:1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("key:value"));
}

/// Short lines are skipped with a warning and the batch still succeeds
#[test]
fn test_set_var_list_skips_short_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wsA").unwrap();
    writeln!(file, "wsB,size").unwrap();

    tfe_bulk()
        .args([
            "-c",
            "set_workspace_var",
            "-o",
            "my-org",
            "-t",
            "dummy",
            "-H",
            "127.0.0.1:1",
            "-q",
            "-l",
        ])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Setting workspace variables from list:"))
        .stdout(predicate::str::contains("[line 1] skipped"))
        .stdout(predicate::str::contains("[line 2] skipped"));
}

/// A list file that cannot be read is a command error
#[test]
fn test_unreadable_list_fails() {
    tfe_bulk()
        .args([
            "-c",
            "delete_workspaces",
            "-o",
            "my-org",
            "-t",
            "dummy",
            "-l",
            "/nonexistent/list.csv",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/list.csv"));
}
