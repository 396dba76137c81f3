//! End-to-end tests for the zmon binary.
//!
//! These run the compiled binary with an isolated HOME so no real config
//! file or keyring is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zmon_cmd(tempdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zmon").unwrap();
    cmd.env("HOME", tempdir.path());
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(tempdir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();

    zmon_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("alert-definitions"))
        .stdout(predicate::str::contains("check-definitions"))
        .stdout(predicate::str::contains("entities"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn version_is_reported() {
    let temp = TempDir::new().unwrap();

    zmon_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zmon"));
}

#[test]
fn completions_need_no_config() {
    let temp = TempDir::new().unwrap();

    zmon_cmd(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn unknown_subcommand_fails() {
    let temp = TempDir::new().unwrap();

    zmon_cmd(&temp)
        .arg("frobnicate")
        .assert()
        .failure();
}

#[test]
fn missing_config_without_terminal_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nonexistent.yaml");

    // No config file and no terminal to prompt on: the command must fail
    // instead of hanging.
    zmon_cmd(&temp)
        .args(["-c", config.to_str().unwrap(), "status"])
        .write_stdin("")
        .assert()
        .failure();
}
