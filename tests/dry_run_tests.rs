//! Dry-run integration tests
//!
//! Dry runs evaluate presence against the live system and classify would-be
//! outcomes without touching it, and without requiring network or the
//! package manager. Linux-gated for the os-release override.

#![cfg(target_os = "linux")]

mod common;

use assert_cmd::Command;
use common::TestHome;
use predicates::prelude::*;

#[allow(deprecated)]
fn shellsmith_cmd() -> Command {
    Command::cargo_bin("shellsmith").unwrap()
}

#[test]
fn test_dry_run_reports_without_applying() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();

    shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args(["--home", home.path.to_str().unwrap(), "run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        // A fresh home never has the framework clone
        .stdout(predicate::str::contains("oh-my-zsh would be installed"))
        .stdout(predicate::str::contains("Summary"));

    assert!(!home.path.join(".zshrc").exists());
    assert!(!home.path.join(".oh-my-zsh").exists());
    assert!(!home.path.join(".config").exists());
    assert!(!home.path.join(".local").exists());
}

#[test]
fn test_dry_run_needs_no_network() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();

    // The probe endpoint refuses connections; a dry run must not care
    shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .env("SHELLSMITH_PROBE_ADDR", common::refused_endpoint())
        .args(["--home", home.path.to_str().unwrap(), "run", "--dry-run"])
        .assert()
        .success();
}

#[test]
fn test_dry_run_json_report() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();

    let output = shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args([
            "--home",
            home.path.to_str().unwrap(),
            "run",
            "--dry-run",
            "--json",
        ])
        .output()
        .expect("dry run with json");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // The JSON report is the last block of output, after the check log
    let json_start = stdout.find('{').expect("report JSON present");
    let value: serde_json::Value =
        serde_json::from_str(stdout[json_start..].trim()).expect("report is JSON");

    assert!(value["installed"].is_array());
    assert!(value["configured"].is_array());
    assert!(value["skipped"].is_array());
    assert!(value["failed"].is_array());

    let installed: Vec<&str> = value["installed"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert!(installed.contains(&"oh-my-zsh"));
}

#[test]
fn test_dry_run_skips_what_already_exists() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();
    std::fs::create_dir_all(home.path.join(".oh-my-zsh")).expect("mkdir");

    shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args(["--home", home.path.to_str().unwrap(), "run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oh-my-zsh already installed"));
}
