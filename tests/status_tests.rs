//! Status command integration tests
//!
//! The os-release override only applies on Linux targets, so everything here
//! is Linux-gated.

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
fn test_status_on_fresh_home() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();

    shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args(["--home", home.path.to_str().unwrap(), "status"])
        .assert()
        .success()
        // Nothing is cloned into a fresh home, so the framework is pending
        // and everything installed into it is blocked on the directory
        .stdout(predicate::str::contains("pending oh-my-zsh"))
        .stdout(predicate::str::contains("blocked zsh-autosuggestions"))
        .stdout(predicate::str::contains("satisfied"));
}

#[test]
fn test_status_is_read_only() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();

    shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args(["--home", home.path.to_str().unwrap(), "status"])
        .assert()
        .success();

    assert!(!home.path.join(".zshrc").exists());
    assert!(!home.path.join(".config").exists());
    assert!(!home.path.join(".oh-my-zsh").exists());
}

#[test]
fn test_status_json_shape() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();

    let output = shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args(["--home", home.path.to_str().unwrap(), "status", "--json"])
        .output()
        .expect("status --json runs");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("status output is JSON");

    assert!(value["satisfied"].is_array());
    assert!(value["pending"].is_array());
    assert!(value["blocked"].is_array());

    let blocked_labels: Vec<&str> = value["blocked"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry["label"].as_str())
        .collect();
    assert!(blocked_labels.contains(&"zsh-autosuggestions"));
    assert!(blocked_labels.contains(&"powerlevel10k"));
}

#[test]
fn test_status_sees_existing_framework_clone() {
    let home = TestHome::new();
    let os_release = home.ubuntu_os_release();
    std::fs::create_dir_all(home.path.join(".oh-my-zsh")).expect("mkdir");

    shellsmith_cmd()
        .env("SHELLSMITH_OS_RELEASE", &os_release)
        .args(["--home", home.path.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      ok oh-my-zsh"))
        // The plugin clones are no longer blocked, merely pending
        .stdout(predicate::str::contains("pending zsh-autosuggestions"));
}
