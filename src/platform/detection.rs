//! Platform detection
//!
//! Resolves the OS identity from host platform signals: the compile target
//! on macOS, `/etc/os-release` on Linux. Unrecognized platforms are a fatal
//! precondition, not a recorded failure.

use std::env;
use std::fs;

use super::OsIdentity;
use crate::error::{Result, ShellsmithError};

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Overrides the os-release path, for tests
pub const OS_RELEASE_ENV: &str = "SHELLSMITH_OS_RELEASE";

/// Resolve the host platform, once per run
pub fn resolve() -> Result<OsIdentity> {
    if cfg!(target_os = "macos") {
        return Ok(OsIdentity::MacOs);
    }
    if cfg!(target_os = "linux") {
        return resolve_linux();
    }
    Err(ShellsmithError::PlatformUnsupported {
        details: env::consts::OS.to_string(),
    })
}

fn resolve_linux() -> Result<OsIdentity> {
    let path = env::var(OS_RELEASE_ENV).unwrap_or_else(|_| OS_RELEASE_PATH.to_string());
    let content = fs::read_to_string(&path).map_err(|e| ShellsmithError::PlatformUnsupported {
        details: format!("cannot read {}: {}", path, e),
    })?;

    identity_from_os_release(&content).ok_or_else(|| ShellsmithError::PlatformUnsupported {
        details: describe_distribution(&content),
    })
}

/// Match `ID=` first, then each `ID_LIKE=` token, against the supported set
fn identity_from_os_release(content: &str) -> Option<OsIdentity> {
    let id = os_release_field(content, "ID");
    let id_like = os_release_field(content, "ID_LIKE");

    let candidates = id
        .iter()
        .map(String::as_str)
        .chain(id_like.iter().flat_map(|v| v.split_whitespace()));

    for candidate in candidates {
        match candidate {
            "debian" | "ubuntu" | "linuxmint" | "pop" => return Some(OsIdentity::Debian),
            "fedora" | "rhel" | "centos" => return Some(OsIdentity::Fedora),
            "arch" | "archlinux" | "manjaro" | "endeavouros" => return Some(OsIdentity::Arch),
            _ => {}
        }
    }
    None
}

fn os_release_field(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| value.trim().trim_matches('"').to_string())
    })
}

fn describe_distribution(content: &str) -> String {
    os_release_field(content, "ID")
        .map(|id| format!("Linux distribution '{}'", id))
        .unwrap_or_else(|| "unidentified Linux distribution".to_string())
}
