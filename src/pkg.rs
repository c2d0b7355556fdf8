//! Package manager collaborator
//!
//! The only contract with the platform package manager: given a package
//! identifier, produce success or failure via one out-of-process invocation.
//! Retries and installer-specific behavior are the manager's concern.
//! Presence is re-derived from the live system each run by probing PATH for
//! the package's binary, never from a package database or prior run state.

use std::process::Command;

use crate::error::{Result, ShellsmithError};
use crate::platform::Capabilities;

/// One package across the supported platforms
#[derive(Debug, Clone, Copy)]
pub struct PackageSpec {
    /// Human-readable label used in log lines and the report
    pub label: &'static str,
    /// Binaries that indicate presence; any match counts (Debian renames
    /// some, e.g. batcat and fdfind)
    pub bins: &'static [&'static str],
    pub apt: &'static str,
    pub dnf: &'static str,
    pub pacman: &'static str,
    pub brew: &'static str,
}

pub fn binary_on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Resolve a binary to its full path
pub fn binary_path(name: &str) -> Result<std::path::PathBuf> {
    which::which(name).map_err(|e| ShellsmithError::CommandFailed {
        command: format!("resolve '{}'", name),
        reason: e.to_string(),
    })
}

pub fn any_binary_on_path(names: &[&str]) -> bool {
    names.iter().any(|name| binary_on_path(name))
}

/// Fatal precondition: the package manager must exist before any check runs
pub fn ensure_manager(caps: &Capabilities) -> Result<()> {
    if binary_on_path(caps.package_manager) {
        Ok(())
    } else {
        Err(ShellsmithError::PackageManagerMissing {
            manager: caps.package_manager.to_string(),
            platform: caps.os.to_string(),
        })
    }
}

/// Install one package through the platform package manager
pub fn install(caps: &Capabilities, package: &str) -> Result<()> {
    let (program, args) = caps.install_command(package);
    run_command(&program, &args).map_err(|e| ShellsmithError::PackageInstallFailed {
        package: package.to_string(),
        reason: e.to_string(),
    })
}

/// Run a blocking external command, capturing output; non-zero exit is an
/// error carrying the last stderr line
pub fn run_command(program: &str, args: &[String]) -> Result<()> {
    let rendered = render_command(program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ShellsmithError::CommandFailed {
            command: rendered.clone(),
            reason: e.to_string(),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let cause = stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no error output")
        .trim()
        .to_string();

    Err(ShellsmithError::CommandFailed {
        command: rendered,
        reason: format!("{} ({})", cause, output.status),
    })
}

pub fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
