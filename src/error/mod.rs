//! Error types and handling for Shellsmith
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Two failure classes exist: fatal preconditions (unsupported platform,
//! unreachable network, missing package manager) that abort the whole run,
//! and per-check failures that are absorbed into the run report. Both are
//! expressed through the same enum; the provisioner decides which variants
//! propagate and which are recorded.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Shellsmith operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShellsmithError {
    // Fatal preconditions
    #[error("Platform not supported: {details}")]
    #[diagnostic(
        code(shellsmith::platform::not_supported),
        help("Supported platforms: macOS, Debian/Ubuntu, Fedora, Arch Linux")
    )]
    PlatformUnsupported { details: String },

    #[error("Network unreachable (probe of {endpoint} failed)")]
    #[diagnostic(
        code(shellsmith::net::unreachable),
        help("Provisioning clones repositories and downloads fonts; check your connection")
    )]
    NetworkUnreachable { endpoint: String },

    #[error("Package manager '{manager}' not found for {platform}")]
    #[diagnostic(
        code(shellsmith::pkg::manager_missing),
        help("Install the platform package manager first, then re-run")
    )]
    PackageManagerMissing { manager: String, platform: String },

    #[error("Home directory could not be determined")]
    #[diagnostic(
        code(shellsmith::home::not_found),
        help("Pass --home or set SHELLSMITH_HOME")
    )]
    HomeNotFound,

    // Per-check failures (absorbed into the report)
    #[error("Command '{command}' failed: {reason}")]
    #[diagnostic(code(shellsmith::command::failed))]
    CommandFailed { command: String, reason: String },

    #[error("Failed to install package '{package}': {reason}")]
    #[diagnostic(code(shellsmith::pkg::install_failed))]
    PackageInstallFailed { package: String, reason: String },

    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(code(shellsmith::git::clone_failed))]
    GitCloneFailed { url: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(shellsmith::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(code(shellsmith::net::download_failed))]
    DownloadFailed { url: String, reason: String },

    #[error("Failed to extract archive: {reason}")]
    #[diagnostic(code(shellsmith::archive::extract_failed))]
    ArchiveExtractFailed { reason: String },

    #[error("Marker '{marker}' not found in {path}")]
    #[diagnostic(
        code(shellsmith::fragment::marker_not_found),
        help("The file has diverged from the expected layout; edit it manually")
    )]
    MarkerNotFound { path: String, marker: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(shellsmith::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(shellsmith::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to serialize report: {reason}")]
    #[diagnostic(code(shellsmith::report::serialize_failed))]
    ReportSerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shellsmith::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ShellsmithError {
    fn from(err: std::io::Error) -> Self {
        ShellsmithError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for ShellsmithError {
    fn from(err: git2::Error) -> Self {
        ShellsmithError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShellsmithError {
    fn from(err: serde_json::Error) -> Self {
        ShellsmithError::ReportSerializeFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ShellsmithError {
    fn from(err: inquire::InquireError) -> Self {
        ShellsmithError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShellsmithError>;
