//! Repository cloning for plugin and theme installs
//!
//! Clones are shallow (depth 1); the provisioner never updates an existing
//! clone, it only creates missing ones. Presence is "the target directory
//! exists", matching how the checks re-derive state from the filesystem.

use std::path::Path;

use git2::{FetchOptions, build::RepoBuilder};

use crate::error::{Result, ShellsmithError};

/// Clone a repository to a target directory, shallow
pub fn clone(url: &str, target: &Path) -> Result<()> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.depth(1);

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    builder
        .clone(url, target)
        .map(|_| ())
        .map_err(|e| ShellsmithError::GitCloneFailed {
            url: url.to_string(),
            reason: interpret_git_error(&e),
        })
}

/// Translate libgit2 errors into actionable text
fn interpret_git_error(e: &git2::Error) -> String {
    match e.class() {
        git2::ErrorClass::Net => format!("network error: {}", e.message()),
        git2::ErrorClass::Http => format!("HTTP error: {}", e.message()),
        git2::ErrorClass::Ssl => format!("TLS error: {}", e.message()),
        _ if e.code() == git2::ErrorCode::Exists => {
            "target directory already exists and is not empty".to_string()
        }
        _ => e.message().to_string(),
    }
}
