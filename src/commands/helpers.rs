//! Shared command helpers

use std::path::PathBuf;

use crate::error::{Result, ShellsmithError};

/// Target home directory: the --home flag / SHELLSMITH_HOME env first, the
/// current user's home otherwise
pub fn resolve_home(flag: Option<PathBuf>) -> Result<PathBuf> {
    flag.or_else(dirs::home_dir)
        .ok_or(ShellsmithError::HomeNotFound)
}
