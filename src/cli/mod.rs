//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run command arguments
//! - status: Status command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod run;
pub mod status;

pub use completions::CompletionsArgs;
pub use run::RunArgs;
pub use status::StatusArgs;

/// Shellsmith - shell environment bootstrapper
///
/// Detects the host platform, installs zsh and a curated tool set through the
/// native package manager, clones community plugins and themes, and
/// idempotently configures the shell startup file.
#[derive(Parser, Debug)]
#[command(
    name = "shellsmith",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Idempotent shell environment bootstrapper",
    long_about = "Shellsmith reconciles the host against a curated shell setup: \
                  zsh plus command-line tools via the platform package manager, \
                  oh-my-zsh with plugins and the powerlevel10k theme, a Nerd Font, \
                  and idempotent config blocks in ~/.zshrc and the kitty config. \
                  Safe to re-run; anything already present is skipped.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shellsmith run                \x1b[90m# Provision this machine\x1b[0m\n   \
                  shellsmith run --dry-run      \x1b[90m# Show what would change\x1b[0m\n   \
                  shellsmith run --yes --json   \x1b[90m# Unattended, machine-readable report\x1b[0m\n   \
                  shellsmith status             \x1b[90m# Presence of every check, applies nothing\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Target home directory (defaults to the current user's home)
    #[arg(long, global = true, env = "SHELLSMITH_HOME")]
    pub home: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the provisioning sequence
    Run(RunArgs),

    /// Show which checks are already satisfied, without applying anything
    Status(StatusArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
