//! Shellsmith - shell environment bootstrapper
//!
//! Detects the host platform, installs zsh and a curated command-line tool
//! set via the native package manager, clones community plugins and themes,
//! and idempotently configures the shell startup file and the kitty terminal
//! config. Safe to re-run at any time.

use clap::Parser;

mod check;
mod cli;
mod commands;
mod error;
mod fonts;
mod fragments;
mod git;
mod net;
mod pkg;
mod platform;
mod progress;
mod provision;
mod report;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(cli.home, cli.verbose, args),
        Commands::Status(args) => commands::status::run(cli.home, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
