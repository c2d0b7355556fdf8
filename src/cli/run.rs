use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Provision interactively:\n    shellsmith run\n\n\
                   Preview without touching the system:\n    shellsmith run --dry-run\n\n\
                   Unattended provisioning with a JSON report:\n    shellsmith run --yes --json")]
pub struct RunArgs {
    /// Show what would be installed or configured without applying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Print the final report as JSON instead of the styled summary
    #[arg(long)]
    pub json: bool,
}
