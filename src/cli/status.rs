use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Print the status as JSON instead of the styled listing
    #[arg(long)]
    pub json: bool,
}
