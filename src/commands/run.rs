//! Run command implementation
//!
//! The provisioning flow:
//! 1. Resolve the OS identity (fatal on unrecognized platforms)
//! 2. Probe fatal preconditions: network reachability, package manager
//! 3. Confirm with the user unless --yes, --dry-run, or unattended
//! 4. Execute the check sequence, best-effort per check
//! 5. Print the grouped summary (or JSON)
//!
//! The process exits 0 whenever the full sequence ran, regardless of
//! individual check failures; only the preconditions exit non-zero.

use std::path::PathBuf;

use console::Style;

use crate::cli::RunArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::net;
use crate::pkg;
use crate::platform::{Capabilities, detection};
use crate::provision::{Provisioner, catalog};

/// Run the provisioning sequence
pub fn run(home: Option<PathBuf>, verbose: bool, args: RunArgs) -> Result<()> {
    let os = detection::resolve()?;
    let caps = Capabilities::for_os(os);
    let home = helpers::resolve_home(home)?;

    println!(
        "{} {} via {} (home: {})",
        Style::new().bold().apply_to("Provisioning"),
        os,
        caps.package_manager,
        home.display()
    );

    if args.dry_run {
        println!("[DRY RUN] No changes will be made.");
    } else {
        net::probe_connectivity()?;
        pkg::ensure_manager(&caps)?;

        if !args.yes && console::user_attended() && !confirm()? {
            println!("Aborted. No changes were made.");
            return Ok(());
        }
    }

    let checks = catalog::checks(&caps, &home);
    let report = Provisioner::new(caps, &home, args.dry_run, verbose).run_sequence(&checks);

    println!();
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
        println!("{} checks reconciled.", report.total());
    }

    Ok(())
}

fn confirm() -> Result<bool> {
    Ok(
        inquire::Confirm::new("Install packages and modify shell configuration?")
            .with_default(true)
            .prompt()?,
    )
}
