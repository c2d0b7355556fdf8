//! Status command implementation
//!
//! Evaluates every check's requirement and presence predicate against the
//! live system and reports the result without applying anything. Useful as a
//! pre-flight view of what `run` would change.

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use crate::check::Check;
use crate::cli::StatusArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::platform::{Capabilities, detection};
use crate::provision::{Session, catalog};

#[derive(Debug, Default, Serialize)]
struct Status {
    satisfied: Vec<String>,
    pending: Vec<String>,
    blocked: Vec<BlockedEntry>,
}

#[derive(Debug, Serialize)]
struct BlockedEntry {
    label: String,
    reason: String,
}

/// Run the status command
pub fn run(home: Option<PathBuf>, args: StatusArgs) -> Result<()> {
    let os = detection::resolve()?;
    let caps = Capabilities::for_os(os);
    let home = helpers::resolve_home(home)?;

    let checks = catalog::checks(&caps, &home);
    let mut session = Session::new(caps, home);
    let status = evaluate(&checks, &mut session);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        render(&status);
    }

    Ok(())
}

fn evaluate(checks: &[Check], session: &mut Session) -> Status {
    let mut status = Status::default();

    for check in checks {
        let label = check.label().to_string();

        if let Some(requirement) = check.requirement() {
            if !requirement.satisfied() {
                status.blocked.push(BlockedEntry {
                    label,
                    reason: format!("requires {}", requirement.describe()),
                });
                continue;
            }
        }

        match check.probe(session) {
            Ok(true) => status.satisfied.push(label),
            Ok(false) => status.pending.push(label),
            Err(e) => status.blocked.push(BlockedEntry {
                label,
                reason: e.to_string(),
            }),
        }
    }

    status
}

fn render(status: &Status) {
    for label in &status.satisfied {
        println!("{} {}", Style::new().green().apply_to("      ok"), label);
    }
    for label in &status.pending {
        println!("{} {}", Style::new().yellow().apply_to(" pending"), label);
    }
    for entry in &status.blocked {
        println!(
            "{} {} ({})",
            Style::new().red().apply_to(" blocked"),
            entry.label,
            entry.reason
        );
    }

    println!(
        "\n{} satisfied, {} pending, {} blocked",
        status.satisfied.len(),
        status.pending.len(),
        status.blocked.len()
    );
}
