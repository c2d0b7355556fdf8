//! Run report: the four outcome buckets
//!
//! Created empty at run start, appended to by every check, rendered once at
//! run end, then discarded. Nothing persists across runs; idempotence comes
//! from re-deriving presence each time, not from run history.

use console::Style;
use serde::Serialize;
use std::fmt::Write as _;

use crate::check::Outcome;
use crate::error::Result;

/// A check that errored, with the recorded cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCheck {
    pub label: String,
    pub reason: String,
}

/// Outcome buckets accumulated across one run
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub installed: Vec<String>,
    pub configured: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedCheck>,
}

impl Report {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Installed(label) => self.installed.push(label),
            Outcome::Configured(label) => self.configured.push(label),
            Outcome::Skipped(label) => self.skipped.push(label),
            Outcome::Failed { label, reason } => self.failed.push(FailedCheck { label, reason }),
        }
    }

    pub fn total(&self) -> usize {
        self.installed.len() + self.configured.len() + self.skipped.len() + self.failed.len()
    }

    /// Render the grouped summary; empty buckets are omitted
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", Style::new().bold().apply_to("Summary"));

        render_bucket(&mut out, "Installed", &self.installed, Style::new().green());
        render_bucket(
            &mut out,
            "Configured",
            &self.configured,
            Style::new().cyan(),
        );
        render_bucket(&mut out, "Skipped", &self.skipped, Style::new().dim());

        if !self.failed.is_empty() {
            let header = format!("Failed ({})", self.failed.len());
            let _ = writeln!(out, "  {}", Style::new().red().bold().apply_to(header));
            for failure in &self.failed {
                let _ = writeln!(out, "    - {}: {}", failure.label, failure.reason);
            }
        }

        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn render_bucket(out: &mut String, name: &str, labels: &[String], style: Style) {
    if labels.is_empty() {
        return;
    }
    let header = format!("{} ({})", name, labels.len());
    let _ = writeln!(out, "  {}", style.bold().apply_to(header));
    for label in labels {
        let _ = writeln!(out, "    - {}", label);
    }
}
