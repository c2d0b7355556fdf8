//! The provisioner
//!
//! Executes a fixed, ordered sequence of checks once per invocation,
//! classifies each into an outcome bucket, and never applies the same change
//! twice across repeated invocations. Per-check failures are absorbed and
//! recorded; only the startup preconditions (platform, network, package
//! manager) abort a run, and those are probed by the command layer before
//! the sequence starts.

use std::path::{Path, PathBuf};

use crate::check::{Check, CheckKind, Outcome};
use crate::fragments::Editors;
use crate::platform::Capabilities;
use crate::progress;
use crate::report::Report;
use crate::ui;

pub mod catalog;

/// State shared by the checks of one run: the resolved capability table, the
/// target home directory, and the staged config file editors
pub struct Session {
    pub caps: Capabilities,
    pub home: PathBuf,
    pub editors: Editors,
}

impl Session {
    pub fn new(caps: Capabilities, home: PathBuf) -> Self {
        Self {
            caps,
            home,
            editors: Editors::default(),
        }
    }
}

pub struct Provisioner {
    session: Session,
    dry_run: bool,
    verbose: bool,
    report: Report,
}

impl Provisioner {
    pub fn new(caps: Capabilities, home: &Path, dry_run: bool, verbose: bool) -> Self {
        Self {
            session: Session::new(caps, home.to_path_buf()),
            dry_run,
            verbose,
            report: Report::default(),
        }
    }

    /// Run every check in declared order, then flush the staged config
    /// edits, one batched rewrite per file
    pub fn run_sequence(mut self, checks: &[Check]) -> Report {
        for check in checks {
            let outcome = self.run_check(check);
            self.report.record(outcome);
        }

        for (path, error) in self.session.editors.flush_all() {
            let label = format!("update {}", path.display());
            ui::fail(&format!("{}: {}", label, error));
            self.report.record(Outcome::Failed {
                label,
                reason: error.to_string(),
            });
        }

        self.report
    }

    /// One reconciliation step: requirement, presence predicate, conditional
    /// apply, classification
    fn run_check(&mut self, check: &Check) -> Outcome {
        let label = check.label().to_string();

        if let Some(requirement) = check.requirement() {
            if !requirement.satisfied() {
                let reason = format!("requires {}", requirement.describe());
                ui::fail(&format!("{}: {}", label, reason));
                return Outcome::Failed { label, reason };
            }
        }

        match check.probe(&mut self.session) {
            Ok(true) => {
                ui::skip(&format!("{} already {}", label, applied_word(check.kind())));
                Outcome::Skipped(label)
            }
            Ok(false) if self.dry_run => {
                ui::info(&format!("{} would be {}", label, applied_word(check.kind())));
                check.success_outcome()
            }
            Ok(false) => self.apply_check(check, label),
            Err(e) => {
                ui::fail(&format!("{}: {}", label, e));
                Outcome::Failed {
                    label,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn apply_check(&mut self, check: &Check, label: String) -> Outcome {
        if self.verbose {
            if let Some(detail) = check.detail() {
                ui::detail(detail);
            }
        }

        let spinner = check
            .is_slow()
            .then(|| progress::spinner(&format!("{}...", label)));
        let result = check.apply(&mut self.session);
        if let Some(pb) = spinner {
            progress::finish(pb);
        }

        match result {
            Ok(()) => {
                ui::done(&format!("{} {}", label, applied_word(check.kind())));
                check.success_outcome()
            }
            Err(e) => {
                ui::fail(&format!("{}: {}", label, e));
                Outcome::Failed {
                    label,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn applied_word(kind: CheckKind) -> &'static str {
    match kind {
        CheckKind::Install => "installed",
        CheckKind::Configure => "configured",
    }
}
