//! The reconciliation unit
//!
//! A [`Check`] is one idempotent desired-state step: an explicit requirement
//! (re-verified at run time, never assumed from a sibling's success), a
//! presence predicate, and an apply action that only fires when the predicate
//! is false. A check has no identity beyond its position in the catalog and
//! is never persisted.

use std::path::PathBuf;

use crate::error::Result;
use crate::pkg;
use crate::provision::Session;

/// Which bucket a successful apply lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Install,
    Configure,
}

/// Explicit ordering dependency on an earlier check's artifact
#[derive(Debug, Clone)]
pub enum Requirement {
    DirExists(PathBuf),
    BinaryOnPath(&'static str),
}

impl Requirement {
    pub fn satisfied(&self) -> bool {
        match self {
            Requirement::DirExists(path) => path.is_dir(),
            Requirement::BinaryOnPath(name) => pkg::binary_on_path(name),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Requirement::DirExists(path) => format!("directory {}", path.display()),
            Requirement::BinaryOnPath(name) => format!("'{}' on PATH", name),
        }
    }
}

/// Classification of one executed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed(String),
    Configured(String),
    Skipped(String),
    Failed { label: String, reason: String },
}

type ProbeFn = Box<dyn Fn(&mut Session) -> Result<bool>>;
type ApplyFn = Box<dyn Fn(&mut Session) -> Result<()>>;

pub struct Check {
    label: String,
    kind: CheckKind,
    requires: Option<Requirement>,
    slow: bool,
    detail: Option<String>,
    probe: ProbeFn,
    apply: ApplyFn,
}

impl Check {
    pub fn install<P, A>(label: impl Into<String>, probe: P, apply: A) -> Self
    where
        P: Fn(&mut Session) -> Result<bool> + 'static,
        A: Fn(&mut Session) -> Result<()> + 'static,
    {
        Self::new(CheckKind::Install, label, probe, apply)
    }

    pub fn configure<P, A>(label: impl Into<String>, probe: P, apply: A) -> Self
    where
        P: Fn(&mut Session) -> Result<bool> + 'static,
        A: Fn(&mut Session) -> Result<()> + 'static,
    {
        Self::new(CheckKind::Configure, label, probe, apply)
    }

    fn new<P, A>(kind: CheckKind, label: impl Into<String>, probe: P, apply: A) -> Self
    where
        P: Fn(&mut Session) -> Result<bool> + 'static,
        A: Fn(&mut Session) -> Result<()> + 'static,
    {
        Self {
            label: label.into(),
            kind,
            requires: None,
            slow: false,
            detail: None,
            probe: Box::new(probe),
            apply: Box::new(apply),
        }
    }

    /// Declare an explicit ordering dependency
    pub fn requires(mut self, requirement: Requirement) -> Self {
        self.requires = Some(requirement);
        self
    }

    /// Mark the apply action as long-running (shown with a spinner)
    pub fn slow(mut self) -> Self {
        self.slow = true;
        self
    }

    /// Underlying action description, shown in verbose mode
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    pub fn requirement(&self) -> Option<&Requirement> {
        self.requires.as_ref()
    }

    pub fn is_slow(&self) -> bool {
        self.slow
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Evaluate the presence predicate against live state
    pub fn probe(&self, session: &mut Session) -> Result<bool> {
        (self.probe)(session)
    }

    /// Execute the apply action
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        (self.apply)(session)
    }

    /// The bucket a successful apply classifies into
    pub fn success_outcome(&self) -> Outcome {
        match self.kind {
            CheckKind::Install => Outcome::Installed(self.label.clone()),
            CheckKind::Configure => Outcome::Configured(self.label.clone()),
        }
    }
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}
