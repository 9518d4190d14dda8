//! Validation report: diagnostics in the order the checks produced them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fails the run.
    Error,
    /// Informational; the run still passes.
    Warning,
}

/// One finding from a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "ERROR: {}", self.message),
            Severity::Warning => write!(f, "WARN:  {}", self.message),
        }
    }
}

/// Result of a whole run, derived from the collected diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    PassedWithWarnings,
    Failure,
}

impl Outcome {
    /// Process exit code: warnings alone do not fail the run.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Passed | Outcome::PassedWithWarnings => 0,
            Outcome::Failure => 1,
        }
    }
}

/// Accumulated diagnostics for one validator run. Created empty, passed to each check, then read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
    skills_checked: usize,
    registry_refs_checked: usize,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into());
    }

    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Error => log::debug!("error: {}", message),
            Severity::Warning => log::debug!("warning: {}", message),
        }
        self.diagnostics.push(Diagnostic { severity, message });
    }

    pub(crate) fn count_skill(&mut self) {
        self.skills_checked += 1;
    }

    pub(crate) fn count_registry_ref(&mut self) {
        self.registry_refs_checked += 1;
    }

    /// Skill directories inspected by the directory rules.
    pub fn skills_checked(&self) -> usize {
        self.skills_checked
    }

    /// Registry skill paths resolved by the registry rules.
    pub fn registry_refs_checked(&self) -> usize {
        self.registry_refs_checked
    }

    /// All diagnostics, in check order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn outcome(&self) -> Outcome {
        if self.error_count() > 0 {
            Outcome::Failure
        } else if self.warning_count() > 0 {
            Outcome::PassedWithWarnings
        } else {
            Outcome::Passed
        }
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self) -> String {
        match self.outcome() {
            Outcome::Failure => format!(
                "Failed: {} error(s), {} warning(s)",
                self.error_count(),
                self.warning_count()
            ),
            Outcome::PassedWithWarnings => {
                format!("Passed with {} warning(s), no errors.", self.warning_count())
            }
            Outcome::Passed => "All checks passed.".to_string(),
        }
    }
}
