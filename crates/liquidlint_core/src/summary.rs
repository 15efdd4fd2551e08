//! Run-wide aggregation of outcomes and exit-status derivation.

use liquidlint_engine::{Diagnostic, Severity};

use crate::outcome::FileOutcome;

/// Process exit status of a lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every input existed and every file linted cleanly.
    Success,
    /// No path was given at all.
    NoPathGiven,
    /// At least one input path does not exist.
    PathNotFound,
    /// At least one file produced diagnostics.
    LintErrors,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::NoPathGiven => 65,
            ExitStatus::PathNotFound => 66,
            ExitStatus::LintErrors => 67,
        }
    }
}

/// Which closing line a summary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    NoErrors,
    Errors(usize),
    Warnings(usize),
    Mixed { errors: usize, warnings: usize },
}

/// Counts accumulated over a run.
///
/// Outcomes may be recorded in any order; two partial summaries combine with
/// `merge`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub missing_paths: usize,
    pub files_with_diagnostics: usize,
    pub clean_files: usize,
    pub skipped_files: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path that does not exist counts as one error.
    pub fn record_missing(&mut self) {
        self.missing_paths += 1;
        self.error_count += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped_files += 1;
    }

    pub fn record_clean(&mut self) {
        self.clean_files += 1;
    }

    pub fn record_diagnostics(&mut self, diagnostics: &[Diagnostic]) {
        if diagnostics.is_empty() {
            self.record_clean();
            return;
        }

        self.files_with_diagnostics += 1;
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => self.error_count += 1,
                Severity::Warning => self.warning_count += 1,
            }
        }
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Missing => self.record_missing(),
            FileOutcome::Skipped { .. } => self.record_skipped(),
            FileOutcome::Clean | FileOutcome::DispatchFailed(_) => self.record_clean(),
            FileOutcome::Linted(diagnostics) => self.record_diagnostics(diagnostics),
        }
    }

    pub fn merge(mut self, other: RunSummary) -> RunSummary {
        self.error_count += other.error_count;
        self.warning_count += other.warning_count;
        self.missing_paths += other.missing_paths;
        self.files_with_diagnostics += other.files_with_diagnostics;
        self.clean_files += other.clean_files;
        self.skipped_files += other.skipped_files;
        self
    }

    pub fn kind(&self) -> SummaryKind {
        match (self.error_count, self.warning_count) {
            (0, 0) => SummaryKind::NoErrors,
            (errors, 0) => SummaryKind::Errors(errors),
            (0, warnings) => SummaryKind::Warnings(warnings),
            (errors, warnings) => SummaryKind::Mixed { errors, warnings },
        }
    }

    /// Diagnostics take precedence over missing paths.
    pub fn finalize(&self) -> ExitStatus {
        if self.files_with_diagnostics > 0 {
            ExitStatus::LintErrors
        } else if self.missing_paths > 0 {
            ExitStatus::PathNotFound
        } else {
            ExitStatus::Success
        }
    }
}

/// The contribution of a single file.
impl From<&FileOutcome> for RunSummary {
    fn from(outcome: &FileOutcome) -> Self {
        let mut summary = RunSummary::new();
        summary.record(outcome);
        summary
    }
}

impl FromIterator<RunSummary> for RunSummary {
    fn from_iter<I: IntoIterator<Item = RunSummary>>(iter: I) -> Self {
        iter.into_iter().fold(RunSummary::new(), RunSummary::merge)
    }
}
