//! Per-file lint outcomes.

use liquidlint_engine::{Diagnostic, EngineError};

/// The result for one file after resolution, filtering, and dispatch.
#[derive(Debug)]
pub enum FileOutcome {
    /// The path does not exist.
    Missing,
    /// The extension is not in the allow-list.
    Skipped { extension: String },
    /// The linter reported nothing.
    Clean,
    /// Diagnostics in the order the linter reported them.
    Linted(Vec<Diagnostic>),
    /// The linter failed with a suppressed error; treated as no diagnostics.
    DispatchFailed(EngineError),
}

impl FileOutcome {
    /// Builds the outcome of a successful dispatch.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        if diagnostics.is_empty() {
            Self::Clean
        } else {
            Self::Linted(diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_diagnostics() {
        assert!(matches!(FileOutcome::from_diagnostics(vec![]), FileOutcome::Clean));
        assert!(matches!(
            FileOutcome::from_diagnostics(vec![Diagnostic::new(1, 1, 1, "x")]),
            FileOutcome::Linted(ref d) if d.len() == 1
        ));
    }
}
