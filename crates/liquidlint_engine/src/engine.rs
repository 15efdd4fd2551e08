//! Lint engine abstraction.
//!
//! This module provides the `LintEngine` trait which abstracts the external
//! linter, allowing the orchestrator to run against the real subprocess in
//! production and against an in-memory double in tests.

use std::future::Future;
use std::path::Path;

use crate::{Diagnostic, EngineError};

/// Options passed through to the external linter untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Custom block names the linter should accept.
    pub custom_blocks: Vec<String>,
    /// Custom tag names the linter should accept.
    pub custom_tags: Vec<String>,
}

impl EngineOptions {
    /// Builds the argument list describing these options.
    pub fn to_args(&self) -> Vec<String> {
        let blocks = self
            .custom_blocks
            .iter()
            .flat_map(|name| ["--custom-block".to_string(), name.clone()]);
        let tags = self
            .custom_tags
            .iter()
            .flat_map(|name| ["--custom-tag".to_string(), name.clone()]);
        blocks.chain(tags).collect()
    }
}

/// Trait for linting a single template file.
///
/// Implementations must be shareable across tasks: the dispatcher issues one
/// call per eligible file without waiting for earlier calls to finish.
pub trait LintEngine: Send + Sync + 'static {
    /// Lints one file.
    ///
    /// # Returns
    ///
    /// The diagnostics in the order the linter reported them, or the failure
    /// translated into an `EngineError`.
    fn lint_file(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, EngineError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_args_empty() {
        assert!(EngineOptions::default().to_args().is_empty());
    }

    #[test]
    fn test_to_args_blocks_before_tags() {
        let options = EngineOptions {
            custom_blocks: vec!["section".to_string(), "schema".to_string()],
            custom_tags: vec!["button".to_string()],
        };

        assert_eq!(
            options.to_args(),
            vec![
                "--custom-block",
                "section",
                "--custom-block",
                "schema",
                "--custom-tag",
                "button",
            ]
        );
    }
}
