//! Linter error types.

use std::path::PathBuf;

use liquidlint_engine::EngineError;
use thiserror::Error;

/// Errors that abort a lint run.
///
/// Per-path problems (missing paths, skipped extensions, suppressed include
/// failures) are outcomes, not errors; only what is listed here stops a run.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external linter failed in a way that is not a content problem.
    #[error("Failed to lint {}: {source}", path.display())]
    Dispatch {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a dispatch error for `path`.
    pub fn dispatch(path: impl Into<PathBuf>, source: EngineError) -> Self {
        Self::Dispatch {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for LinterError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("Lint task did not complete: {}", err))
    }
}
