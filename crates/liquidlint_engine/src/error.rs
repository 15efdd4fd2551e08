//! Engine error types.

use thiserror::Error;

/// Errors that can occur while dispatching a file to the external linter.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The linter refused an `include` that points outside its filesystem
    /// sandbox. This is a known false positive and is never reported.
    #[error("Include outside of the template sandbox: {0}")]
    SandboxInclude(String),

    /// The linter reported a failure of any other kind.
    #[error("Linter failed ({kind}): {message}")]
    Rejected { kind: String, message: String },

    /// The linter program could not be started.
    #[error("Failed to start linter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The linter produced output that is not a valid response.
    #[error("Invalid linter response ({status}): {message}")]
    Protocol { status: String, message: String },
}

impl EngineError {
    /// Creates a protocol error.
    pub fn protocol(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Returns whether this failure is swallowed and treated as a clean file.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::SandboxInclude(_))
    }
}
