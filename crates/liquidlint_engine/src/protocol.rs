//! Wire format spoken by the external linter.
//!
//! The linter prints exactly one JSON document on stdout, either
//! `{"diagnostics": [...]}` or `{"error": {"kind": "...", "message": "..."}}`.

use serde::Deserialize;

use crate::{Diagnostic, EngineError, Severity};

/// Error kind the linter reports for an include outside its sandbox.
pub(crate) const SANDBOX_INCLUDE_KIND: &str = "sandbox_include";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Response {
    Diagnostics(Vec<WireDiagnostic>),
    Error(WireError),
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDiagnostic {
    location: WireLocation,
    message: String,
    #[serde(default)]
    severity: Severity,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    line: u32,
    col: u32,
    #[serde(default)]
    length: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireError {
    kind: String,
    #[serde(default)]
    message: String,
}

impl From<WireDiagnostic> for Diagnostic {
    fn from(wire: WireDiagnostic) -> Self {
        Diagnostic::new(
            wire.location.line,
            wire.location.col,
            wire.location.length,
            wire.message,
        )
        .with_severity(wire.severity)
    }
}

impl From<WireError> for EngineError {
    fn from(wire: WireError) -> Self {
        if wire.kind == SANDBOX_INCLUDE_KIND {
            EngineError::SandboxInclude(wire.message)
        } else {
            EngineError::Rejected {
                kind: wire.kind,
                message: wire.message,
            }
        }
    }
}

impl Response {
    /// Parses a response document.
    pub(crate) fn parse(stdout: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(stdout.trim())
    }

    /// Converts the response into the boundary's result type.
    pub(crate) fn into_result(self) -> Result<Vec<Diagnostic>, EngineError> {
        match self {
            Response::Diagnostics(diagnostics) => {
                Ok(diagnostics.into_iter().map(Diagnostic::from).collect())
            }
            Response::Error(error) => Err(error.into()),
        }
    }
}
