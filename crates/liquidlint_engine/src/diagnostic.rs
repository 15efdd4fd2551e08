//! Diagnostic types for lint results.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    ///
    /// The external linter does not emit warnings yet.
    Warning,
}

impl Severity {
    /// Returns the label printed in diagnostic lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A single issue reported by the external linter for one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line.
    pub line: u32,

    /// 1-based column.
    pub column: u32,

    /// Length of the offending text, in characters.
    pub length: u32,

    /// The diagnostic message. May span several lines.
    pub message: String,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn new(line: u32, column: u32, length: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            length,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Column one past the end of the reported range.
    pub fn end_column(&self) -> u32 {
        self.column.saturating_add(self.length)
    }

    /// The first line of the message, which is all that gets displayed.
    pub fn headline(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }
}
