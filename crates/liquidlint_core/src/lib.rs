//! # liquidlint_core
//!
//! Core orchestration engine for liquidlint.
//!
//! This crate provides:
//! - Path resolution and recursive template discovery
//! - Extension filtering against the fixed allow-list
//! - Concurrent dispatch of files to the external linter
//! - Deterministic per-file formatting of diagnostics
//! - Aggregation of outcomes into a summary and exit status
//!
//! ## Example
//!
//! ```rust,ignore
//! use liquidlint_core::{ConsoleReporter, DiagnosticFormatter, LintDispatcher};
//! use liquidlint_engine::{CommandEngine, EngineOptions};
//!
//! let engine = CommandEngine::new("liquid-linter", EngineOptions::default());
//! let dispatcher = LintDispatcher::new(engine, DiagnosticFormatter::plain(), ConsoleReporter);
//!
//! let summary = dispatcher.run(&["templates".to_string()]).await?;
//! std::process::exit(summary.finalize().code().into());
//! ```

mod config;
mod dispatcher;
mod error;
mod filter;
mod formatter;
mod outcome;
mod reporter;
mod resolver;
mod summary;

#[cfg(test)]
pub mod test_utils;

pub use config::{EngineConfig, LinterConfig};
pub use dispatcher::LintDispatcher;
pub use error::LinterError;
pub use filter::{CandidateFile, DEFAULT_EXTENSIONS, Eligibility, ExtensionFilter};
pub use formatter::{Block, DiagnosticFormatter, Line, Stream};
pub use outcome::FileOutcome;
pub use reporter::{ConsoleReporter, Reporter};
pub use resolver::{PathResolver, ResolvedTarget};
pub use summary::{ExitStatus, RunSummary, SummaryKind};

pub use liquidlint_engine::{Diagnostic, EngineError, EngineOptions, LintEngine, Severity};
