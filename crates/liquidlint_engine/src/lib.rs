//! # liquidlint_engine
//!
//! Boundary to the external Liquid template linter.
//!
//! This crate provides:
//! - The `Diagnostic` and `Severity` types reported for a template file
//! - The `LintEngine` trait the orchestrator dispatches files through
//! - `CommandEngine`, which runs the external linter as a subprocess
//! - `EngineError`, the structured failure taxonomy of the boundary
//!
//! ## Architecture
//!
//! The template grammar and its validation rules live in the external
//! program. This crate only translates between that program's JSON responses
//! and Rust types, so the suppressed sandbox-include failure is an explicit
//! error variant rather than a message comparison.
//!
//! ## Features
//!
//! - `test-utils`: exposes `StaticEngine`, an in-memory engine for tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use liquidlint_engine::{CommandEngine, EngineOptions, LintEngine};
//!
//! let engine = CommandEngine::new("liquid-linter", EngineOptions::default());
//! let diagnostics = engine.lint_file(Path::new("templates/page.liquid")).await?;
//! ```

mod command;
mod diagnostic;
mod engine;
mod error;
mod protocol;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use command::CommandEngine;
pub use diagnostic::{Diagnostic, Severity};
pub use engine::{EngineOptions, LintEngine};
pub use error::EngineError;
