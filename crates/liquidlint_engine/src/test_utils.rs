//! Test utilities for liquidlint_engine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crate::{Diagnostic, EngineError, LintEngine};

/// A scripted reply for one file.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Report these diagnostics, in this order.
    Diagnostics(Vec<Diagnostic>),
    /// Fail with the sandbox-include error.
    SandboxInclude,
    /// Fail with a non-suppressed error.
    Fail(String),
}

/// In-memory engine that answers from a fixed table.
///
/// Files without an entry are clean. Each reply can be delayed to force a
/// completion order different from the dispatch order.
#[derive(Debug, Default)]
pub struct StaticEngine {
    replies: HashMap<PathBuf, (Reply, Duration)>,
    calls: Mutex<Vec<PathBuf>>,
}

impl StaticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reply for `path`.
    pub fn reply(self, path: impl Into<PathBuf>, reply: Reply) -> Self {
        self.reply_after(path, reply, Duration::ZERO)
    }

    /// Registers a reply for `path` that is delivered after `delay`.
    pub fn reply_after(mut self, path: impl Into<PathBuf>, reply: Reply, delay: Duration) -> Self {
        self.replies.insert(path.into(), (reply, delay));
        self
    }

    /// Paths dispatched so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl LintEngine for StaticEngine {
    async fn lint_file(&self, path: &Path) -> Result<Vec<Diagnostic>, EngineError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_path_buf());
        }

        let Some((reply, delay)) = self.replies.get(path).cloned() else {
            return Ok(Vec::new());
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Diagnostics(diagnostics) => Ok(diagnostics),
            Reply::SandboxInclude => Err(EngineError::SandboxInclude(
                "This file system doesn't allow includes".to_string(),
            )),
            Reply::Fail(message) => Err(EngineError::Rejected {
                kind: "internal".to_string(),
                message,
            }),
        }
    }
}
