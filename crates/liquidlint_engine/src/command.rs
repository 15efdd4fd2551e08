//! Subprocess-backed lint engine.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::protocol::Response;
use crate::{Diagnostic, EngineError, EngineOptions, LintEngine};

/// Runs the external linter once per file and translates its JSON response.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: OsString,
    args: Vec<OsString>,
    options: EngineOptions,
}

impl CommandEngine {
    /// Creates an engine that runs `program` with no extra arguments.
    pub fn new(program: impl Into<OsString>, options: EngineOptions) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            options,
        }
    }

    /// Adds arguments placed before the pass-through options and the file path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .args(self.options.to_args())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl LintEngine for CommandEngine {
    async fn lint_file(&self, path: &Path) -> Result<Vec<Diagnostic>, EngineError> {
        debug!("Running {:?} on {}", self.program, path.display());

        let output = self
            .command(path)
            .output()
            .await
            .map_err(|source| EngineError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match Response::parse(&stdout) {
            Ok(response) => response.into_result(),
            Err(parse_error) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = stderr
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| parse_error.to_string());
                Err(EngineError::protocol(output.status.to_string(), message))
            }
        }
    }
}
