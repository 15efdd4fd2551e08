//! Concurrent dispatch of eligible files to the lint engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use liquidlint_engine::{Diagnostic, EngineError, LintEngine};
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::debug;

use crate::error::LinterError;
use crate::filter::{CandidateFile, Eligibility, ExtensionFilter};
use crate::formatter::DiagnosticFormatter;
use crate::outcome::FileOutcome;
use crate::reporter::Reporter;
use crate::resolver::{PathResolver, ResolvedTarget};
use crate::summary::RunSummary;

type Dispatched = (PathBuf, Result<Vec<Diagnostic>, EngineError>);

/// Drives a whole lint run.
///
/// Missing and skipped paths are reported as soon as they are resolved. Every
/// eligible file is dispatched without waiting for earlier ones; each file's
/// block is reported when its dispatch completes, and the summary is reported
/// only after every dispatch has settled.
pub struct LintDispatcher<E: LintEngine> {
    engine: Arc<E>,
    resolver: PathResolver,
    filter: ExtensionFilter,
    formatter: DiagnosticFormatter,
    reporter: Box<dyn Reporter>,
    limit: Option<Arc<Semaphore>>,
}

impl<E: LintEngine> LintDispatcher<E> {
    pub fn new(engine: E, formatter: DiagnosticFormatter, reporter: impl Reporter + 'static) -> Self {
        let filter = ExtensionFilter::default();
        Self {
            engine: Arc::new(engine),
            resolver: PathResolver::new(filter.clone()),
            filter,
            formatter,
            reporter: Box::new(reporter),
            limit: None,
        }
    }

    /// Caps the number of dispatches in flight. `None` (or zero) means no cap.
    ///
    /// Values above `Semaphore::MAX_PERMITS` saturate to it.
    pub fn with_max_concurrency(mut self, jobs: Option<usize>) -> Self {
        self.limit = jobs
            .filter(|&jobs| jobs > 0)
            .map(|jobs| Arc::new(Semaphore::new(jobs.min(Semaphore::MAX_PERMITS))));
        self
    }

    #[cfg(test)]
    fn engine(&self) -> &E {
        &self.engine
    }

    /// Lints every input path and returns the aggregated summary.
    ///
    /// Each settled file contributes its own partial summary; the partials are
    /// folded together once every dispatch has settled.
    ///
    /// A non-suppressed engine failure aborts the run: pending dispatches are
    /// cancelled and no summary is reported.
    pub async fn run<S: AsRef<str>>(&self, inputs: &[S]) -> Result<RunSummary, LinterError> {
        let mut partials = Vec::new();
        let mut pending = JoinSet::new();

        for input in inputs {
            match self.resolve(input.as_ref()).await? {
                ResolvedTarget::Missing(path) => {
                    partials.push(self.settle(&path, FileOutcome::Missing));
                }
                ResolvedTarget::SingleFile(path) => self.submit(&mut partials, &mut pending, path),
                ResolvedTarget::DirectoryExpansion(files) => {
                    for path in files {
                        self.submit(&mut partials, &mut pending, path);
                    }
                }
            }
        }

        debug!("Waiting for {} dispatches", pending.len());

        while let Some(joined) = pending.join_next().await {
            let (path, result) = joined?;
            let outcome = match result {
                Ok(diagnostics) => FileOutcome::from_diagnostics(diagnostics),
                Err(e) if e.is_suppressed() => {
                    debug!("Ignoring include failure in {}: {}", path.display(), e);
                    FileOutcome::DispatchFailed(e)
                }
                Err(e) => return Err(LinterError::dispatch(path, e)),
            };
            partials.push(self.settle(&path, outcome));
        }

        let summary: RunSummary = partials.into_iter().collect();
        self.reporter.report(&self.formatter.format_summary(&summary));
        Ok(summary)
    }

    /// Resolves one input on the blocking pool, since directory walks hit the
    /// filesystem.
    async fn resolve(&self, input: &str) -> Result<ResolvedTarget, LinterError> {
        let resolver = self.resolver.clone();
        let input = input.to_string();
        Ok(task::spawn_blocking(move || resolver.resolve(input)).await?)
    }

    fn submit(
        &self,
        partials: &mut Vec<RunSummary>,
        pending: &mut JoinSet<Dispatched>,
        path: PathBuf,
    ) {
        let candidate = CandidateFile::new(path);
        if let Eligibility::Skipped { extension } = self.filter.classify(&candidate) {
            partials.push(self.settle(&candidate.path, FileOutcome::Skipped { extension }));
            return;
        }

        let engine = Arc::clone(&self.engine);
        let limit = self.limit.clone();
        let path = candidate.path;
        pending.spawn(async move {
            let _permit = match limit {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };
            let result = engine.lint_file(&path).await;
            (path, result)
        });
    }

    /// Reports the outcome's block and returns its contribution to the summary.
    fn settle(&self, path: &Path, outcome: FileOutcome) -> RunSummary {
        let block = self
            .formatter
            .format_outcome(path, &outcome, self.filter.allow_list());
        if !block.is_empty() {
            self.reporter.report(&block);
        }
        RunSummary::from(&outcome)
    }
}
