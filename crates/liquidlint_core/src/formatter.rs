//! Terminal rendering of per-file outcomes and the run summary.
//!
//! Every function here is pure: it returns a `Block` of lines tagged with the
//! stream they belong to, and the reporter decides how to write them.

use std::path::Path;

use colored::{ColoredString, Colorize};
use liquidlint_engine::Diagnostic;

use crate::outcome::FileOutcome;
use crate::summary::{RunSummary, SummaryKind};

/// Output stream a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub stream: Stream,
    pub text: String,
}

/// The rendered output for one file (or for the summary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<Line>,
}

impl Block {
    fn push(&mut self, stream: Stream, text: impl Into<String>) {
        self.lines.push(Line {
            stream,
            text: text.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the lines written to `stream`, in order.
    #[cfg(test)]
    pub fn texts(&self, stream: Stream) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.stream == stream)
            .map(|line| line.text.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticFormatter {
    color: bool,
}

impl DiagnosticFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A formatter that never emits ANSI escapes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, path: &Path) -> String {
        self.paint(&path.display().to_string(), |s| s.red().underline())
    }

    pub fn format_outcome(&self, path: &Path, outcome: &FileOutcome, allow_list: &[String]) -> Block {
        match outcome {
            FileOutcome::Missing => self.format_missing(path),
            FileOutcome::Skipped { extension } => self.format_skipped(path, extension, allow_list),
            FileOutcome::Clean => self.format_diagnostics(path, &[]),
            FileOutcome::Linted(diagnostics) => self.format_diagnostics(path, diagnostics),
            FileOutcome::DispatchFailed(_) => Block::default(),
        }
    }

    pub fn format_missing(&self, path: &Path) -> Block {
        let mut block = Block::default();
        block.push(Stream::Stderr, self.header(path));
        block.push(
            Stream::Stderr,
            format!(
                "  {}:{}  {}  {}",
                0,
                0,
                self.paint("error", |s| s.red()),
                "No such file or directory"
            ),
        );
        block.push(Stream::Stdout, "");
        block
    }

    pub fn format_skipped(&self, path: &Path, extension: &str, allow_list: &[String]) -> Block {
        let reason = format!(
            "(file extension \"{}\" does not match one of \"{}\")",
            extension,
            allow_list.join(", ")
        );

        let mut block = Block::default();
        block.push(
            Stream::Stdout,
            format!(
                "{}: not scanning {}",
                self.paint(&path.display().to_string(), |s| s.green()),
                self.paint(&reason, |s| s.dimmed())
            ),
        );
        block
    }

    /// Diagnostics are printed last-reported first.
    pub fn format_diagnostics(&self, path: &Path, diagnostics: &[Diagnostic]) -> Block {
        let mut block = Block::default();

        if diagnostics.is_empty() {
            block.push(
                Stream::Stdout,
                format!(
                    "{}: no issues found",
                    self.paint(&path.display().to_string(), |s| s.green())
                ),
            );
            return block;
        }

        block.push(Stream::Stderr, self.header(path));
        for diagnostic in diagnostics.iter().rev() {
            block.push(
                Stream::Stderr,
                format!(
                    "  {}:{}-{}:{}  {}  {}",
                    diagnostic.line,
                    diagnostic.column,
                    diagnostic.line,
                    diagnostic.end_column(),
                    self.paint(diagnostic.severity.as_str(), |s| s.red()),
                    diagnostic.headline()
                ),
            );
        }
        block.push(Stream::Stdout, "");
        block
    }

    pub fn format_summary(&self, summary: &RunSummary) -> Block {
        let mut block = Block::default();

        match summary.kind() {
            SummaryKind::NoErrors => {
                block.push(
                    Stream::Stdout,
                    format!("{} no errors", self.paint("✔", |s| s.green())),
                );
            }
            SummaryKind::Errors(errors) => block.push(Stream::Stderr, self.errors(errors)),
            SummaryKind::Warnings(warnings) => {
                block.push(Stream::Stderr, self.warnings(warnings))
            }
            SummaryKind::Mixed { errors, warnings } => block.push(
                Stream::Stderr,
                format!(
                    "{} messages ({}, {})",
                    errors + warnings,
                    self.errors(errors),
                    self.warnings(warnings)
                ),
            ),
        }

        block
    }

    fn errors(&self, count: usize) -> String {
        format!(
            "{} {} error{}",
            self.paint("✘", |s| s.red()),
            count,
            plural(count)
        )
    }

    fn warnings(&self, count: usize) -> String {
        format!(
            "{} {} warning{}",
            self.paint("⚠", |s| s.yellow()),
            count,
            plural(count)
        )
    }
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_EXTENSIONS;
    use liquidlint_engine::{EngineError, Severity};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn allow_list() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diagnostics_are_reversed() {
        let diagnostics = vec![
            Diagnostic::new(1, 1, 3, "Unknown tag 'butn'"),
            Diagnostic::new(5, 2, 1, "Unexpected '}'\nwhile parsing output"),
        ];

        let block = DiagnosticFormatter::plain()
            .format_diagnostics(Path::new("templates/page.liquid"), &diagnostics);

        assert_eq!(
            block.texts(Stream::Stderr),
            vec![
                "templates/page.liquid",
                "  5:2-5:3  error  Unexpected '}'",
                "  1:1-1:4  error  Unknown tag 'butn'",
            ]
        );
        assert_eq!(block.texts(Stream::Stdout), vec![""]);
    }

    #[test]
    fn test_header_comes_first() {
        let block = DiagnosticFormatter::plain()
            .format_diagnostics(Path::new("a.html"), &[Diagnostic::new(2, 3, 0, "m")]);

        assert_eq!(block.lines[0].stream, Stream::Stderr);
        assert_eq!(block.lines[0].text, "a.html");
        assert_eq!(block.lines.last().map(|l| l.stream), Some(Stream::Stdout));
    }

    #[test]
    fn test_clean_file() {
        let block = DiagnosticFormatter::plain().format_diagnostics(Path::new("a.md"), &[]);

        assert_eq!(block.texts(Stream::Stdout), vec!["a.md: no issues found"]);
        assert!(block.texts(Stream::Stderr).is_empty());
    }

    #[test]
    fn test_missing_path() {
        let block = DiagnosticFormatter::plain().format_missing(Path::new("nope"));

        assert_eq!(
            block.texts(Stream::Stderr),
            vec!["nope", "  0:0  error  No such file or directory"]
        );
        assert_eq!(block.texts(Stream::Stdout), vec![""]);
    }

    #[test]
    fn test_skipped_file() {
        let block = DiagnosticFormatter::plain().format_skipped(
            Path::new("notes.txt"),
            "txt",
            &allow_list(),
        );

        assert_eq!(
            block.texts(Stream::Stdout),
            vec![
                "notes.txt: not scanning (file extension \"txt\" does not match one of \"md, html, lqd, liquid\")"
            ]
        );
        assert!(block.texts(Stream::Stderr).is_empty());
    }

    #[test]
    fn test_suppressed_failure_renders_nothing() {
        let outcome =
            FileOutcome::DispatchFailed(EngineError::SandboxInclude("header".to_string()));
        let block = DiagnosticFormatter::plain().format_outcome(
            Path::new("x.liquid"),
            &outcome,
            &allow_list(),
        );
        assert!(block.is_empty());
    }

    #[test]
    fn test_format_outcome_dispatches() {
        let formatter = DiagnosticFormatter::plain();
        let path = Path::new("x.liquid");

        assert_eq!(
            formatter.format_outcome(path, &FileOutcome::Missing, &allow_list()),
            formatter.format_missing(path)
        );
        assert_eq!(
            formatter.format_outcome(path, &FileOutcome::Clean, &allow_list()),
            formatter.format_diagnostics(path, &[])
        );
    }

    #[rstest]
    #[case::none(0, 0, Stream::Stdout, "✔ no errors")]
    #[case::one_error(1, 0, Stream::Stderr, "✘ 1 error")]
    #[case::errors(4, 0, Stream::Stderr, "✘ 4 errors")]
    #[case::one_warning(0, 1, Stream::Stderr, "⚠ 1 warning")]
    #[case::warnings(0, 2, Stream::Stderr, "⚠ 2 warnings")]
    #[case::mixed(2, 1, Stream::Stderr, "3 messages (✘ 2 errors, ⚠ 1 warning)")]
    fn test_summary_line(
        #[case] errors: usize,
        #[case] warnings: usize,
        #[case] stream: Stream,
        #[case] expected: &str,
    ) {
        let summary = RunSummary {
            error_count: errors,
            warning_count: warnings,
            ..RunSummary::default()
        };

        let block = DiagnosticFormatter::plain().format_summary(&summary);
        assert_eq!(block.texts(stream), vec![expected]);
        assert_eq!(block.lines.len(), 1);
    }

    #[test]
    fn test_warning_severity_label() {
        let block = DiagnosticFormatter::plain().format_diagnostics(
            Path::new("a.liquid"),
            &[Diagnostic::new(1, 1, 1, "m").with_severity(Severity::Warning)],
        );
        assert_eq!(block.texts(Stream::Stderr)[1], "  1:1-1:2  warning  m");
    }

    #[test]
    fn test_colored_output_wraps_header() {
        colored::control::set_override(true);
        let block = DiagnosticFormatter::new(true).format_missing(Path::new("nope"));
        colored::control::unset_override();

        assert!(block.lines[0].text.contains("\u{1b}["));
        assert!(block.lines[0].text.contains("nope"));
    }
}
