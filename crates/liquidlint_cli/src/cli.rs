//! CLI argument definitions

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};

/// Linter for Liquid template files
///
/// Lints every given file, and every .md, .html, .lqd and .liquid file below
/// every given directory. Paths piped on stdin, one per line, replace the
/// paths given as arguments.
#[derive(Parser)]
#[command(name = "liquidlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to lint
    pub paths: Vec<String>,

    /// Custom block to accept (can be used multiple times)
    #[arg(short = 'b', long = "custom-block", value_name = "NAME")]
    pub custom_blocks: Vec<String>,

    /// Custom tag to accept (can be used multiple times)
    #[arg(short = 't', long = "custom-tag", value_name = "NAME")]
    pub custom_tags: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Linter program run once per file
    #[arg(long, env = "LIQUIDLINT_ENGINE", value_name = "PROGRAM")]
    pub engine: Option<String>,

    /// Extra argument passed to the linter program (can be used multiple times)
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Maximum number of files linted at once
    #[arg(short, long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub jobs: Option<usize>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => detect_color_support(),
        }
    }
}

fn detect_color_support() -> bool {
    color_supported(
        env::var("TERM").ok().as_deref(),
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )
}

/// Output goes to both streams, so both must be terminals.
fn color_supported(term: Option<&str>, stdout_tty: bool, stderr_tty: bool) -> bool {
    if term == Some("dumb") {
        return false;
    }

    stdout_tty && stderr_tty
}
