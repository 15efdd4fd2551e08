//! liquidlint CLI
//!
//! Batch linter for Liquid template files.

mod cli;
mod input;
mod utils;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use liquidlint_core::{
    ConsoleReporter, DiagnosticFormatter, ExitStatus, LintDispatcher, LinterConfig,
};
use liquidlint_engine::CommandEngine;

use crate::cli::Cli;
use crate::utils::create_tokio_runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitStatus> {
    let color = cli.color.should_use_color();
    colored::control::set_override(color);

    let piped = input::piped_paths()?;
    let paths = if piped.is_empty() {
        cli.paths.clone()
    } else {
        piped
    };

    if paths.is_empty() {
        report_no_path()?;
        return Ok(ExitStatus::NoPathGiven);
    }

    let config = load_config(&cli)?;
    let program = match &cli.engine {
        Some(engine) => OsString::from(engine),
        None => config.engine_command(),
    };
    let engine = CommandEngine::new(program, config.engine_options()).with_args(&config.engine.args);

    let dispatcher = LintDispatcher::new(engine, DiagnosticFormatter::new(color), ConsoleReporter)
        .with_max_concurrency(config.jobs);

    let rt = create_tokio_runtime()?;
    let summary = rt.block_on(dispatcher.run(&paths)).into_diagnostic()?;

    Ok(summary.finalize())
}

fn report_no_path() -> Result<()> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{}{}", "Error: ".red(), " no path given".bold()).into_diagnostic()?;
    Cli::command().write_help(&mut stderr).into_diagnostic()?;
    writeln!(stderr).into_diagnostic()
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<LinterConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => find_config()?,
    };

    config.engine.args.extend(cli.engine_args.iter().cloned());
    config.custom_blocks.extend(cli.custom_blocks.iter().cloned());
    config.custom_tags.extend(cli.custom_tags.iter().cloned());
    if cli.jobs.is_some() {
        config.jobs = cli.jobs;
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<LinterConfig> {
    info!("Using config: {}", path.display());
    LinterConfig::from_file(path).into_diagnostic()
}

fn find_config() -> Result<LinterConfig> {
    if let Some(path) = LinterConfig::discover(".") {
        return read_config(&path);
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}
