//! pkgwatch - package update digest CLI
//!
//! Reads a list of packages with their current and latest versions and
//! prints a digest grouped by major, minor, and patch updates.

use clap::Parser;
use pkgwatch::cli::CliArgs;
use pkgwatch::error::OutputError;
use pkgwatch::orchestrator::{DigestOptions, Orchestrator};
use pkgwatch::output::{create_formatter, OutputConfig};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let output_config =
        OutputConfig::from_cli(args.json, args.color, args.summary, args.verbose, args.quiet);
    init_logging(output_config.verbosity.log_level());

    // colored disables itself when stdout is not a terminal
    if output_config.color {
        colored::control::set_override(true);
    }

    match run(args, output_config) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Main application logic
fn run(args: CliArgs, output_config: OutputConfig) -> anyhow::Result<ExitCode> {
    let result = Orchestrator::new(DigestOptions::from_cli(&args)).run()?;
    let report = &result.report;

    let formatter = create_formatter(&output_config);
    match &args.output {
        Some(path) => {
            // Render fully before creating the file
            let mut buffer = Vec::new();
            formatter
                .format(report, &mut buffer)
                .map_err(|e| OutputError::write_error(path, e))?;
            fs::write(path, &buffer).map_err(|e| OutputError::write_error(path, e))?;
            info!(path = %path.display(), "wrote report");
        }
        None => {
            let mut stdout = io::stdout().lock();
            formatter.format(report, &mut stdout)?;
            stdout.flush()?;
        }
    }

    if result.is_partial() {
        // Partial success - some entries were dropped
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
