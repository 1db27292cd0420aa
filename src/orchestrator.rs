//! Digest orchestrator for coordinating the report workflow
//!
//! This module provides:
//! - Workflow coordination: load → validate → build
//! - Best-effort mode that drops malformed entries instead of failing

use crate::builder::{build, partition_valid};
use crate::cli::CliArgs;
use crate::domain::Report;
use crate::error::{AppError, VersionParseError};
use crate::input::load_packages;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Options controlling a single digest run
#[derive(Debug, Clone)]
pub struct DigestOptions {
    /// Package list path, or `-` for stdin
    pub input: PathBuf,
    /// Timestamp shown in the report header
    pub refreshed_at: DateTime<Utc>,
    /// Drop malformed entries instead of failing
    pub skip_invalid: bool,
    /// Keep editable packages
    pub include_editable: bool,
}

impl DigestOptions {
    /// Create options for the given input with defaults
    pub fn new(input: impl Into<PathBuf>, refreshed_at: DateTime<Utc>) -> Self {
        Self {
            input: input.into(),
            refreshed_at,
            skip_invalid: false,
            include_editable: false,
        }
    }

    /// Create options from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            input: args.input.clone(),
            refreshed_at: args.refreshed_at_or_now(),
            skip_invalid: args.skip_invalid,
            include_editable: args.include_editable,
        }
    }
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct DigestResult {
    /// The built report
    pub report: Report,
    /// Entries dropped in best-effort mode
    pub skipped: Vec<VersionParseError>,
}

impl DigestResult {
    /// Returns true if any entries were dropped
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Orchestrator for coordinating the digest workflow
pub struct Orchestrator {
    options: DigestOptions,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(options: DigestOptions) -> Self {
        Self { options }
    }

    /// Load the package list and build the report
    pub fn run(&self) -> Result<DigestResult, AppError> {
        let packages = load_packages(&self.options.input, self.options.include_editable)?;

        let (packages, skipped) = if self.options.skip_invalid {
            partition_valid(packages)
        } else {
            (packages, Vec::new())
        };

        let report = build(packages, self.options.refreshed_at)?;
        Ok(DigestResult { report, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChangeClass;
    use chrono::TimeZone;
    use std::fs;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn write_packages(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("packages.json");
        fs::write(&path, content).unwrap();
        path
    }

    const MIXED: &str = r#"[
        {"name": "foo", "current": "1.0.0", "latest": "2.0.0"},
        {"name": "bad", "current": "one", "latest": "1.0.0"},
        {"name": "dev", "current": "0.1.0", "latest": "0.1.0", "editable": true}
    ]"#;

    #[test]
    fn test_run_strict_fails_on_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_packages(&dir, MIXED);

        let err = Orchestrator::new(DigestOptions::new(path, timestamp()))
            .run()
            .unwrap_err();
        assert!(matches!(err, AppError::Version(_)));
        assert!(err.to_string().contains("'one'"));
    }

    #[test]
    fn test_run_skip_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_packages(&dir, MIXED);

        let mut options = DigestOptions::new(path, timestamp());
        options.skip_invalid = true;
        let result = Orchestrator::new(options).run().unwrap();

        assert!(result.is_partial());
        assert_eq!(result.skipped[0].package.as_deref(), Some("bad"));
        assert_eq!(result.report.len(), 1);
        assert_eq!(result.report.bucket(ChangeClass::Major)[0].package_name, "foo");
    }

    #[test]
    fn test_run_include_editable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_packages(&dir, MIXED);

        let mut options = DigestOptions::new(path, timestamp());
        options.skip_invalid = true;
        options.include_editable = true;
        let result = Orchestrator::new(options).run().unwrap();

        assert_eq!(result.report.bucket(ChangeClass::None)[0].package_name, "dev");
        assert_eq!(result.report.refreshed_at, timestamp());
    }

    #[test]
    fn test_run_missing_input() {
        let err = Orchestrator::new(DigestOptions::new("/nonexistent/p.json", timestamp()))
            .run()
            .unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn test_options_from_cli() {
        use clap::Parser;
        let args = CliArgs::parse_from([
            "pkgwatch",
            "p.toml",
            "--skip-invalid",
            "--refreshed-at",
            "2024-01-01T00:00:00Z",
        ]);
        let options = DigestOptions::from_cli(&args);
        assert_eq!(options.input, PathBuf::from("p.toml"));
        assert_eq!(options.refreshed_at, timestamp());
        assert!(options.skip_invalid);
        assert!(!options.include_editable);
    }
}
