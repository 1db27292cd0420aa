//! CLI argument parsing module for pkgwatch

use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

/// Parse an RFC 3339 timestamp, normalizing to UTC
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", s, e))
}

/// Package update digest
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pkgwatch",
    version,
    about = "Group package updates by severity and print a digest"
)]
pub struct CliArgs {
    /// Package list (.json or .toml), or '-' for JSON on stdin
    pub input: PathBuf,

    /// Refresh timestamp shown in the header (RFC 3339, default: now)
    #[arg(long, value_parser = parse_timestamp)]
    pub refreshed_at: Option<DateTime<Utc>>,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Color section headings
    #[arg(long)]
    pub color: bool,

    /// Append a count summary line to text output
    #[arg(long)]
    pub summary: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    // Input policy
    /// Skip packages with malformed versions instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Keep packages marked as editable
    #[arg(long)]
    pub include_editable: bool,

    // General options
    /// Enable verbose (debug) logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Refresh timestamp, defaulting to the current time
    pub fn refreshed_at_or_now(&self) -> DateTime<Utc> {
        self.refreshed_at.unwrap_or_else(Utc::now)
    }
}
