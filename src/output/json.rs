//! JSON output formatter for machine processing

use crate::domain::{ChangeClass, PackageVersion, Report};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Refresh timestamp (RFC 3339)
    refreshed_at: String,
    /// Counts per bucket
    summary: JsonSummary,
    major: Vec<JsonPackage>,
    minor: Vec<JsonPackage>,
    patch: Vec<JsonPackage>,
    up_to_date: Vec<JsonPackage>,
}

/// JSON representation of bucket counts
#[derive(Serialize)]
struct JsonSummary {
    major: usize,
    minor: usize,
    patch: usize,
    up_to_date: usize,
}

/// JSON representation of a package entry
#[derive(Serialize)]
struct JsonPackage {
    /// Package name
    name: String,
    /// Version currently in use
    current: String,
    /// Latest available version
    latest: String,
}

impl From<&PackageVersion> for JsonPackage {
    fn from(package: &PackageVersion) -> Self {
        Self {
            name: package.package_name.clone(),
            current: package.current_version.clone(),
            latest: package.latest_version.clone(),
        }
    }
}

impl JsonFormatter {
    fn bucket_to_json(report: &Report, class: ChangeClass) -> Vec<JsonPackage> {
        report.bucket(class).iter().map(JsonPackage::from).collect()
    }

    fn report_to_json(report: &Report) -> JsonOutput {
        JsonOutput {
            refreshed_at: report.refreshed_at_display(),
            summary: JsonSummary {
                major: report.count(ChangeClass::Major),
                minor: report.count(ChangeClass::Minor),
                patch: report.count(ChangeClass::Patch),
                up_to_date: report.count(ChangeClass::None),
            },
            major: Self::bucket_to_json(report, ChangeClass::Major),
            minor: Self::bucket_to_json(report, ChangeClass::Minor),
            patch: Self::bucket_to_json(report, ChangeClass::Patch),
            up_to_date: Self::bucket_to_json(report, ChangeClass::None),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = Self::report_to_json(report);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
