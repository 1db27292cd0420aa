//! Text output formatter for human-readable display
//!
//! Layout, one section per change class in fixed order:
//!
//! ```text
//! Packages refreshed at: 2024-01-01T00:00:00Z
//!
//! Major updates:
//! foo (1.2.3)
//!
//! Minor updates:
//! (none)
//! ...
//! ```

use crate::domain::{ChangeClass, PackageVersion, Report};
use crate::output::{OutputFormatter, EMPTY_PLACEHOLDER};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to color section headings
    color: bool,
    /// Whether to append a count summary line
    summary: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool, summary: bool) -> Self {
        Self { color, summary }
    }

    /// Formatter producing the bare digest, no color and no summary
    pub fn plain() -> Self {
        Self::new(false, false)
    }

    /// Format a single entry line
    pub fn format_entry(package: &PackageVersion) -> String {
        format!("{} ({})", package.package_name, package.current_version)
    }

    fn heading(&self, class: ChangeClass) -> String {
        let heading = class.heading();
        if !self.color {
            return heading.to_string();
        }
        match class {
            ChangeClass::Major => heading.red().bold().to_string(),
            ChangeClass::Minor => heading.yellow().bold().to_string(),
            ChangeClass::Patch => heading.green().bold().to_string(),
            ChangeClass::None => heading.dimmed().to_string(),
        }
    }

    fn push_section(&self, out: &mut String, class: ChangeClass, packages: &[PackageVersion]) {
        out.push_str(&self.heading(class));
        out.push('\n');

        if packages.is_empty() {
            out.push_str(EMPTY_PLACEHOLDER);
            out.push('\n');
            return;
        }

        for package in packages {
            out.push_str(&Self::format_entry(package));
            out.push('\n');
        }
    }

    fn summary_line(report: &Report) -> String {
        let parts: Vec<String> = ChangeClass::all()
            .iter()
            .map(|class| {
                let name = match class {
                    ChangeClass::None => "up-to-date",
                    other => other.label(),
                };
                format!("{} {}", report.count(*class), name)
            })
            .collect();
        format!("Summary: {}", parts.join(", "))
    }

    /// Render the report into a string
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        out.push_str("Packages refreshed at: ");
        out.push_str(&report.refreshed_at_display());
        out.push('\n');

        for (class, packages) in report.buckets() {
            out.push('\n');
            self.push_section(&mut out, class, packages);
        }

        if self.summary {
            out.push('\n');
            out.push_str(&Self::summary_line(report));
            out.push('\n');
        }

        out
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        writer.write_all(self.render(report).as_bytes())
    }
}
