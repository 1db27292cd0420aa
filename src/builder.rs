//! Report building
//!
//! Partitions package records into change-class buckets. Each package lands
//! in exactly one bucket and buckets keep input order.

use crate::classify::{classify_package, is_downgrade};
use crate::domain::{PackageVersion, Report};
use crate::error::VersionParseError;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Build a report from an ordered list of packages
///
/// Fails on the first malformed version; no partial report is returned.
pub fn build<I>(packages: I, refreshed_at: DateTime<Utc>) -> Result<Report, VersionParseError>
where
    I: IntoIterator<Item = PackageVersion>,
{
    let mut report = Report::new(refreshed_at);

    for package in packages {
        let class = classify_package(&package)?;
        if is_downgrade(&package) {
            warn!(
                package = %package.package_name,
                current = %package.current_version,
                latest = %package.latest_version,
                "latest version is older than current"
            );
        }
        debug!(package = %package.package_name, %class, "classified");
        report.push(class, package);
    }

    info!(
        packages = report.len(),
        updates = report.updates_available(),
        "built report"
    );
    Ok(report)
}

/// Split packages into those with valid versions and the errors for the rest
///
/// Both outputs preserve input order.
pub fn partition_valid<I>(packages: I) -> (Vec<PackageVersion>, Vec<VersionParseError>)
where
    I: IntoIterator<Item = PackageVersion>,
{
    let mut valid = Vec::new();
    let mut errors = Vec::new();

    for package in packages {
        match classify_package(&package) {
            Ok(_) => valid.push(package),
            Err(e) => {
                warn!("skipping package: {}", e);
                errors.push(e);
            }
        }
    }

    (valid, errors)
}
