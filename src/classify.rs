//! Version change classification
//!
//! Versions must have the form `MAJOR.MINOR.PATCH[-pre][+build]`. A single
//! leading `v` is tolerated. Pre-release and build metadata never affect the
//! result: only the three numeric components are compared.

use crate::domain::{ChangeClass, PackageVersion};
use crate::error::VersionParseError;
use semver::Version;
use std::cmp::Ordering;

/// Parse a version string into a semver::Version
pub fn parse_version(input: &str) -> Result<Version, VersionParseError> {
    let trimmed = input.strip_prefix('v').unwrap_or(input);
    Version::parse(trimmed).map_err(|e| VersionParseError::new(input, e))
}

/// Determine which component differs between two versions
///
/// Direction is irrelevant: a downgrade from 2.0.0 to 1.9.0 is `Major`.
pub fn classify(current: &str, latest: &str) -> Result<ChangeClass, VersionParseError> {
    let current = parse_version(current)?;
    let latest = parse_version(latest)?;
    Ok(classify_parsed(&current, &latest))
}

fn classify_parsed(current: &Version, latest: &Version) -> ChangeClass {
    if latest.major != current.major {
        ChangeClass::Major
    } else if latest.minor != current.minor {
        ChangeClass::Minor
    } else if latest.patch != current.patch {
        ChangeClass::Patch
    } else {
        ChangeClass::None
    }
}

/// Classify a package record, attaching the package name to any error
pub fn classify_package(package: &PackageVersion) -> Result<ChangeClass, VersionParseError> {
    classify(&package.current_version, &package.latest_version)
        .map_err(|e| e.with_package(&package.package_name))
}

/// Returns true if latest is numerically older than current
///
/// Unparseable versions are never reported as downgrades.
pub fn is_downgrade(package: &PackageVersion) -> bool {
    match (
        parse_version(&package.current_version),
        parse_version(&package.latest_version),
    ) {
        (Ok(current), Ok(latest)) => numeric_cmp(&latest, &current) == Ordering::Less,
        _ => false,
    }
}

fn numeric_cmp(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
}
