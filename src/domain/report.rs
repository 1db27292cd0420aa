//! Report types
//!
//! A report holds the refresh timestamp and one ordered bucket per change
//! class. Buckets keep the relative order in which packages were added.

use super::{ChangeClass, PackageVersion};
use chrono::{DateTime, SecondsFormat, Utc};

/// Packages grouped by change class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// When the package data was refreshed
    pub refreshed_at: DateTime<Utc>,
    major: Vec<PackageVersion>,
    minor: Vec<PackageVersion>,
    patch: Vec<PackageVersion>,
    up_to_date: Vec<PackageVersion>,
}

impl Report {
    /// Creates an empty report
    pub fn new(refreshed_at: DateTime<Utc>) -> Self {
        Self {
            refreshed_at,
            major: Vec::new(),
            minor: Vec::new(),
            patch: Vec::new(),
            up_to_date: Vec::new(),
        }
    }

    /// Appends a package to the bucket for `class`
    pub fn push(&mut self, class: ChangeClass, package: PackageVersion) {
        self.bucket_mut(class).push(package);
    }

    /// Packages in the bucket for `class`, in insertion order
    pub fn bucket(&self, class: ChangeClass) -> &[PackageVersion] {
        match class {
            ChangeClass::Major => &self.major,
            ChangeClass::Minor => &self.minor,
            ChangeClass::Patch => &self.patch,
            ChangeClass::None => &self.up_to_date,
        }
    }

    fn bucket_mut(&mut self, class: ChangeClass) -> &mut Vec<PackageVersion> {
        match class {
            ChangeClass::Major => &mut self.major,
            ChangeClass::Minor => &mut self.minor,
            ChangeClass::Patch => &mut self.patch,
            ChangeClass::None => &mut self.up_to_date,
        }
    }

    /// Iterates buckets in report order
    pub fn buckets(&self) -> impl Iterator<Item = (ChangeClass, &[PackageVersion])> {
        ChangeClass::all()
            .iter()
            .map(move |class| (*class, self.bucket(*class)))
    }

    /// Number of packages in the bucket for `class`
    pub fn count(&self, class: ChangeClass) -> usize {
        self.bucket(class).len()
    }

    /// Total number of packages across all buckets
    pub fn len(&self) -> usize {
        self.buckets().map(|(_, packages)| packages.len()).sum()
    }

    /// Returns true if the report holds no packages
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of packages with any update available
    pub fn updates_available(&self) -> usize {
        self.buckets()
            .filter(|(class, _)| class.is_update())
            .map(|(_, packages)| packages.len())
            .sum()
    }

    /// Timestamp formatted as RFC 3339 with a `Z` suffix
    pub fn refreshed_at_display(&self) -> String {
        self.refreshed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
