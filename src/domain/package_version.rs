//! Observed version state of a single package

use std::fmt;

/// One package's current and latest known version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersion {
    /// Package name
    pub package_name: String,
    /// Version currently in use
    pub current_version: String,
    /// Latest available version (may equal current)
    pub latest_version: String,
}

impl PackageVersion {
    /// Creates a new PackageVersion
    pub fn new(
        package_name: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
        }
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.package_name, self.current_version, self.latest_version
        )
    }
}
