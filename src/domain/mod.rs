//! Core domain models for pkgwatch
//!
//! This module contains the fundamental types used throughout the application:
//! - Package version records as supplied by the caller
//! - Change classes describing the severity of a version delta
//! - The grouped report built from a list of package records

mod change_class;
mod package_version;
mod report;

pub use change_class::ChangeClass;
pub use package_version::PackageVersion;
pub use report::Report;
