//! pkgwatch - package update digest library
//!
//! This library groups package version changes by severity and renders
//! a plain text digest:
//! - Classification of a version delta (major/minor/patch/none)
//! - Building a report with one ordered bucket per class
//! - Rendering the report as text or JSON

pub mod builder;
pub mod classify;
pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod output;

pub use builder::{build, partition_valid};
pub use classify::classify;
pub use domain::{ChangeClass, PackageVersion, Report};
pub use error::VersionParseError;
pub use output::render;
