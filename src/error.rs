//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionParseError: A version string is not a valid semantic version
//! - InputError: Issues with loading the package list
//! - OutputError: Failures writing the rendered report

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version parsing errors
    #[error(transparent)]
    Version(#[from] VersionParseError),

    /// Input loading errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Report output errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// A version string that does not parse as `MAJOR.MINOR.PATCH[-pre][+build]`
#[derive(Error, Debug)]
#[error("invalid semantic version '{input}'{}: {source}", package_suffix(.package))]
pub struct VersionParseError {
    /// The offending version string, as supplied
    pub input: String,
    /// Package the version belongs to, when known
    pub package: Option<String>,
    /// Underlying parser error
    #[source]
    pub source: semver::Error,
}

fn package_suffix(package: &Option<String>) -> String {
    match package {
        Some(name) => format!(" for package '{}'", name),
        None => String::new(),
    }
}

impl VersionParseError {
    /// Creates a new VersionParseError
    pub fn new(input: impl Into<String>, source: semver::Error) -> Self {
        VersionParseError {
            input: input.into(),
            package: None,
            source,
        }
    }

    /// Attaches the package name the version belongs to
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

/// Errors related to loading the package list
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file not found
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read input file
    #[error("failed to read input {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Unsupported file extension
    #[error("unsupported input format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// A record with an empty package name
    #[error("package record #{index} has an empty package name")]
    EmptyPackageName { index: usize },
}

/// Errors related to writing the report
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write the report file
    #[error("failed to write report to {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        InputError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InputError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InputError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new UnsupportedFormat error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        InputError::UnsupportedFormat { path: path.into() }
    }
}

impl OutputError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::WriteError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semver_error(input: &str) -> semver::Error {
        semver::Version::parse(input).unwrap_err()
    }

    #[test]
    fn test_version_parse_error_names_input() {
        let err = VersionParseError::new("not-a-version", semver_error("not-a-version"));
        let msg = format!("{}", err);
        assert!(msg.contains("invalid semantic version"));
        assert!(msg.contains("'not-a-version'"));
        assert!(!msg.contains("for package"));
    }

    #[test]
    fn test_version_parse_error_with_package() {
        let err = VersionParseError::new("1.x", semver_error("1.x")).with_package("requests");
        let msg = format!("{}", err);
        assert!(msg.contains("'1.x'"));
        assert!(msg.contains("for package 'requests'"));
        assert_eq!(err.package.as_deref(), Some("requests"));
    }

    #[test]
    fn test_input_error_not_found() {
        let err = InputError::not_found("/path/to/packages.json");
        let msg = format!("{}", err);
        assert!(msg.contains("input file not found"));
        assert!(msg.contains("packages.json"));
    }

    #[test]
    fn test_input_error_json_parse() {
        let err = InputError::json_parse_error("/path/to/packages.json", "expected value");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_input_error_toml_parse() {
        let err = InputError::toml_parse_error("/path/to/packages.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_input_error_unsupported_format() {
        let err = InputError::unsupported_format("/path/to/requirements.txt");
        let msg = format!("{}", err);
        assert!(msg.contains("unsupported input format"));
        assert!(msg.contains("requirements.txt"));
    }

    #[test]
    fn test_input_error_empty_package_name() {
        let err = InputError::EmptyPackageName { index: 3 };
        assert_eq!(
            format!("{}", err),
            "package record #3 has an empty package name"
        );
    }

    #[test]
    fn test_app_error_from_version_error() {
        let version_err = VersionParseError::new("abc", semver_error("abc"));
        let app_err: AppError = version_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_app_error_from_input_error() {
        let input_err = InputError::not_found("/missing.json");
        let app_err: AppError = input_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("input file not found"));
    }

    #[test]
    fn test_app_error_from_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err: AppError = OutputError::write_error("/report.txt", io).into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to write report"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = InputError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
