//! Package list loading
//!
//! Supported sources:
//! - `.json` files: an array of records, or `{ "packages": [...] }`
//! - `.toml` files: `[[package]]` tables
//! - `-`: JSON read from stdin

use crate::domain::PackageVersion;
use crate::error::InputError;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn detect(path: &Path) -> Option<InputFormat> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(InputFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(InputFormat::Toml),
            _ => None,
        }
    }
}

/// A single package record as it appears in an input file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageRecord {
    #[serde(alias = "name")]
    pub package_name: String,
    #[serde(alias = "current")]
    pub current_version: String,
    #[serde(alias = "latest")]
    pub latest_version: String,
    /// Editable (locally installed) packages have no registry version
    #[serde(default)]
    pub editable: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    List(Vec<PackageRecord>),
    Wrapped { packages: Vec<PackageRecord> },
}

#[derive(Deserialize)]
struct TomlInput {
    #[serde(default)]
    package: Vec<PackageRecord>,
}

/// Parse package records from JSON content
pub fn parse_json(content: &str, path: &Path) -> Result<Vec<PackageRecord>, InputError> {
    let input: JsonInput = serde_json::from_str(content)
        .map_err(|e| InputError::json_parse_error(path, e.to_string()))?;
    Ok(match input {
        JsonInput::List(records) => records,
        JsonInput::Wrapped { packages } => packages,
    })
}

/// Parse package records from TOML content
pub fn parse_toml(content: &str, path: &Path) -> Result<Vec<PackageRecord>, InputError> {
    let input: TomlInput =
        toml::from_str(content).map_err(|e| InputError::toml_parse_error(path, e.to_string()))?;
    Ok(input.package)
}

/// Convert records into package versions
///
/// Rejects empty names. Editable records are dropped unless `include_editable`.
pub fn into_packages(
    records: Vec<PackageRecord>,
    include_editable: bool,
) -> Result<Vec<PackageVersion>, InputError> {
    let mut packages = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        if record.package_name.trim().is_empty() {
            return Err(InputError::EmptyPackageName { index });
        }
        if record.editable && !include_editable {
            debug!(package = %record.package_name, "skipping editable package");
            continue;
        }
        packages.push(PackageVersion::new(
            record.package_name,
            record.current_version,
            record.latest_version,
        ));
    }

    Ok(packages)
}

/// Load records from a file path, or stdin when the path is `-`
pub fn load_records(path: &Path) -> Result<Vec<PackageRecord>, InputError> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| InputError::read_error("<stdin>", e))?;
        return parse_json(&content, Path::new("<stdin>"));
    }

    let format = InputFormat::detect(path).ok_or_else(|| InputError::unsupported_format(path))?;

    if !path.exists() {
        return Err(InputError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| InputError::read_error(path, e))?;

    match format {
        InputFormat::Json => parse_json(&content, path),
        InputFormat::Toml => parse_toml(&content, path),
    }
}

/// Load package versions from a file path, or stdin when the path is `-`
pub fn load_packages(
    path: impl Into<PathBuf>,
    include_editable: bool,
) -> Result<Vec<PackageVersion>, InputError> {
    let path = path.into();
    info!(path = %path.display(), "loading packages");
    let records = load_records(&path)?;
    let packages = into_packages(records, include_editable)?;
    debug!(count = packages.len(), "loaded packages");
    Ok(packages)
}
