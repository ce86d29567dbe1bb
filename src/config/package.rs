//! Package version from the documentation project's package.json

use crate::error::{BuilderError, CliError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct PackageJson {
    version: Option<String>,
}

/// Reads and validates the `version` field of `<root>/package.json`.
///
/// The version ends up in the served site URL, so it must be valid semver.
pub fn load_package_version(root: &Path) -> Result<String> {
    let path = root.join("package.json");

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        BuilderError::Cli(CliError::ExecutionFailed {
            command: "read_package_json".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let package: PackageJson = serde_json::from_str(&contents).map_err(|e| {
        BuilderError::Cli(CliError::ExecutionFailed {
            command: "parse_package_json".to_string(),
            reason: format!("Failed to parse {}: {}", path.display(), e),
        })
    })?;

    let version = package.version.ok_or_else(|| {
        BuilderError::Cli(CliError::InvalidArguments {
            reason: format!("Missing 'version' in {}", path.display()),
        })
    })?;

    semver::Version::parse(&version).map_err(|e| {
        BuilderError::Cli(CliError::InvalidArguments {
            reason: format!("Invalid version '{}' in {}: {}", version, path.display(), e),
        })
    })?;

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_version() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "ckeditor4-docs", "version": "4.11.4", "private": true }"#,
        )
        .unwrap();

        assert_eq!(load_package_version(dir.path()).unwrap(), "4.11.4");
    }

    #[test]
    fn rejects_missing_or_invalid_version() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{ "name": "x" }"#).unwrap();
        assert!(load_package_version(dir.path()).is_err());

        std::fs::write(dir.path().join("package.json"), r#"{ "version": "four" }"#).unwrap();
        assert!(load_package_version(dir.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_package_version(dir.path()).is_err());
    }
}
