//! Package manifest (`cursor-rules.toml`) parsing.
//!
//! The manifest marks the package root and carries the metadata shown in
//! the post-install guidance. Every field is optional.
use std::path::Path;

use serde::Deserialize;

use crate::error::InstallError;

/// File name of the package manifest.
pub const MANIFEST_FILE: &str = "cursor-rules.toml";

/// Parsed `cursor-rules.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// `[package]` table.
    pub package: PackageInfo,
    /// `[rules]` table.
    pub rules: RulesInfo,
}

/// Package metadata from the `[package]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageInfo {
    /// Package name.
    pub name: Option<String>,
    /// Source repository URL.
    pub repository: Option<String>,
    /// Documentation URL.
    pub documentation: Option<String>,
}

/// Rules metadata from the `[rules]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RulesInfo {
    /// Highlights listed under "Features Included".
    pub features: Vec<String>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Manifest`] if the text is not valid TOML or
    /// does not match the manifest schema.
    pub fn parse(content: &str, path: &Path) -> Result<Self, InstallError> {
        toml::from_str(content).map_err(|e| InstallError::Manifest {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Load `cursor-rules.toml` from the package root `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Manifest`] if the file cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self, InstallError> {
        let path = dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| InstallError::Manifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, &path)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let toml = r#"
[package]
name = "cursor-rules"
repository = "https://example.com/repo"
documentation = "https://example.com/docs"

[rules]
features = ["security", "testing"]
"#;
        let manifest = Manifest::parse(toml, Path::new(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.package.name.as_deref(), Some("cursor-rules"));
        assert_eq!(
            manifest.package.repository.as_deref(),
            Some("https://example.com/repo")
        );
        assert_eq!(manifest.rules.features, vec!["security", "testing"]);
    }

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest = Manifest::parse("", Path::new(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn malformed_manifest_is_manifest_error() {
        let err = Manifest::parse("[package\nname = 1", Path::new("/pkg/cursor-rules.toml"))
            .unwrap_err();
        assert!(matches!(err, InstallError::Manifest { .. }));
        assert!(err.to_string().contains("/pkg/cursor-rules.toml"));
    }

    #[test]
    fn wrong_field_type_is_manifest_error() {
        let err = Manifest::parse("[rules]\nfeatures = \"one\"\n", Path::new(MANIFEST_FILE))
            .unwrap_err();
        assert!(matches!(err, InstallError::Manifest { .. }));
    }

    #[test]
    fn load_reads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[package]\nname = \"x\"\n",
        )
        .unwrap();
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.package.name.as_deref(), Some("x"));
    }

    #[test]
    fn load_missing_file_is_manifest_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, InstallError::Manifest { .. }));
    }

    #[test]
    fn bundled_manifest_parses() {
        let manifest = Manifest::load(Path::new(env!("CARGO_MANIFEST_DIR"))).unwrap();
        assert!(manifest.package.repository.is_some());
        assert!(!manifest.rules.features.is_empty());
    }
}
