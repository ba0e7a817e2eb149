//! Installable-App Manifest
//!
//! The web-app manifest consumed by a host platform when the dashboard
//! is installed. A malformed or mismatched manifest is the one defined
//! failure mode in the system: the server validates the embedded copy at
//! startup and refuses to boot on a bad one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The manifest JSON shipped with the binary and served at
/// `/manifest.json`.
pub const RAW_MANIFEST: &str = include_str!("../static/manifest.json");

/// Errors from parsing or validating a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The document is not valid JSON
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is absent
    #[error("manifest is missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field carries the wrong value
    #[error("manifest field `{field}` must be \"{expected}\", got \"{found}\"")]
    FieldMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

/// Installable-web-app descriptor.
///
/// Only `name` and `display` are contractually checked; the remaining
/// fields pass through to the host platform untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_url: Option<String>,
    pub display: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub icons: Vec<ManifestIcon>,
}

/// One icon entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
}

impl Manifest {
    /// Parse and validate a manifest document.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate the embedded manifest.
    pub fn embedded() -> Result<Self, ManifestError> {
        Self::from_json(RAW_MANIFEST)
    }

    /// Structural check: `name` must be "BiasGPT" and `display` must be
    /// "standalone".
    pub fn validate(&self) -> Result<(), ManifestError> {
        check_field("name", self.name.as_deref(), "BiasGPT")?;
        check_field("display", self.display.as_deref(), "standalone")?;
        Ok(())
    }
}

fn check_field(
    field: &'static str,
    value: Option<&str>,
    expected: &'static str,
) -> Result<(), ManifestError> {
    match value {
        None => Err(ManifestError::MissingField(field)),
        Some(found) if found != expected => Err(ManifestError::FieldMismatch {
            field,
            expected,
            found: found.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_manifest_is_valid() {
        let manifest = Manifest::embedded().unwrap();
        assert_eq!(manifest.name.as_deref(), Some("BiasGPT"));
        assert_eq!(manifest.display.as_deref(), Some("standalone"));
    }

    #[test]
    fn embedded_manifest_parses_as_json() {
        let value: serde_json::Value = serde_json::from_str(RAW_MANIFEST).unwrap();
        assert_eq!(value["name"], "BiasGPT");
        assert_eq!(value["display"], "standalone");
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Manifest::from_json("not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn rejects_missing_name() {
        let err = Manifest::from_json(r#"{"display": "standalone"}"#).unwrap_err();
        assert!(matches!(err, ManifestError::MissingField("name")));
    }

    #[test]
    fn rejects_wrong_display_mode() {
        let raw = r#"{"name": "BiasGPT", "display": "browser"}"#;
        let err = Manifest::from_json(raw).unwrap_err();
        match err {
            ManifestError::FieldMismatch {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "display");
                assert_eq!(expected, "standalone");
                assert_eq!(found, "browser");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_name() {
        let raw = r#"{"name": "OtherApp", "display": "standalone"}"#;
        assert!(Manifest::from_json(raw).is_err());
    }
}
