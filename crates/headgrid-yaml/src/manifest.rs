//! Header manifest: a named column tree loaded from YAML or JSON.

use crate::error::ParseError;
use crate::validate::{validate_columns, ValidationWarning};
use headgrid_core::{ColumnNode, ColumnTree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Manifest versions this crate understands.
pub const SUPPORTED_VERSIONS: &[&str] = &["0.1"];

/// Header manifest loaded from `headers.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderManifest {
    /// Manifest format version
    pub headgrid: String,
    /// Table name
    pub name: String,
    /// Table description
    #[serde(default)]
    pub description: String,
    /// Top-level columns, left to right
    pub columns: Vec<ColumnNode>,
}

impl HeaderManifest {
    /// Parse a manifest from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a manifest from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a manifest file; `.json` files are parsed as JSON, anything else
    /// as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        tracing::debug!(path = %path.display(), is_json, "loading header manifest");

        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Read and validate a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let manifest = Self::from_path(path)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the version and the column tree.
    pub fn validate(&self) -> Result<Vec<ValidationWarning>, ParseError> {
        if !SUPPORTED_VERSIONS.contains(&self.headgrid.as_str()) {
            return Err(ParseError::Validation(format!(
                "unsupported manifest version '{}' (supported: {})",
                self.headgrid,
                SUPPORTED_VERSIONS.join(", ")
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ParseError::MissingField("name".to_string()));
        }
        validate_columns(&self.columns)
    }

    /// Column tree snapshot for layout.
    #[must_use]
    pub fn into_tree(self) -> ColumnTree {
        ColumnTree::new(self.columns)
    }
}
