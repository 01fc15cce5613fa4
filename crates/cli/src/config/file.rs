//! Version map files
//!
//! ```json
//! {
//!   "default_version": "v2",
//!   "classes": {
//!     "Greeter": { "v1": "LegacyGreeter", "v2": "GreeterV2", "retired": null }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use instantiator_core::{VersionMap, VersionTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// JSON representation of a version map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionMapFile {
    /// Version applied when the caller does not supply one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version: Option<String>,

    /// Per-class version tables; a `null` target vetoes the version
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classes: VersionTable,
}

impl VersionMapFile {
    /// Parse a version map from JSON text
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse version map")
    }

    /// Load a version map file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading version map from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Build the selector described by this file
    pub fn to_version_map(&self) -> VersionMap {
        VersionMap::from_table(self.default_version.clone(), self.classes.clone())
    }
}

impl From<&VersionMap> for VersionMapFile {
    fn from(map: &VersionMap) -> Self {
        Self {
            default_version: map.default_version().map(str::to_string),
            classes: map.classes().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instantiator_core::Selection;

    #[test]
    fn test_parse_and_select() {
        let file = VersionMapFile::parse(
            r#"{
                "default_version": "v2",
                "classes": {
                    "Greeter": { "v1": "LegacyGreeter", "v2": "GreeterV2", "retired": null }
                }
            }"#,
        )
        .unwrap();
        let map = file.to_version_map();

        assert_eq!(map.default_version(), Some("v2"));
        assert!(matches!(
            map.lookup("Greeter", None),
            Selection::Class(ref name) if name == "GreeterV2"
        ));
        assert!(matches!(map.lookup("Greeter", Some("retired")), Selection::Veto));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let error = VersionMapFile::parse(r#"{ "clases": {} }"#).unwrap_err();

        assert!(error.to_string().starts_with("Failed to parse version map"));
    }

    #[test]
    fn test_from_version_map() {
        let map = VersionMap::new()
            .redirect("Mailer", "v2", "SmtpMailer")
            .with_default_version("v2");

        let file = VersionMapFile::from(&map);

        assert_eq!(file.default_version.as_deref(), Some("v2"));
        assert_eq!(file.classes["Mailer"]["v2"].as_deref(), Some("SmtpMailer"));
    }
}
