//! Table-driven version selector
//!
//! A [`VersionMap`] maps `(class, version)` pairs to target class names. A
//! vetoed pair resolves to nothing, and instances can be pinned to a pair.

use super::{Selection, VersionSelector};
use crate::error::BoxError;
use crate::instance::Instance;
use std::collections::{BTreeMap, HashMap};

/// Per-class version tables; `None` vetoes the version
pub type VersionTable = BTreeMap<String, BTreeMap<String, Option<String>>>;

/// Version selector backed by a lookup table
#[derive(Clone, Default)]
pub struct VersionMap {
    default_version: Option<String>,
    classes: VersionTable,
    pinned: HashMap<(String, String), Instance>,
}

impl std::fmt::Debug for VersionMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionMap")
            .field("default_version", &self.default_version)
            .field("classes", &self.classes)
            .field("pinned", &self.pinned.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl VersionMap {
    /// Create an empty map; every request passes through unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map from a prepared table
    pub fn from_table(default_version: Option<String>, classes: VersionTable) -> Self {
        Self {
            default_version,
            classes,
            pinned: HashMap::new(),
        }
    }

    /// Redirect `class` at `version` to `target`
    pub fn redirect(
        mut self,
        class: impl Into<String>,
        version: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.classes
            .entry(class.into())
            .or_default()
            .insert(version.into(), Some(target.into()));
        self
    }

    /// Veto `class` at `version`
    pub fn veto(mut self, class: impl Into<String>, version: impl Into<String>) -> Self {
        self.classes
            .entry(class.into())
            .or_default()
            .insert(version.into(), None);
        self
    }

    /// Answer `class` at `version` with a fixed instance
    pub fn pin(
        mut self,
        class: impl Into<String>,
        version: impl Into<String>,
        instance: Instance,
    ) -> Self {
        self.pinned.insert((class.into(), version.into()), instance);
        self
    }

    /// Set the version used when callers supply none
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = Some(version.into());
        self
    }

    pub fn default_version(&self) -> Option<&str> {
        self.default_version.as_deref()
    }

    pub fn classes(&self) -> &VersionTable {
        &self.classes
    }

    /// Version in effect for a request
    pub fn effective_version<'a>(&'a self, version: Option<&'a str>) -> Option<&'a str> {
        version.or(self.default_version.as_deref())
    }

    /// Select without the boxed error wrapper; table lookups cannot fail
    pub fn lookup(&self, identifier: &str, version: Option<&str>) -> Selection {
        let Some(version) = self.effective_version(version) else {
            return Selection::class(identifier);
        };

        if let Some(instance) = self
            .pinned
            .get(&(identifier.to_string(), version.to_string()))
        {
            tracing::debug!("Version {} of {} is pinned to an instance", version, identifier);
            return Selection::Instance(instance.clone());
        }

        match self
            .classes
            .get(identifier)
            .and_then(|versions| versions.get(version))
        {
            Some(Some(target)) => {
                tracing::debug!("Version {} of {} redirects to {}", version, identifier, target);
                Selection::class(target.as_str())
            }
            Some(None) => {
                tracing::debug!("Version {} of {} is vetoed", version, identifier);
                Selection::Veto
            }
            None => Selection::class(identifier),
        }
    }
}

impl VersionSelector for VersionMap {
    fn select(&self, identifier: &str, version: Option<&str>) -> Result<Selection, BoxError> {
        Ok(self.lookup(identifier, version))
    }
}
