//! Container capability
//!
//! A container answers whether it holds a ready instance for an identifier
//! and hands that instance out. The resolver prefers container instances
//! over constructing new ones.

use crate::error::{BoxError, ContainerError};
use crate::instance::{Instance, instance};
use std::any::Any;
use std::collections::HashMap;

/// Lookup capability consumed by the resolver
pub trait Container: Send + Sync {
    /// Whether an instance is available for `identifier`
    ///
    /// Must not fail for identifiers the container does not know.
    fn has(&self, identifier: &str) -> bool;

    /// Get the instance for `identifier`
    ///
    /// Only assumed safe to call after `has` returned true.
    fn get(&self, identifier: &str) -> Result<Instance, BoxError>;
}

/// In-memory container of shared instances
#[derive(Clone, Default)]
pub struct InstanceContainer {
    instances: HashMap<String, Instance>,
}

impl std::fmt::Debug for InstanceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut identifiers: Vec<&String> = self.instances.keys().collect();
        identifiers.sort();
        f.debug_struct("InstanceContainer")
            .field("identifiers", &identifiers)
            .finish()
    }
}

impl InstanceContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an instance under `identifier`, replacing any previous entry
    pub fn insert(&mut self, identifier: impl Into<String>, instance: Instance) {
        self.instances.insert(identifier.into(), instance);
    }

    /// Add an already shared instance
    pub fn with_instance(mut self, identifier: impl Into<String>, instance: Instance) -> Self {
        self.insert(identifier, instance);
        self
    }

    /// Add a value, wrapping it as a shared instance
    pub fn with_value<T: Any + Send + Sync>(self, identifier: impl Into<String>, value: T) -> Self {
        self.with_instance(identifier, instance(value))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Container for InstanceContainer {
    fn has(&self, identifier: &str) -> bool {
        self.instances.contains_key(identifier)
    }

    fn get(&self, identifier: &str) -> Result<Instance, BoxError> {
        self.instances
            .get(identifier)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(identifier.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::same_instance;

    #[test]
    fn test_get_returns_shared_instance() {
        let shared = instance(String::from("config"));
        let container = InstanceContainer::new().with_instance("Config", shared.clone());

        assert!(container.has("Config"));
        assert!(same_instance(&container.get("Config").unwrap(), &shared));
        assert!(same_instance(
            &container.get("Config").unwrap(),
            &container.get("Config").unwrap()
        ));
    }

    #[test]
    fn test_unknown_identifier() {
        let container = InstanceContainer::new().with_value("Known", 1u8);

        assert!(!container.has("Unknown"));
        let error = container.get("Unknown").unwrap_err();
        assert_eq!(error.to_string(), "No entry found for identifier Unknown");
    }
}
