//! Identifier resolution
//!
//! Resolves a class identifier to an instance. Each request goes through
//! three steps, and the first one that produces an answer wins:
//!
//! 1. the version selector, which may redirect, answer or veto the request,
//! 2. the container, if it has an instance for the (redirected) identifier,
//! 3. the class registry, which constructs a new instance from the
//!    caller's parameters.

use crate::container::Container;
use crate::error::{ResolveError, Result};
use crate::instance::Instance;
use crate::parameters::{Arg, Parameters};
use crate::registry::ClassRegistry;
use crate::version::{Selection, VersionSelector};
use std::any::{Any, type_name};
use std::sync::Arc;

/// A single resolution request
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    pub identifier: String,
    pub version: Option<String>,
    pub parameters: Parameters,
}

impl ResolutionRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version: None,
            parameters: Parameters::Empty,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the parameters, applying shape detection to `args`
    pub fn with_args(mut self, args: Vec<Arg>) -> Self {
        self.parameters = Parameters::from_args(args);
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Resolves identifiers to instances
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<ClassRegistry>,
    container: Option<Arc<dyn Container>>,
    version_selector: Option<Arc<dyn VersionSelector>>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .field("container", &self.container.is_some())
            .field("version_selector", &self.version_selector.is_some())
            .finish()
    }
}

impl Resolver {
    /// Create a resolver that only constructs from `registry`
    pub fn new(registry: Arc<ClassRegistry>) -> Self {
        Self {
            registry,
            container: None,
            version_selector: None,
        }
    }

    /// Create a resolver builder
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn with_container(mut self, container: Arc<dyn Container>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_version_selector(mut self, version_selector: Arc<dyn VersionSelector>) -> Self {
        self.version_selector = Some(version_selector);
        self
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn container(&self) -> Option<&Arc<dyn Container>> {
        self.container.as_ref()
    }

    pub fn version_selector(&self) -> Option<&Arc<dyn VersionSelector>> {
        self.version_selector.as_ref()
    }

    /// Resolve `identifier` at `version`, forwarding `args` to the constructor
    ///
    /// Returns `Ok(None)` only when the version selector vetoes the request.
    /// `args` go through shape detection: a single list or map is unpacked,
    /// anything else is positional.
    pub fn get(
        &self,
        identifier: &str,
        version: Option<&str>,
        args: Vec<Arg>,
    ) -> Result<Option<Instance>> {
        self.resolve_parts(identifier, version, Parameters::from_args(args))
    }

    /// Resolve a pre-built request
    pub fn resolve(&self, request: &ResolutionRequest) -> Result<Option<Instance>> {
        self.resolve_parts(
            &request.identifier,
            request.version.as_deref(),
            request.parameters.clone(),
        )
    }

    /// Resolve and downcast to `T`
    ///
    /// A resolved instance of another type is reported as
    /// [`ResolveError::UnexpectedType`].
    pub fn get_as<T: Any + Send + Sync>(
        &self,
        identifier: &str,
        version: Option<&str>,
        args: Vec<Arg>,
    ) -> Result<Option<Arc<T>>> {
        match self.get(identifier, version, args)? {
            None => Ok(None),
            Some(instance) => instance.downcast::<T>().map(Some).map_err(|_| {
                ResolveError::UnexpectedType {
                    identifier: identifier.to_string(),
                    expected: type_name::<T>(),
                }
            }),
        }
    }

    fn resolve_parts(
        &self,
        identifier: &str,
        version: Option<&str>,
        parameters: Parameters,
    ) -> Result<Option<Instance>> {
        let mut identifier = identifier.to_string();

        if let Some(selector) = &self.version_selector {
            match selector
                .select(&identifier, version)
                .map_err(ResolveError::VersionSelector)?
            {
                Selection::Veto => {
                    tracing::debug!("Version selector vetoed {} ({:?})", identifier, version);
                    return Ok(None);
                }
                Selection::Instance(instance) => {
                    tracing::debug!("Version selector answered {} with an instance", identifier);
                    return Ok(Some(instance));
                }
                Selection::Class(target) => {
                    if target != identifier {
                        tracing::debug!("Version selector redirected {} to {}", identifier, target);
                    }
                    identifier = target;
                }
            }
        }

        if let Some(container) = &self.container {
            if container.has(&identifier) {
                if !parameters.is_empty() {
                    tracing::trace!(
                        "Ignoring {} parameter(s) for container entry {}",
                        parameters.len(),
                        identifier
                    );
                }
                tracing::debug!("Resolved {} from container", identifier);
                return container
                    .get(&identifier)
                    .map(Some)
                    .map_err(ResolveError::Container);
            }
        }

        let Some(definition) = self.registry.definition(&identifier) else {
            return Err(ResolveError::ClassNotFound(identifier));
        };

        tracing::debug!("Constructing {} with {:?}", identifier, parameters);
        definition
            .instantiate(parameters)
            .map(Some)
            .map_err(ResolveError::Construction)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Arc::new(ClassRegistry::new()))
    }
}

/// Builder for resolvers
#[derive(Default)]
pub struct ResolverBuilder {
    registry: Option<Arc<ClassRegistry>>,
    container: Option<Arc<dyn Container>>,
    version_selector: Option<Arc<dyn VersionSelector>>,
}

impl ResolverBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(mut self, registry: Arc<ClassRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn container(mut self, container: Arc<dyn Container>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn version_selector(mut self, version_selector: Arc<dyn VersionSelector>) -> Self {
        self.version_selector = Some(version_selector);
        self
    }

    /// Build the resolver; a missing registry means an empty one
    pub fn build(self) -> Resolver {
        Resolver {
            registry: self.registry.unwrap_or_default(),
            container: self.container,
            version_selector: self.version_selector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::container::InstanceContainer;
    use crate::error::BoxError;
    use crate::instance::{instance, same_instance};
    use crate::parameters::Arguments;
    use crate::registry::ClassRegistryBuilder;

    #[derive(Debug, Default)]
    struct Widget;

    fn registry() -> Arc<ClassRegistry> {
        Arc::new(ClassRegistryBuilder::new().with_default::<Widget>("Widget").build())
    }

    #[test]
    fn test_container_wins_over_registry() {
        let held = instance(Widget);
        let resolver = Resolver::new(registry())
            .with_container(Arc::new(InstanceContainer::new().with_instance("Widget", held.clone())));

        let resolved = resolver.get("Widget", None, args![]).unwrap().unwrap();

        assert!(same_instance(&resolved, &held));
    }

    #[test]
    fn test_registry_builds_new_instances() {
        let resolver = Resolver::new(registry());

        let first = resolver.get("Widget", None, args![]).unwrap().unwrap();
        let second = resolver.get("Widget", None, args![]).unwrap().unwrap();

        assert!(!same_instance(&first, &second));
    }

    #[test]
    fn test_not_found_message() {
        let resolver = Resolver::default();

        let error = resolver.get("Nope", None, args![]).unwrap_err();

        assert!(matches!(error, ResolveError::ClassNotFound(ref id) if id == "Nope"));
        assert_eq!(error.to_string(), "Class Nope not found!");
    }

    #[test]
    fn test_selector_error_passes_through() {
        let selector = |_: &str, _: Option<&str>| -> std::result::Result<Selection, BoxError> {
            Err("selector exploded".into())
        };
        let resolver = Resolver::new(registry()).with_version_selector(Arc::new(selector));

        let error = resolver.get("Widget", None, args![]).unwrap_err();

        assert!(matches!(error, ResolveError::VersionSelector(_)));
        assert_eq!(error.to_string(), "selector exploded");
    }

    #[test]
    fn test_get_as_downcasts() {
        let resolver = Resolver::new(registry());

        let widget = resolver.get_as::<Widget>("Widget", None, args![]).unwrap();
        assert!(widget.is_some());

        let error = resolver.get_as::<String>("Widget", None, args![]).unwrap_err();
        assert!(matches!(error, ResolveError::UnexpectedType { .. }));
    }

    #[test]
    fn test_resolve_request() {
        let resolver = Resolver::builder().registry(registry()).build();
        let request = ResolutionRequest::new("Widget").with_version("v1");

        assert!(resolver.resolve(&request).unwrap().is_some());
    }

    #[test]
    fn test_resolve_request_with_prepared_parameters() {
        let mut registry = ClassRegistry::new();
        registry.register_fn("Label", ["text"], |args: &Arguments| {
            Ok(args.value::<String>("text")?)
        });
        let resolver = Resolver::new(Arc::new(registry));
        let parameters =
            Parameters::from_args(vec![Arg::map([("text", instance(String::from("hello")))])]);
        let request = ResolutionRequest::new("Label").with_parameters(parameters);

        let label = resolver.resolve(&request).unwrap().unwrap();

        assert_eq!(label.downcast_ref::<String>().map(String::as_str), Some("hello"));
    }
}
