//! Class registry
//!
//! Maps class identifiers to constructor definitions. The resolver consults
//! it as its fallback when neither the version selector nor the container
//! produced an instance.

use crate::error::BoxError;
use crate::instance::Instance;
use crate::parameters::{Arguments, Parameters};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Type-erased constructor closure
pub type Constructor = Arc<dyn Fn(&Arguments) -> Result<Instance, BoxError> + Send + Sync>;

/// A constructible class: its name, declared parameters and constructor
#[derive(Clone)]
pub struct ClassDefinition {
    name: String,
    parameters: Vec<String>,
    constructor: Constructor,
}

impl std::fmt::Debug for ClassDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDefinition")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl ClassDefinition {
    /// Create a definition from a typed constructor
    pub fn new<T, F>(name: impl Into<String>, constructor: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            constructor: Arc::new(move |arguments: &Arguments| -> Result<Instance, BoxError> {
                let value = constructor(arguments)?;
                Ok(Arc::new(value) as Instance)
            }),
        }
    }

    /// Create a definition whose constructor already returns an [`Instance`]
    pub fn from_constructor(name: impl Into<String>, constructor: Constructor) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            constructor,
        }
    }

    /// Declare the next constructor parameter
    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(name.into());
        self
    }

    /// Declare several constructor parameters, in order
    pub fn with_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter names, in positional order
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Bind `parameters` and run the constructor
    ///
    /// Binding and constructor errors are returned as they are.
    pub fn instantiate(&self, parameters: Parameters) -> Result<Instance, BoxError> {
        let arguments = Arguments::bind(&self.name, &self.parameters, parameters)?;
        (self.constructor)(&arguments)
    }
}

/// Registry of constructible classes
#[derive(Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, Arc<ClassDefinition>>,
}

impl std::fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("classes", &self.list_classes())
            .finish()
    }
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class definition, replacing any previous one of the same name
    pub fn register(&mut self, definition: ClassDefinition) {
        tracing::debug!("Registering class {}", definition.name());
        self.classes
            .insert(definition.name().to_string(), Arc::new(definition));
    }

    /// Register a class from its declared parameters and a typed constructor
    pub fn register_fn<T, F, I, S>(&mut self, name: &str, parameters: I, constructor: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(ClassDefinition::new(name, constructor).with_parameters(parameters));
    }

    /// Register a class built through its `Default` implementation
    pub fn register_default<T>(&mut self, name: &str)
    where
        T: Any + Send + Sync + Default,
    {
        self.register(ClassDefinition::new(name, |_| Ok(T::default())));
    }

    /// Get a class definition by name
    pub fn definition(&self, name: &str) -> Option<Arc<ClassDefinition>> {
        self.classes.get(name).cloned()
    }

    /// Check if a class is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Get all registered class names, sorted
    pub fn list_classes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Create a registry from a set of definitions
    pub fn from_definitions<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = ClassDefinition>,
    {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition);
        }
        registry
    }
}

/// Builder for class registries
#[derive(Default)]
pub struct ClassRegistryBuilder {
    definitions: Vec<ClassDefinition>,
}

impl ClassRegistryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class definition to the builder
    pub fn with_class(mut self, definition: ClassDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Add a class built through its `Default` implementation
    pub fn with_default<T>(self, name: &str) -> Self
    where
        T: Any + Send + Sync + Default,
    {
        self.with_class(ClassDefinition::new(name, |_| Ok(T::default())))
    }

    /// Build the registry
    pub fn build(self) -> ClassRegistry {
        ClassRegistry::from_definitions(self.definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::instance::{downcast_ref, instance, same_instance};

    #[derive(Debug, Default, PartialEq)]
    struct Plain;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn point_definition() -> ClassDefinition {
        ClassDefinition::new("Point", |args: &Arguments| {
            Ok(Point {
                x: args.value("x")?,
                y: args.value("y")?,
            })
        })
        .with_parameters(["x", "y"])
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ClassRegistryBuilder::new()
            .with_default::<Plain>("Plain")
            .with_class(point_definition())
            .build();

        assert!(registry.contains("Plain"));
        assert!(registry.contains("Point"));
        assert!(!registry.contains("Missing"));
        assert_eq!(registry.list_classes(), vec!["Plain", "Point"]);
        assert_eq!(
            registry.definition("Point").unwrap().parameters(),
            &["x".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn test_instantiate_binds_parameters() {
        let definition = point_definition();

        let instance = definition
            .instantiate(Parameters::from_args(args![3i32, 4i32]))
            .unwrap();

        assert_eq!(downcast_ref::<Point>(&instance), Some(&Point { x: 3, y: 4 }));
    }

    #[test]
    fn test_instantiate_reports_missing_argument() {
        let definition = point_definition();

        let error = definition
            .instantiate(Parameters::from_args(args![3i32]))
            .unwrap_err();

        assert_eq!(error.to_string(), "Missing argument `y` for Point");
    }

    #[test]
    fn test_reregistering_replaces_definition() {
        let mut registry = ClassRegistry::new();
        registry.register_default::<Plain>("Thing");
        registry.register_fn("Thing", ["x", "y"], |_| Ok(Point { x: 0, y: 0 }));

        assert_eq!(registry.len(), 1);
        let instance = registry
            .definition("Thing")
            .unwrap()
            .instantiate(Parameters::Empty)
            .unwrap();
        assert!(downcast_ref::<Point>(&instance).is_some());
    }

    #[test]
    fn test_from_constructor_returns_instance_as_is() {
        let shared = instance(Plain);
        let handle = shared.clone();
        let definition = ClassDefinition::from_constructor(
            "Shared",
            Arc::new(move |_: &Arguments| -> Result<Instance, BoxError> { Ok(handle.clone()) }),
        );

        let first = definition.instantiate(Parameters::Empty).unwrap();
        let second = definition.instantiate(Parameters::Empty).unwrap();

        assert!(same_instance(&first, &shared));
        assert!(same_instance(&second, &shared));
    }
}
