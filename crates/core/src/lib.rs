//! instantiator - resolve class identifiers to instances
//!
//! This crate provides:
//! - A [`Resolver`] that turns an identifier into an instance, consulting a
//!   version selector, then a container, then a class registry
//! - Parameter shape detection for positional, named and variadic arguments
//! - An in-memory [`InstanceContainer`] and a table-driven [`VersionMap`]
//!
//! ```
//! use instantiator_core::{args, ClassRegistryBuilder, Resolver};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Mailer;
//!
//! let registry = ClassRegistryBuilder::new().with_default::<Mailer>("Mailer").build();
//! let resolver = Resolver::new(Arc::new(registry));
//!
//! let mailer = resolver.get_as::<Mailer>("Mailer", None, args![]).unwrap();
//! assert!(mailer.is_some());
//! ```
pub mod container;
pub mod error;
pub mod instance;
pub mod parameters;
pub mod registry;
pub mod resolver;
pub mod version;

// Re-export commonly used types and traits
pub use container::{Container, InstanceContainer};
pub use error::{ArgumentError, BoxError, ContainerError, ResolveError, Result};
pub use instance::{Instance, downcast_ref, instance, same_instance};
pub use parameters::{Arg, Arguments, Parameters};
pub use registry::{ClassDefinition, ClassRegistry, ClassRegistryBuilder};
pub use resolver::{ResolutionRequest, Resolver, ResolverBuilder};
pub use version::{Selection, VersionMap, VersionSelector, VersionTable};
