/// Boxed error type used by collaborators and constructors
///
/// Errors in this shape pass through the resolver without being wrapped.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while resolving an identifier
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The identifier (after any version redirect) names no registered class
    #[error("Class {0} not found!")]
    ClassNotFound(String),

    #[error(transparent)]
    Container(BoxError),

    #[error(transparent)]
    VersionSelector(BoxError),

    #[error(transparent)]
    Construction(BoxError),

    #[error("Instance resolved for {identifier} is not a {expected}")]
    UnexpectedType {
        identifier: String,
        expected: &'static str,
    },
}

/// Errors raised while binding or reading constructor arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Missing argument `{parameter}` for {class}")]
    Missing { class: String, parameter: String },

    #[error("Unknown named parameter `{parameter}` for {class}")]
    UnknownParameter { class: String, parameter: String },

    #[error("Argument `{parameter}` for {class} is not a {expected}")]
    TypeMismatch {
        class: String,
        parameter: String,
        expected: &'static str,
    },
}

/// Errors raised by the bundled in-memory container
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    #[error("No entry found for identifier {0}")]
    NotFound(String),
}

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, ResolveError>;
