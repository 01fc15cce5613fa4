//! Version selection
//!
//! A version selector runs before anything else in a resolution. It can
//! redirect the request to another class, answer it with an instance, or
//! veto it.

pub mod map;

pub use map::{VersionMap, VersionTable};

use crate::error::BoxError;
use crate::instance::Instance;
use std::fmt;

/// Outcome of a version selection
#[derive(Clone)]
pub enum Selection {
    /// Continue resolving with this class identifier
    Class(String),
    /// Use this instance as the resolution result
    Instance(Instance),
    /// Stop resolving; the resolution yields no instance
    Veto,
}

impl Selection {
    pub fn class(identifier: impl Into<String>) -> Self {
        Selection::Class(identifier.into())
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Class(identifier) => f.debug_tuple("Class").field(identifier).finish(),
            Selection::Instance(_) => f.write_str("Instance(..)"),
            Selection::Veto => f.write_str("Veto"),
        }
    }
}

/// Version selection capability consumed by the resolver
pub trait VersionSelector: Send + Sync {
    /// Select what `identifier` at `version` resolves to
    fn select(&self, identifier: &str, version: Option<&str>) -> Result<Selection, BoxError>;
}

impl<F> VersionSelector for F
where
    F: Fn(&str, Option<&str>) -> Result<Selection, BoxError> + Send + Sync,
{
    fn select(&self, identifier: &str, version: Option<&str>) -> Result<Selection, BoxError> {
        self(identifier, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_selector() {
        let selector = |identifier: &str, version: Option<&str>| -> Result<Selection, BoxError> {
            match version {
                Some("v2") => Ok(Selection::class(format!("{identifier}V2"))),
                Some(_) => Ok(Selection::Veto),
                None => Ok(Selection::class(identifier)),
            }
        };

        assert!(matches!(
            selector.select("Mailer", Some("v2")).unwrap(),
            Selection::Class(ref name) if name == "MailerV2"
        ));
        assert!(matches!(
            selector.select("Mailer", Some("v0")).unwrap(),
            Selection::Veto
        ));
        assert!(matches!(
            selector.select("Mailer", None).unwrap(),
            Selection::Class(ref name) if name == "Mailer"
        ));
    }
}
