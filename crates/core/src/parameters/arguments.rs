//! Binding of parameters to a constructor's declared parameter list

use super::Parameters;
use crate::error::ArgumentError;
use crate::instance::Instance;
use std::any::{Any, type_name};
use std::sync::Arc;

/// Parameters bound against the declared parameters of one class
#[derive(Clone, Default)]
pub struct Arguments {
    class: String,
    names: Vec<String>,
    values: Vec<Option<Instance>>,
    extra: Vec<Instance>,
}

impl Arguments {
    /// Bind `parameters` to the declared parameter `names` of `class`
    ///
    /// A class that declares no parameters silently discards everything it
    /// is given. Positional values beyond the declared list are kept in
    /// [`Arguments::extra`]. Named values must match a declared name.
    pub fn bind(
        class: &str,
        names: &[String],
        parameters: Parameters,
    ) -> Result<Self, ArgumentError> {
        let mut arguments = Self {
            class: class.to_string(),
            names: names.to_vec(),
            values: vec![None; names.len()],
            extra: Vec::new(),
        };

        if names.is_empty() {
            if !parameters.is_empty() {
                tracing::trace!(
                    "Discarding {} parameter(s) for parameterless class {}",
                    parameters.len(),
                    class
                );
            }
            return Ok(arguments);
        }

        match parameters {
            Parameters::Empty => {}
            Parameters::Positional(values) => {
                let mut values = values.into_iter();
                for slot in arguments.values.iter_mut() {
                    match values.next() {
                        Some(value) => *slot = Some(value),
                        None => break,
                    }
                }
                arguments.extra = values.collect();
            }
            Parameters::Named(entries) => {
                for (name, value) in entries {
                    let index = arguments.position(&name).ok_or_else(|| {
                        ArgumentError::UnknownParameter {
                            class: class.to_string(),
                            parameter: name.clone(),
                        }
                    })?;
                    arguments.values[index] = Some(value);
                }
            }
        }

        Ok(arguments)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|declared| declared == name)
    }

    /// Name of the class these arguments were bound for
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Raw value bound to a declared parameter
    pub fn get(&self, name: &str) -> Option<&Instance> {
        self.position(name)
            .and_then(|index| self.values[index].as_ref())
    }

    /// Typed value of a parameter that must be present
    pub fn required<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>, ArgumentError> {
        self.optional(name)?.ok_or_else(|| ArgumentError::Missing {
            class: self.class.clone(),
            parameter: name.to_string(),
        })
    }

    /// Typed value of a parameter that may be left unbound
    pub fn optional<T: Any + Send + Sync>(
        &self,
        name: &str,
    ) -> Result<Option<Arc<T>>, ArgumentError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .clone()
                .downcast::<T>()
                .map(Some)
                .map_err(|_| ArgumentError::TypeMismatch {
                    class: self.class.clone(),
                    parameter: name.to_string(),
                    expected: type_name::<T>(),
                }),
        }
    }

    /// Cloned value of a parameter that must be present
    pub fn value<T: Any + Send + Sync + Clone>(&self, name: &str) -> Result<T, ArgumentError> {
        self.required::<T>(name).map(|value| (*value).clone())
    }

    /// Positional values supplied beyond the declared parameters
    pub fn extra(&self) -> &[Instance] {
        &self.extra
    }

    /// Number of bound declared parameters
    pub fn len(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound: Vec<&str> = self
            .names
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| value.is_some())
            .map(|(name, _)| name.as_str())
            .collect();
        f.debug_struct("Arguments")
            .field("class", &self.class)
            .field("bound", &bound)
            .field("extra", &self.extra.len())
            .finish()
    }
}
