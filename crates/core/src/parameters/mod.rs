//! Constructor parameters
//!
//! Callers hand the resolver a list of [`Arg`]s. Shape detection turns that
//! list into [`Parameters`] once, at the boundary:
//!
//! - a single [`Arg::List`] is unpacked into positional parameters,
//! - a single [`Arg::Map`] is unpacked into named parameters,
//! - anything else is used positionally, in the order given.

mod arguments;

pub use arguments::Arguments;

use crate::instance::{Instance, instance};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

/// A single caller-supplied argument
#[derive(Clone)]
pub enum Arg {
    /// An arbitrary value
    Value(Instance),
    /// An ordered sequence of values
    List(Vec<Instance>),
    /// A mapping from parameter name to value
    Map(BTreeMap<String, Instance>),
}

impl Arg {
    /// Wrap any value as an argument
    ///
    /// An [`Instance`] is kept as it is, so passing shared instances here
    /// binds the same values as passing them in an [`Arg::list`].
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        if let Some(shared) = (&value as &dyn Any).downcast_ref::<Instance>() {
            return Arg::Value(shared.clone());
        }
        Arg::Value(instance(value))
    }

    /// Build a list argument
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Instance>,
    {
        Arg::List(values.into_iter().collect())
    }

    /// Build a named-map argument
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Instance)>,
        K: Into<String>,
    {
        Arg::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Collapse this argument into a single positional value
    fn into_instance(self) -> Instance {
        match self {
            Arg::Value(value) => value,
            Arg::List(values) => instance(values),
            Arg::Map(entries) => instance(entries),
        }
    }
}

impl From<Instance> for Arg {
    fn from(value: Instance) -> Self {
        Arg::Value(value)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(_) => f.write_str("Value(..)"),
            Arg::List(values) => write!(f, "List(len = {})", values.len()),
            Arg::Map(entries) => f
                .debug_tuple("Map")
                .field(&entries.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Parameters after shape detection
#[derive(Clone, Default)]
pub enum Parameters {
    /// Positional constructor arguments
    Positional(Vec<Instance>),
    /// Named constructor arguments
    Named(BTreeMap<String, Instance>),
    /// No parameters at all
    #[default]
    Empty,
}

impl Parameters {
    /// Apply shape detection to caller-supplied arguments
    pub fn from_args(args: Vec<Arg>) -> Self {
        let mut args = args;
        if args.len() == 1 {
            match args.pop() {
                Some(Arg::List(values)) => return Parameters::positional(values),
                Some(Arg::Map(entries)) => return Parameters::named(entries),
                Some(single) => args.push(single),
                None => {}
            }
        }

        Parameters::positional(args.into_iter().map(Arg::into_instance).collect())
    }

    fn positional(values: Vec<Instance>) -> Self {
        if values.is_empty() {
            Parameters::Empty
        } else {
            Parameters::Positional(values)
        }
    }

    fn named(entries: BTreeMap<String, Instance>) -> Self {
        if entries.is_empty() {
            Parameters::Empty
        } else {
            Parameters::Named(entries)
        }
    }

    /// Number of supplied values
    pub fn len(&self) -> usize {
        match self {
            Parameters::Positional(values) => values.len(),
            Parameters::Named(entries) => entries.len(),
            Parameters::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Arg>> for Parameters {
    fn from(args: Vec<Arg>) -> Self {
        Parameters::from_args(args)
    }
}

impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameters::Positional(values) => write!(f, "Positional(len = {})", values.len()),
            Parameters::Named(entries) => f
                .debug_tuple("Named")
                .field(&entries.keys().collect::<Vec<_>>())
                .finish(),
            Parameters::Empty => f.write_str("Empty"),
        }
    }
}

/// Build a `Vec<Arg>` from discrete values
///
/// ```
/// use instantiator_core::{args, Arg};
///
/// let args: Vec<Arg> = args!["name", 42u32];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::value($value)),+]
    };
}
