//! Type-erased instances handed out by the resolver

use std::any::Any;
use std::sync::Arc;

/// A shared, type-erased instance
///
/// Identity is pointer identity; use [`same_instance`] to compare two
/// instances and [`Arc::downcast`] to recover the concrete type.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Wrap a value as an [`Instance`]
pub fn instance<T: Any + Send + Sync>(value: T) -> Instance {
    Arc::new(value)
}

/// Check whether two instances are the same object
pub fn same_instance(a: &Instance, b: &Instance) -> bool {
    Arc::ptr_eq(a, b)
}

/// Borrow the concrete value behind an instance
pub fn downcast_ref<T: Any>(instance: &Instance) -> Option<&T> {
    instance.as_ref().downcast_ref::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance_is_pointer_identity() {
        let a = instance(String::from("a"));
        let b = instance(String::from("a"));

        assert!(same_instance(&a, &a.clone()));
        assert!(!same_instance(&a, &b));
    }

    #[test]
    fn test_downcast_ref() {
        let value = instance(42u32);

        assert_eq!(downcast_ref::<u32>(&value), Some(&42));
        assert!(downcast_ref::<String>(&value).is_none());
    }
}
