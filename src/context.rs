//! Opaque caller data carried from a request to its result.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::errors::PlacementError;

/// Caller-supplied value threaded through placement untouched.
///
/// Typically identifies which trigger produced a result, e.g. a button index.
/// Cloning shares the value.
#[derive(Clone, Default)]
pub struct Context(Option<Arc<dyn Any + Send + Sync>>);

impl Context {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Context(Some(Arc::new(value)))
    }

    pub fn none() -> Self {
        Context(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the value as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T, PlacementError> {
        self.0
            .as_deref()
            .and_then(|value| (value as &dyn Any).downcast_ref::<T>())
            .ok_or(PlacementError::InvalidContext {
                expected: type_name::<T>(),
            })
    }

    /// True when both contexts share the same value, or both are empty.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Context(..)"),
            None => f.write_str("Context(None)"),
        }
    }
}
