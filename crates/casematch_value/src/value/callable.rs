//! Unary function values.

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::errors::EvalResult;

/// Signature of the closure behind a `Callable`.
pub type CallableFn = dyn Fn(&Value) -> EvalResult + Send + Sync;

/// A shared unary function from `Value` to `EvalResult`.
///
/// Cloning is cheap and keeps identity: two `Callable`s compare equal only
/// when they share the same allocation, never by behaviour.
#[derive(Clone)]
pub struct Callable {
    func: Arc<CallableFn>,
    name: Option<&'static str>,
}

impl Callable {
    /// Wrap a fallible closure.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value) -> EvalResult + Send + Sync + 'static,
    {
        Callable {
            func: Arc::new(func),
            name: None,
        }
    }

    /// Wrap a closure that cannot fail.
    pub fn infallible<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::new(move |input| Ok(func(input)))
    }

    /// Attach a name shown by `Debug` and `Display`.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Invoke the function. Errors are returned as produced.
    #[inline]
    pub fn call(&self, input: &Value) -> EvalResult {
        (self.func)(input)
    }

    /// Whether both handles refer to the same function allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Callable {}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "Callable({name})"),
            None => write!(f, "Callable(<anonymous>)"),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "<function {name}>"),
            None => write!(f, "<function>"),
        }
    }
}
