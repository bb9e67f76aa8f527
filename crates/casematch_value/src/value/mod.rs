//! Runtime values the matcher compares, tests for truthiness, and returns.
//!
//! # Heap Enforcement
//!
//! Heap payloads are wrapped in `Heap<T>`, whose constructor is private to
//! this module. Outside code builds values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");          // OK
//! let l = Value::list(vec![Value::int(1)]); // OK
//! let s = Value::Str(Heap::new(...));       // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! `PartialEq` is strict equality: the variants must match and so must the
//! payloads. There is no cross-variant coercion (`Int(1) != Float(1.0)`,
//! `Int(1) != Str("1")`), `NaN` is unequal to itself, and functions are
//! equal only to themselves.
//!
//! `Int` and `Float` are separate numeric types on purpose. A dynamic
//! language with a single number type would treat `1` and `1.0` as the same
//! value; here an integer condition never accepts a float input, and callers
//! that want numeric equality across the two write a predicate.
//!
//! `PartialEq` compares lists and maps by contents. Literal conditions in
//! the matcher are stricter and accept a container only when it is the same
//! allocation (`Heap::ptr_eq`).

mod callable;
mod convert;
mod heap;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{not_callable, type_mismatch, EvalError, EvalResult};

pub use callable::{Callable, CallableFn};
pub use heap::Heap;

/// Dynamically typed runtime value.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value. The result of an unset default.
    #[default]
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Character value.
    Char(char),

    // Heap Types
    /// String value.
    Str(Heap<String>),
    /// List of values.
    List(Heap<Vec<Value>>),
    /// Map from string keys to values.
    Map(Heap<FxHashMap<String, Value>>),

    /// Unary function value.
    Function(Callable),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value from key/value pairs. Later duplicates win.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let map: FxHashMap<String, Value> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Map(Heap::new(map))
    }

    /// Create a function value from an infallible closure.
    ///
    /// # Example
    ///
    /// ```text
    /// let upper = Value::function(|v| Value::string(v.display_value().to_uppercase()));
    /// ```
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Value::Function(Callable::infallible(func))
    }

    /// Create a function value from a closure that may raise.
    ///
    /// # Example
    ///
    /// ```text
    /// let is_even = Value::try_function(|v| Ok(Value::Bool(v.try_int()? % 2 == 0)));
    /// ```
    pub fn try_function<F>(func: F) -> Self
    where
        F: Fn(&Value) -> EvalResult + Send + Sync + 'static,
    {
        Value::Function(Callable::new(func))
    }
}

// Value Methods

impl Value {
    /// Check if this value is truthy.
    ///
    /// `None`, `false`, `0`, `0.0`, `NaN` and the empty string are falsy.
    /// Everything else is truthy, including empty lists, empty maps, and
    /// every function.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Char(_) | Value::List(_) | Value::Map(_) | Value::Function(_) => true,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FxHashMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Like `as_int`, but raises a type mismatch for use inside callables.
    pub fn try_int(&self) -> Result<i64, EvalError> {
        self.as_int().ok_or_else(|| type_mismatch("int", self))
    }

    pub fn try_float(&self) -> Result<f64, EvalError> {
        self.as_float().ok_or_else(|| type_mismatch("float", self))
    }

    pub fn try_bool(&self) -> Result<bool, EvalError> {
        self.as_bool().ok_or_else(|| type_mismatch("bool", self))
    }

    pub fn try_str(&self) -> Result<&str, EvalError> {
        self.as_str().ok_or_else(|| type_mismatch("str", self))
    }

    /// Call this value as a function.
    pub fn call(&self, input: &Value) -> EvalResult {
        match self {
            Value::Function(func) => func.call(input),
            _ => Err(not_callable(self)),
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
        }
    }

    /// Display value for user output (strings without quotes).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            Value::Char(c) => c.to_string(),
            other => other.to_string(),
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Map(map) => {
                let mut keys: Vec<_> = map.keys().collect();
                keys.sort();
                f.write_str("Map(")?;
                f.debug_map()
                    .entries(keys.into_iter().map(|k| (k, &map[k])))
                    .finish()?;
                f.write_str(")")
            }
            Value::Function(func) => write!(f, "Function({func:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                let mut keys: Vec<_> = map.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, k) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{k}\": {}", map[k])?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "{func}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}
