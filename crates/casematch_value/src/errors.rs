//! Error types raised by caller-supplied callables.
//!
//! The matcher never fails on its own. Every `EvalError` that escapes
//! `Matcher::eval` was produced by a condition or outcome callable and is
//! passed through untouched.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` gives callers something to match on besides the message.
//! Factory functions (`type_mismatch`, `not_callable`) populate both `kind`
//! and `message`; `EvalError::new` uses `Custom`.

use crate::value::Value;

/// Result of calling a callable or resolving an outcome.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A value had a different variant than the callable expected.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// `Value::call` on something that is not a function.
    #[error("{type_name} is not callable")]
    NotCallable { type_name: String },

    /// Free-form error raised by caller code.
    #[error("{message}")]
    Custom { message: String },
}

/// Additional context note attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error raised while evaluating a callable.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message. Equals `kind.to_string()` for
    /// factory-created errors.
    pub message: String,
    /// Value carried by `EvalError::raise`, if any.
    pub payload: Option<Value>,
    /// Secondary information, innermost first.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            payload: None,
            notes: Vec::new(),
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            payload: None,
            notes: Vec::new(),
        }
    }

    /// Raise an arbitrary value as an error.
    ///
    /// The value is kept in `payload` so the caller of `Matcher::eval` can
    /// recover exactly what the callable threw.
    pub fn raise(value: Value) -> Self {
        let mut err = Self::new(format!("raised {value}"));
        err.payload = Some(value);
        err
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(EvalNote::new(note));
        self
    }
}

/// A value of the wrong variant reached a callable.
#[cold]
pub fn type_mismatch(expected: &str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.type_name().to_string(),
    })
}

/// `Value::call` on a non-function.
#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name().to_string(),
    })
}
