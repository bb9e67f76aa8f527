//! Conditions, outcomes, and the case pairing them.
//!
//! Both halves of a case are tagged: a condition is either a literal compared
//! with strict equality or a predicate, and an outcome is either a literal
//! returned as-is or a function of the input.
//!
//! # Default tagging
//!
//! Converting a plain `Value` picks the tag from the value itself: a
//! `Value::Function` becomes `Condition::When` / `Outcome::Computed`, anything
//! else becomes `Condition::Equals` / `Outcome::Literal`. A callable passed
//! this way is therefore always invoked. To store a function that should be
//! compared or returned rather than called, build the literal variant
//! explicitly:
//!
//! ```text
//! let handler = Value::function(|v| v.clone());
//! matcher.case("lookup", Outcome::Literal(handler)); // returns the function itself
//! ```

use casematch_value::{Callable, EvalError, EvalResult, Value};

/// Decides whether a case accepts an input.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Accept iff the input is strictly equal to this value. Lists and
    /// maps match only the same allocation, not an equal copy.
    Equals(Value),
    /// Accept iff the predicate's result is truthy.
    When(Callable),
}

impl Condition {
    /// Predicate from a closure returning `bool`.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Condition::When(Callable::infallible(move |input| Value::Bool(predicate(input))))
    }

    /// Predicate from a closure that may raise. Its result is judged by
    /// truthiness, so it need not be a `Bool`.
    pub fn try_when<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> EvalResult + Send + Sync + 'static,
    {
        Condition::When(Callable::new(predicate))
    }

    /// Test `input` against this condition.
    ///
    /// Errors raised by a predicate are returned unchanged.
    pub fn accepts(&self, input: &Value) -> Result<bool, EvalError> {
        match self {
            Condition::Equals(expected) => Ok(strictly_equal(expected, input)),
            Condition::When(predicate) => Ok(predicate.call(input)?.is_truthy()),
        }
    }
}

/// Identity for containers, `PartialEq` for everything else.
fn strictly_equal(expected: &Value, input: &Value) -> bool {
    match (expected, input) {
        (Value::List(a), Value::List(b)) => a.ptr_eq(b),
        (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
        _ => expected == input,
    }
}

/// Produces the result of an accepted case or of the default.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Returned as-is, even when it holds a function.
    Literal(Value),
    /// Called with the input; its return value is the result.
    Computed(Callable),
}

impl Outcome {
    /// Computed outcome from an infallible closure.
    pub fn computed<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Outcome::Computed(Callable::infallible(func))
    }

    /// Computed outcome from a closure that may raise.
    pub fn try_computed<F>(func: F) -> Self
    where
        F: Fn(&Value) -> EvalResult + Send + Sync + 'static,
    {
        Outcome::Computed(Callable::new(func))
    }

    /// Produce the result for `input`.
    pub fn resolve(&self, input: &Value) -> EvalResult {
        match self {
            Outcome::Literal(value) => Ok(value.clone()),
            Outcome::Computed(func) => func.call(input),
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Literal(Value::None)
    }
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        match value {
            Value::Function(predicate) => Condition::When(predicate),
            other => Condition::Equals(other),
        }
    }
}

impl From<Callable> for Condition {
    fn from(predicate: Callable) -> Self {
        Condition::When(predicate)
    }
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        match value {
            Value::Function(func) => Outcome::Computed(func),
            other => Outcome::Literal(other),
        }
    }
}

impl From<Callable> for Outcome {
    fn from(func: Callable) -> Self {
        Outcome::Computed(func)
    }
}

macro_rules! literal_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Condition {
                fn from(value: $ty) -> Self {
                    Condition::Equals(Value::from(value))
                }
            }

            impl From<$ty> for Outcome {
                fn from(value: $ty) -> Self {
                    Outcome::Literal(Value::from(value))
                }
            }
        )*
    };
}

literal_conversions!(bool, i64, i32, u32, f64, char, &str, String, Vec<Value>);

/// A condition and the outcome it selects.
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    pub condition: Condition,
    pub outcome: Outcome,
}

impl Case {
    pub fn new(condition: impl Into<Condition>, outcome: impl Into<Outcome>) -> Self {
        Case {
            condition: condition.into(),
            outcome: outcome.into(),
        }
    }
}
