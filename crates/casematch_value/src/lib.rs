//! Casematch Value - runtime values for the casematch evaluator.
//!
//! This crate provides:
//! - The dynamic `Value` type with strict equality and truthiness
//! - `Callable`, the shared unary function stored in conditions and outcomes
//! - Evaluation error types (`EvalError`, `EvalResult`) raised by callables
//!
//! # Value Types
//!
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wrapper enforces this invariant
//! - Thread-safe reference counting via `Arc`

mod errors;
mod value;

pub use errors::{not_callable, type_mismatch, EvalError, EvalErrorKind, EvalNote, EvalResult};
pub use value::{Callable, CallableFn, Heap, Value};
