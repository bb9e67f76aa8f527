//! Errors from the record builders.
//!
//! Evaluation itself has no error kinds of its own: anything `eval` returns
//! in `Err` came from a caller-supplied callable.

/// Failure to turn a record into a matcher.
#[derive(Debug, thiserror::Error)]
pub enum FieldsError {
    /// The record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The record did not serialize to named fields.
    #[error("expected a record with named fields, found {found}")]
    NotARecord { found: &'static str },
}
