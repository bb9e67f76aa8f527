//! Builders from keyed sources.
//!
//! Every key except `DEFAULT_KEY` becomes a case in iteration order; the
//! value stored under `DEFAULT_KEY` becomes the default outcome.

use casematch_value::Value;
use serde::Serialize;

use super::Matcher;
use crate::case::Outcome;
use crate::errors::FieldsError;

/// Key reserved for the default outcome in keyed sources.
pub const DEFAULT_KEY: &str = "_";

impl Matcher {
    /// Build a matcher from ordered key/value pairs.
    ///
    /// Each key is the condition and each value the outcome of one case.
    /// Accepts anything iterable as pairs: a `Vec`, an array, a `BTreeMap`,
    /// or an insertion-ordered map. If `DEFAULT_KEY` occurs more than once,
    /// the last occurrence wins.
    pub fn from_mapping<I, K, O>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, O)>,
        K: Into<Value>,
        O: Into<Outcome>,
    {
        let mut matcher = Matcher::default();
        for (key, outcome) in mapping {
            let key = key.into();
            if key.as_str() == Some(DEFAULT_KEY) {
                tracing::debug!("keyed source sets the default outcome");
                matcher.default = outcome.into();
            } else {
                matcher.push_case(key, outcome);
            }
        }
        matcher
    }

    /// Build a matcher from a record's named fields.
    ///
    /// The record is serialized through `serde_json`; struct fields keep
    /// their declaration order and map entries keep their serialization
    /// order. Field names become string conditions; field values become
    /// literal outcomes.
    pub fn from_fields<T>(record: &T) -> Result<Self, FieldsError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(record)? {
            serde_json::Value::Object(fields) => Ok(Self::from_mapping(
                fields
                    .into_iter()
                    .map(|(name, value)| (Value::string(name), Outcome::Literal(Value::from(value)))),
            )),
            other => Err(FieldsError::NotARecord {
                found: json_kind(&other),
            }),
        }
    }

    /// Build a matcher from a `Value::Map`, visiting keys in sorted order.
    ///
    /// `Value::Map` is a hash map and does not remember insertion order, so
    /// `ids()` lists the cases by key, not in the order the map was built.
    /// Results are unaffected: the keys are distinct strings, so at most one
    /// case can accept any input. Use `from_mapping` or `from_fields` when
    /// case order matters.
    pub fn from_record(record: &Value) -> Result<Self, FieldsError> {
        let Some(fields) = record.as_map() else {
            return Err(FieldsError::NotARecord {
                found: record.type_name(),
            });
        };
        let mut keys: Vec<&String> = fields.keys().collect();
        keys.sort();
        Ok(Self::from_mapping(
            keys.into_iter()
                .map(|key| (Value::string(key.as_str()), fields[key].clone())),
        ))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
