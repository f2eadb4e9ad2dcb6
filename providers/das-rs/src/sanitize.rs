//! Request parameter sanitization
//!
//! Tool parameters arrive with every optional filter present: unset fields
//! serialize to `null`, and callers often send `[]` or `{}` to mean "no
//! constraint". The DAS API treats any present field as a filter, so those
//! empty values are pruned before the request leaves the process.
//!
//! The pruning rule, applied depth-first to every key of a mapping:
//! - empty sequence: removed
//! - absent value: removed
//! - nested mapping: sanitized first, removed if nothing is left
//! - anything else (primitives, non-empty sequences): kept unchanged
//!
//! Elements inside a non-empty sequence are never inspected, so
//! `["collection", ""]` survives as-is.

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Parameter mapping keyed by field name
pub type ParamObject = BTreeMap<String, ParamValue>;

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Field is logically not provided
    Absent,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<ParamValue>),
    Mapping(ParamObject),
}

impl ParamValue {
    /// Returns true for values that carry no filter criteria on their own:
    /// the absent marker, an empty sequence and an empty mapping.
    ///
    /// A mapping is judged as-is; callers sanitize it first to collapse
    /// mappings whose entries are all empty.
    pub fn is_empty_container(&self) -> bool {
        match self {
            ParamValue::Absent => true,
            ParamValue::Sequence(items) => items.is_empty(),
            ParamValue::Mapping(map) => map.is_empty(),
            ParamValue::Bool(_) | ParamValue::Number(_) | ParamValue::String(_) => false,
        }
    }
}

/// Removes empty sequences, absent values and (recursively) empty mappings.
///
/// Consumes the input and returns a new mapping. The result never contains
/// an empty container at any depth, and sanitizing it again is a no-op.
pub fn sanitize(params: ParamObject) -> ParamObject {
    params
        .into_iter()
        .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
        .collect()
}

fn prune(value: ParamValue) -> Option<ParamValue> {
    let value = match value {
        ParamValue::Mapping(map) => ParamValue::Mapping(sanitize(map)),
        other => other,
    };

    if value.is_empty_container() {
        None
    } else {
        Some(value)
    }
}

/// Sanitizes a JSON value
///
/// Objects are pruned with [`sanitize`]; any other JSON value is returned
/// unchanged since there are no keys to remove.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let params: ParamObject = map
                .into_iter()
                .map(|(key, value)| (key, ParamValue::from(value)))
                .collect();
            ParamValue::Mapping(sanitize(params)).into()
        }
        other => other,
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        match value {
            // An unset `Option` serializes to null
            Value::Null => ParamValue::Absent,
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => ParamValue::Number(n),
            Value::String(s) => ParamValue::String(s),
            Value::Array(items) => {
                ParamValue::Sequence(items.into_iter().map(ParamValue::from).collect())
            }
            Value::Object(map) => ParamValue::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, ParamValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<ParamValue> for Value {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Absent => Value::Null,
            ParamValue::Bool(b) => Value::Bool(b),
            ParamValue::Number(n) => Value::Number(n),
            ParamValue::String(s) => Value::String(s),
            ParamValue::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            ParamValue::Mapping(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
