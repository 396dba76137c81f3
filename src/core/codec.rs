//! YAML document encoding and decoding.
//!
//! Definitions are rendered with a fixed field order (see
//! [`constants::FIELD_ORDER`](crate::core::constants::FIELD_ORDER)) instead of
//! the default lexical YAML ordering, and multi-line values of designated
//! fields are emitted as literal blocks. Trailing whitespace is stripped from
//! literal fields first, since it would otherwise force the emitter to fall
//! back to a double-quoted scalar.

use serde_yaml::{Mapping, Value};

use crate::core::constants::{FIELD_ORDER, LITERAL_FIELDS};
use crate::error::{FormatError, Result};

/// A definition document: a YAML mapping from field names to values.
pub type Document = Mapping;

/// Sort rank for a mapping key: listed fields keep their priority index,
/// everything else sorts lexically after them.
fn field_rank(key: &Value) -> (usize, String) {
    let name = key.as_str().unwrap_or_default();
    match FIELD_ORDER.iter().position(|f| *f == name) {
        Some(index) => (index, String::new()),
        None => (FIELD_ORDER.len(), name.to_string()),
    }
}

/// Recursively reorder all mappings in a value per `FIELD_ORDER`.
fn order_value(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = mapping
                .into_iter()
                .map(|(key, value)| (key, order_value(value)))
                .collect();
            entries.sort_by_cached_key(|(key, _)| field_rank(key));
            Value::Mapping(entries.into_iter().collect())
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(order_value).collect()),
        other => other,
    }
}

/// Remove trailing whitespace from every line and from the whole value.
pub fn strip_trailing_whitespace(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encode a document as YAML with deterministic field order.
///
/// Literal fields (`command`, `condition`, `description`) are stripped of
/// trailing whitespace so multi-line values come out as `|` blocks.
pub fn encode(document: &Document) -> Result<String> {
    let mut document = document.clone();
    for field in LITERAL_FIELDS {
        let key = Value::from(*field);
        if let Some(Value::String(text)) = document.get_mut(&key) {
            *text = strip_trailing_whitespace(text);
        }
    }
    Ok(serde_yaml::to_string(&order_value(Value::Mapping(
        document,
    )))?)
}

/// Decode a YAML (or JSON, which is a YAML subset) document.
pub fn decode(text: &str) -> Result<Document> {
    match parse(text)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(FormatError::NotAMapping.into()),
    }
}

/// Parse arbitrary YAML text; used for inputs that may be a mapping or a
/// sequence of mappings (entity push).
pub fn parse(text: &str) -> Result<Value> {
    serde_yaml::from_str(text)
        .map_err(|e| FormatError::Malformed(e.to_string()).into())
}

/// Drop top-level null fields. Applied on the display path only; init
/// templates keep their empty placeholder fields.
pub fn strip_nulls(document: &mut Document) {
    let null_keys: Vec<Value> = document
        .iter()
        .filter(|(_, value)| value.is_null())
        .map(|(key, _)| key.clone())
        .collect();
    for key in null_keys {
        document.remove(&key);
    }
}
