//! Helpers for reading loosely-typed agent payloads.
//!
//! Presence follows the conventions of the formats' JSON producers: `null`,
//! `false`, `0`, and `""` count as absent, while empty objects and arrays
//! count as present.

use serde_json::{Map, Value};

pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value at `key`, if present and truthy.
pub fn get<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| truthy(v))
}

pub fn has(data: &Value, key: &str) -> bool {
    get(data, key).is_some()
}

/// True if any of `keys` is present and truthy.
pub fn has_any(data: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| has(data, key))
}

/// First present value among `keys`, rendered as text.
pub fn text(data: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| get(data, key).and_then(as_text))
}

pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn array<'a>(data: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    data.get(key).and_then(Value::as_array)
}

pub fn object<'a>(data: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    data.get(key).and_then(Value::as_object)
}

pub fn array_len(data: &Value, key: &str) -> u64 {
    array(data, key).map_or(0, |items| items.len() as u64)
}

/// Provenance block: the source tag plus whichever raw sub-structures exist.
pub fn metadata(source: &str, entries: &[(&str, Option<&Value>)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in entries {
        if let Some(value) = value.filter(|v| !v.is_null()) {
            map.insert((*key).to_string(), value.clone());
        }
    }
    map.insert("source".to_string(), Value::String(source.to_string()));
    map
}
