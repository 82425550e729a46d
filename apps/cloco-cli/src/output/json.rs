//! JSON rendering of API responses

use serde::Serialize;
use serde_json::{Map, Value};

/// Re-serialize a JSON document with sorted keys and four-space indentation
///
/// Returns `None` when `body` is not valid JSON.
pub fn format_json(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let sorted = sort_keys(value);

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    sorted.serialize(&mut serializer).ok()?;

    Some(String::from_utf8_lossy(&buf).into_owned())
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Pull the `configurationData` payload out of a configuration object
///
/// String payloads are returned as-is; any other JSON value is returned in
/// its compact form.
pub fn configuration_data(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("configurationData")? {
        Value::String(data) => Some(data.clone()),
        other => Some(other.to_string()),
    }
}
