use serde_json::Value;

use super::rules::clean_text;

/// Recursively clean every string leaf of a JSON value.
///
/// Container shape is preserved: keys, array lengths, and non-string
/// scalars pass through unchanged. Only leaf strings are rewritten.
pub fn clean_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(clean_text(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(clean_value).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, clean_value(v))).collect())
        }
        other => other,
    }
}
