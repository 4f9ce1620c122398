//! Recursive JSON key sorting.

use serde_json::{Map, Value};

/// Return a deep copy of `value` with every object's keys sorted.
///
/// Arrays keep their element order and scalars pass through unchanged, so
/// only the emission order of object keys differs from the input.
///
/// ```
/// use loctool::sort::sort_value;
/// use serde_json::json;
///
/// let sorted = sort_value(&json!({"b": 1, "a": {"d": 2, "c": 3}}));
/// assert_eq!(sorted.to_string(), r#"{"a":{"c":3,"d":2},"b":1}"#);
/// ```
pub fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|key| (key.clone(), sort_value(&map[key])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        scalar => scalar.clone(),
    }
}
