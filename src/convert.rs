//! JSON <-> propmap Value conversion utilities

use crate::{
    Value,
    parser::parse,
    resolver::{ResolveError, resolve},
};

/// Convert serde_json::Value to propmap Value
pub fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            // u64 beyond i64::MAX or a real float
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(obj) => {
            Value::Object(obj.into_iter().map(|(k, v)| (k, json_to_value(v))).collect())
        }
    }
}

/// Convert propmap Value to serde_json::Value
///
/// Non-finite floats have no JSON form and become `null`.
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
        Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(value_to_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.into_iter()
                .map(|(k, v)| (k, value_to_json(v)))
                .collect(),
        ),
    }
}

/// Parse `path` and resolve it against a serde_json document.
///
/// # Examples
///
/// ```
/// use propmap::convert::resolve_json;
/// use serde_json::json;
///
/// let doc = json!({"roles": [{"name": "a"}, {"name": "b"}]});
/// assert_eq!(resolve_json(&doc, "roles[].name").unwrap(), json!(["a", "b"]));
/// ```
pub fn resolve_json(document: &serde_json::Value, path: &str) -> Result<serde_json::Value, ResolveError> {
    let value = json_to_value(document.clone());
    resolve(&value, &parse(path)).map(value_to_json)
}
