//! Conversions between JSON documents and engine values.

use crate::{ExprError, Value};

/// Converts a JSON value into an engine [`Value`].
///
/// Numbers, strings, booleans, and arrays convert directly. JSON `null`
/// and nested objects have no expression-value form: objects are only
/// reachable as intermediate steps of a dotted variable name.
pub fn json_to_value(json: &serde_json::Value) -> Result<Value, ExprError> {
    match json {
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).ok_or_else(|| {
            ExprError::TypeMismatch(format!("number {} is not representable as f64", n))
        }),
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::Array(items) => items
            .iter()
            .map(json_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_json::Value::Null => Err(ExprError::TypeMismatch(
            "JSON null has no expression value".to_string(),
        )),
        serde_json::Value::Object(_) => Err(ExprError::TypeMismatch(
            "JSON objects must be dereferenced with dotted variable names".to_string(),
        )),
    }
}

/// Converts an evaluation result back to JSON for printing.
///
/// Host objects and non-finite numbers have no JSON form.
pub fn value_to_json(value: &Value) -> Result<serde_json::Value, ExprError> {
    match value {
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .ok_or_else(|| {
                ExprError::InvalidOperation(format!("number {} is not representable in JSON", n))
            }),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Array(items) => items
            .iter()
            .map(value_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array),
        Value::Object(_) => Err(ExprError::InvalidOperation(
            "host objects are not representable in JSON".to_string(),
        )),
    }
}
