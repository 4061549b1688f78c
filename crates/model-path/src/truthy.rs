//! Falsiness of model values.
//!
//! A value is falsy when it is `null`, `false`, numeric zero or the empty
//! string. Arrays and objects are always truthy, even when empty.

use serde_json::Value;

/// Check if a value is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check if a value is falsy.
pub fn is_falsy(value: &Value) -> bool {
    !is_truthy(value)
}

/// Replace a falsy value with `null`, the absent marker.
pub fn normalize_falsy(value: Value) -> Value {
    if is_truthy(&value) {
        value
    } else {
        Value::Null
    }
}
