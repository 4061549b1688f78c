use serde_json::Value;

use crate::array_key::parse_index;
use crate::error::{kind_of, PathError};
use crate::parse::parse_path;
use crate::truthy::{is_falsy, is_truthy};
use crate::types::DEFAULT_SEPARATOR;

/// Dereference one step of a read.
fn step<'a>(current: &'a Value, key: &str) -> Result<&'a Value, PathError> {
    let not_found = || PathError::NotFound {
        step: key.to_owned(),
    };
    match current {
        Value::Array(arr) if key.is_empty() => arr.last().ok_or_else(not_found),
        Value::Array(arr) => {
            let idx = parse_index(key).ok_or_else(not_found)?;
            arr.get(idx).ok_or_else(not_found)
        }
        _ if key.is_empty() => Err(PathError::NotAnArray {
            kind: kind_of(current),
        }),
        Value::Object(map) => map.get(key).ok_or_else(not_found),
        other => Err(PathError::NotAContainer {
            step: key.to_owned(),
            kind: kind_of(other),
        }),
    }
}

/// Find the value addressed by `path` in `model`.
///
/// Unlike [`get_value`], this reports why a lookup failed and returns falsy
/// values as stored.
///
/// # Errors
///
/// - `PathError::FalsyModel` - if `model` is falsy
/// - `PathError::NotFound` - if a key or index is missing
/// - `PathError::NotAContainer` - if a step goes through a leaf value
/// - `PathError::NotAnArray` - if an empty step is applied to a non-array
pub fn find<'a>(model: &'a Value, path: &[String]) -> Result<&'a Value, PathError> {
    if is_falsy(model) {
        return Err(PathError::FalsyModel);
    }
    path.iter().try_fold(model, |current, key| step(current, key))
}

/// Read the value at a `.`-separated path.
///
/// Returns `None` when the path cannot be followed or when the value found
/// is falsy (`null`, `false`, `0`, `""`).
///
/// # Example
///
/// ```
/// use model_path::get_value;
/// use serde_json::json;
///
/// let model = json!({"user": {"tags": ["a", "b"]}});
/// assert_eq!(get_value("user.tags.0", &model), Some(&json!("a")));
/// assert_eq!(get_value("user.tags[]", &model), Some(&json!("b")));
/// assert_eq!(get_value("user.missing.x", &model), None);
/// ```
pub fn get_value<'a>(path: &str, model: &'a Value) -> Option<&'a Value> {
    get_value_with_separator(path, model, DEFAULT_SEPARATOR)
}

/// Read the value at a path split by `separator`.
pub fn get_value_with_separator<'a>(
    path: &str,
    model: &'a Value,
    separator: char,
) -> Option<&'a Value> {
    if is_falsy(model) {
        return None;
    }
    let steps = parse_path(path, separator);
    find(model, &steps).ok().filter(|v| is_truthy(v))
}
