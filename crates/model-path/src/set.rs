use serde_json::{Map, Value};

use crate::array_key::{is_array_key, parse_index};
use crate::error::{kind_of, PathError};
use crate::parse::parse_path;
use crate::truthy::{is_falsy, normalize_falsy};
use crate::types::{AccessorOptions, ArrayKeyMode, Step};

/// Traversal state of a write: the intermediate steps and the final key
/// they lead to.
#[derive(Debug, Clone, Copy)]
pub struct WriteContext<'p> {
    pub steps: &'p [Step],
    pub final_key: &'p str,
    pub array_keys: ArrayKeyMode,
}

impl<'p> WriteContext<'p> {
    /// Split a parsed path into intermediate steps and final key.
    ///
    /// Returns `None` for a path without steps.
    pub fn new(path: &'p [Step], array_keys: ArrayKeyMode) -> Option<Self> {
        let (final_key, steps) = path.split_last()?;
        Some(Self {
            steps,
            final_key,
            array_keys,
        })
    }

    /// The key that follows intermediate step `idx`.
    pub fn next_key(&self, idx: usize) -> &'p str {
        self.steps
            .get(idx + 1)
            .map(String::as_str)
            .unwrap_or(self.final_key)
    }

    /// Empty container to create when intermediate step `idx` is missing.
    fn container_for(&self, idx: usize) -> Value {
        if is_array_key(self.next_key(idx), self.array_keys) {
            Value::Array(Vec::new())
        } else {
            Value::Object(Map::new())
        }
    }
}

/// Largest number of `null` elements a single write may pad an array with.
pub const MAX_ARRAY_PADDING: usize = 1 << 16;

/// Slot for `key` in `container`, grown as needed.
///
/// Arrays are padded with `null` up to the requested index.
fn slot<'a>(container: &'a mut Value, key: &str) -> Result<&'a mut Value, PathError> {
    match container {
        Value::Object(map) => Ok(map.entry(key).or_insert(Value::Null)),
        Value::Array(arr) => {
            let idx = parse_index(key).ok_or_else(|| PathError::InvalidIndex {
                step: key.to_owned(),
            })?;
            if idx >= arr.len() {
                if idx - arr.len() > MAX_ARRAY_PADDING {
                    return Err(PathError::IndexOutOfRange { index: idx, len: arr.len() });
                }
                arr.resize(idx + 1, Value::Null);
            }
            Ok(&mut arr[idx])
        }
        other => Err(PathError::NotAContainer {
            step: key.to_owned(),
            kind: kind_of(other),
        }),
    }
}

/// Step into `container[key]`, creating the container when it is missing.
///
/// A missing or falsy value at `key` is replaced by an empty array when the
/// following key is an array key, otherwise by an empty object.
pub fn vivify_step<'a>(
    container: &'a mut Value,
    key: &str,
    idx: usize,
    ctx: &WriteContext<'_>,
) -> Result<&'a mut Value, PathError> {
    let next = slot(container, key)?;
    if is_falsy(next) {
        *next = ctx.container_for(idx);
        tracing::debug!(step = key, kind = kind_of(next), "created missing container");
    }
    Ok(next)
}

/// Store `value` at the final key of a write.
fn assign(container: &mut Value, final_key: &str, value: Value) -> Result<(), PathError> {
    if final_key.is_empty() {
        return match container {
            Value::Array(arr) => {
                arr.push(value);
                Ok(())
            }
            other => Err(PathError::NotAnArray {
                kind: kind_of(other),
            }),
        };
    }
    *slot(container, final_key)? = value;
    Ok(())
}

/// Write `value` at `path`, creating missing intermediate containers.
///
/// Falsy values are stored as `null`. Containers created before a failure
/// stay attached to the model.
///
/// # Errors
///
/// - `PathError::EmptyPath` - if `path` is empty
/// - `PathError::FalsyModel` - if `model` is falsy
/// - `PathError::NotAContainer` - if the path goes through a leaf value
/// - `PathError::InvalidIndex` - if an array is keyed by a non-index
/// - `PathError::IndexOutOfRange` - if an index is far past the array end
/// - `PathError::NotAnArray` - if the final empty step targets a non-array
///
/// # Example
///
/// ```
/// use model_path::{try_set_value, AccessorOptions};
/// use serde_json::json;
///
/// let mut model = json!({});
/// try_set_value("a.0.b", json!("x"), &mut model, AccessorOptions::default()).unwrap();
/// assert_eq!(model, json!({"a": [{"b": "x"}]}));
/// ```
pub fn try_set_value(
    path: &str,
    value: Value,
    model: &mut Value,
    options: AccessorOptions,
) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if is_falsy(model) {
        return Err(PathError::FalsyModel);
    }
    let steps = parse_path(path, options.separator);
    let ctx = WriteContext::new(&steps, options.array_keys).ok_or(PathError::EmptyPath)?;

    let mut current = model;
    for (idx, key) in ctx.steps.iter().enumerate() {
        current = vivify_step(current, key, idx, &ctx)?;
    }

    assign(current, ctx.final_key, normalize_falsy(value))
}

/// Write `value` at a `.`-separated path.
///
/// An empty path or a falsy model makes this a no-op. Any other failure is
/// reported as a `warn` event and otherwise ignored.
///
/// # Example
///
/// ```
/// use model_path::set_value;
/// use serde_json::json;
///
/// let mut model = json!({"list": [1, 2]});
/// set_value("list.", json!(5), &mut model);
/// assert_eq!(model, json!({"list": [1, 2, 5]}));
/// ```
pub fn set_value(path: &str, value: Value, model: &mut Value) {
    set_value_with_options(path, value, model, AccessorOptions::default());
}

/// Write `value` at a path, with explicit options.
pub fn set_value_with_options(path: &str, value: Value, model: &mut Value, options: AccessorOptions) {
    if path.is_empty() || is_falsy(model) {
        return;
    }
    if let Err(error) = try_set_value(path, value, model, options) {
        tracing::warn!(path, %error, "failed to write model value");
    }
}
