use serde_json::Value;

use crate::array_key::is_array_key;
use crate::error::PathError;
use crate::get::get_value_with_separator;
use crate::parse::parse_path;
use crate::set::{set_value_with_options, try_set_value};
use crate::types::{AccessorOptions, ArrayKeyMode, Path};

/// Reusable reader and writer of model paths.
///
/// Holds nothing but its options, so one accessor can serve any number of
/// models and paths.
///
/// # Example
///
/// ```
/// use model_path::PathAccessor;
/// use serde_json::json;
///
/// let accessor = PathAccessor::with_separator('/');
/// let mut model = json!({});
/// accessor.set_value("a/b", json!(1), &mut model);
/// assert_eq!(accessor.get_value(Some("a/b"), &model), Some(&json!(1)));
/// assert_eq!(accessor.get_value(None, &model), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathAccessor {
    options: AccessorOptions,
}

impl PathAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AccessorOptions) -> Self {
        Self { options }
    }

    pub fn with_separator(separator: char) -> Self {
        Self::with_options(AccessorOptions {
            separator,
            ..AccessorOptions::default()
        })
    }

    pub fn options(&self) -> AccessorOptions {
        self.options
    }

    pub fn parse_path(&self, path: &str) -> Path {
        parse_path(path, self.options.separator)
    }

    pub fn is_array_key(&self, key: &str) -> bool {
        is_array_key(key, self.options.array_keys)
    }

    pub fn array_keys(&self) -> ArrayKeyMode {
        self.options.array_keys
    }

    /// Read the value at `path`. A missing path reads as absent.
    pub fn get_value<'a>(&self, path: Option<&str>, model: &'a Value) -> Option<&'a Value> {
        get_value_with_separator(path?, model, self.options.separator)
    }

    /// Write `value` at `path`, logging failures.
    pub fn set_value(&self, path: &str, value: Value, model: &mut Value) {
        set_value_with_options(path, value, model, self.options);
    }

    /// Write `value` at `path`, returning failures.
    pub fn try_set_value(&self, path: &str, value: Value, model: &mut Value) -> Result<(), PathError> {
        try_set_value(path, value, model, self.options)
    }
}
