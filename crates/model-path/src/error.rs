use thiserror::Error;

/// Failure while reading or writing a model path.
///
/// The public [`crate::get_value`] and [`crate::set_value`] never return
/// these; they surface through [`crate::find`] and [`crate::try_set_value`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    EmptyPath,
    #[error("model is absent")]
    FalsyModel,
    #[error("nothing found at step {step:?}")]
    NotFound { step: String },
    #[error("cannot step into {kind} value with {step:?}")]
    NotAContainer { step: String, kind: &'static str },
    #[error("invalid array index {step:?}")]
    InvalidIndex { step: String },
    #[error("index {index} is too far past the end of an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("empty step needs an array, found {kind}")]
    NotAnArray { kind: &'static str },
}

pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
