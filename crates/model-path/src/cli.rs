//! Core logic of the `model-path` binary.
//!
//! ```text
//! model-path [--separator <char>] [--strict] get <path>
//! model-path [--separator <char>] [--strict] set <path> <json-value>
//! ```
//!
//! The document is read from stdin by the binary and passed in as text.

use serde_json::Value;
use thiserror::Error;

use crate::accessor::PathAccessor;
use crate::types::{AccessorOptions, ArrayKeyMode};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { path: String },
    Set { path: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub options: AccessorOptions,
    pub command: Command,
}

pub const USAGE: &str = "usage: model-path [--separator <char>] [--strict] (get <path> | set <path> <json-value>)";

/// Parse command-line arguments, without the program name.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = AccessorOptions::default();
    let mut args = args.into_iter().map(Into::into);
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => options.array_keys = ArrayKeyMode::Strict,
            "--separator" | "-s" => {
                let sep = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--separator needs a value".to_string()))?;
                let mut chars = sep.chars();
                options.separator = match (chars.next(), chars.next()) {
                    (Some(c), None) if c != '[' && c != ']' => c,
                    _ => {
                        return Err(CliError::Usage(format!(
                            "separator must be a single character other than a bracket, got {sep:?}"
                        )))
                    }
                };
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match (positional.next().as_deref(), positional.next(), positional.next()) {
        (Some("get"), Some(path), None) => Command::Get { path },
        (Some("set"), Some(path), Some(value)) => Command::Set { path, value },
        _ => return Err(CliError::Usage(USAGE.to_string())),
    };
    if positional.next().is_some() {
        return Err(CliError::Usage(USAGE.to_string()));
    }
    Ok(Invocation { options, command })
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Read the value at `path` in a JSON document.
///
/// Prints `null` when the value is absent.
pub fn lookup_path(doc_json: &str, path: &str, options: AccessorOptions) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let accessor = PathAccessor::with_options(options);
    match accessor.get_value(Some(path), &doc) {
        Some(found) => Ok(serde_json::to_string_pretty(found)?),
        None => Ok(Value::Null.to_string()),
    }
}

/// Write a value at `path` in a JSON document and return the updated document.
///
/// `value_text` is parsed as JSON; text that is not valid JSON is stored as a
/// string.
pub fn write_path(
    doc_json: &str,
    path: &str,
    value_text: &str,
    options: AccessorOptions,
) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let value = serde_json::from_str(value_text).unwrap_or_else(|_| Value::String(value_text.to_string()));
    PathAccessor::with_options(options).set_value(path, value, &mut doc);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Run a parsed invocation against a document.
pub fn run(invocation: &Invocation, doc_json: &str) -> Result<String, CliError> {
    match &invocation.command {
        Command::Get { path } => lookup_path(doc_json, path, invocation.options),
        Command::Set { path, value } => write_path(doc_json, path, value, invocation.options),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_get() {
        let inv = parse_args(["get", "a.b"]).unwrap();
        assert_eq!(inv.command, Command::Get { path: "a.b".to_string() });
        assert_eq!(inv.options, AccessorOptions::default());
    }

    #[test]
    fn test_args_set_with_flags() {
        let inv = parse_args(["--separator", "/", "--strict", "set", "a/b", "1"]).unwrap();
        assert_eq!(
            inv.command,
            Command::Set {
                path: "a/b".to_string(),
                value: "1".to_string()
            }
        );
        assert_eq!(inv.options.separator, '/');
        assert_eq!(inv.options.array_keys, ArrayKeyMode::Strict);
    }

    #[test]
    fn test_args_invalid() {
        assert!(matches!(parse_args(Vec::<String>::new()), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["get"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["get", "a", "b"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["set", "a", "1", "2"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["--separator", "ab", "get", "a"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["--separator", "[", "get", "a"]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(["--separator"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_lookup_nested() {
        let doc = r#"{"foo":{"bar":[1,2,42]}}"#;
        let out = lookup_path(doc, "foo.bar.", AccessorOptions::default()).unwrap();
        assert_eq!(out.trim(), "42");
    }

    #[test]
    fn test_lookup_missing_prints_null() {
        let out = lookup_path(r#"{"a":1}"#, "z.y", AccessorOptions::default()).unwrap();
        assert_eq!(out, "null");
    }

    #[test]
    fn test_lookup_invalid_json() {
        let err = lookup_path("{", "a", AccessorOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_write_json_value() {
        let out = write_path("{}", "a.0.b", r#"{"x":true}"#, AccessorOptions::default()).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"a": [{"b": {"x": true}}]}));
    }

    #[test]
    fn test_write_plain_text_as_string() {
        let out = write_path("{}", "name", "Ada Lovelace", AccessorOptions::default()).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["name"], "Ada Lovelace");
    }

    #[test]
    fn test_run_dispatches() {
        let inv = parse_args(["set", "list.", "3"]).unwrap();
        let out = run(&inv, r#"{"list":[1,2]}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["list"], serde_json::json!([1, 2, 3]));
    }
}
