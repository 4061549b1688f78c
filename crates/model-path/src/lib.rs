//! Nested path reads and writes over `serde_json` values.
//!
//! A path addresses a location in a model of objects and arrays with `.`
//! separated steps, e.g. `user.addresses.0.city`. One bracket group may be
//! used for an index (`addresses[0].city`) and an empty index means the last
//! element on read and append on write (`tags[]`).
//!
//! Writes create missing intermediate containers, choosing an array when the
//! following step is an array key and an object otherwise.
//!
//! # Example
//!
//! ```
//! use model_path::{get_value, set_value};
//! use serde_json::json;
//!
//! let mut model = json!({});
//! set_value("user.addresses.0.city", json!("Oslo"), &mut model);
//! assert_eq!(model, json!({"user": {"addresses": [{"city": "Oslo"}]}}));
//!
//! set_value("user.tags[]", json!("new"), &mut model);
//! assert_eq!(get_value("user.tags[]", &model), Some(&json!("new")));
//!
//! // Falsy values read as absent.
//! set_value("user.active", json!(false), &mut model);
//! assert_eq!(get_value("user.active", &model), None);
//! ```

pub mod accessor;
pub mod array_key;
pub mod cli;
pub mod error;
pub mod get;
pub mod parse;
pub mod set;
pub mod truthy;
pub mod types;
pub mod validate;

pub use accessor::PathAccessor;
pub use array_key::{is_array_key, is_integer, parse_index, parse_int_prefix};
pub use error::PathError;
pub use get::{find, get_value, get_value_with_separator};
pub use parse::parse_path;
pub use set::{set_value, set_value_with_options, try_set_value, vivify_step, WriteContext};
pub use truthy::{is_falsy, is_truthy, normalize_falsy};
pub use types::{is_empty_step, AccessorOptions, ArrayKeyMode, Path, Step, DEFAULT_SEPARATOR};
pub use validate::{validate_path, ValidationError};
