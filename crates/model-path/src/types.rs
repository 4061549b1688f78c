//! Type definitions for model paths.

use serde::{Deserialize, Serialize};

/// A step in a model path.
///
/// Either an object key, an array index in string form, or the empty step
/// (`""`), which addresses the last element of an array on read and appends
/// on write.
pub type Step = String;

/// A parsed model path.
pub type Path = Vec<Step>;

/// The default step separator.
pub const DEFAULT_SEPARATOR: char = '.';

/// Check if a step is the empty step.
pub fn is_empty_step(step: &str) -> bool {
    step.is_empty()
}

/// How a path step is recognised as an array key when deciding the kind of
/// container to create during a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayKeyMode {
    /// Integer-prefix parse: leading whitespace, an optional sign and
    /// trailing non-digits are tolerated, so `"3foo"` and `"-1"` count.
    #[default]
    Permissive,
    /// Only keys made entirely of ASCII digits count.
    Strict,
}

/// Options shared by every read and write of a [`crate::PathAccessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorOptions {
    /// Step separator. `[` and `]` must not be used here.
    pub separator: char,
    /// Array key recognition used by auto-vivification.
    pub array_keys: ArrayKeyMode,
}

impl Default for AccessorOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            array_keys: ArrayKeyMode::Permissive,
        }
    }
}
