//! Validation functions for model paths.
//!
//! [`crate::parse_path`] accepts every string. These checks report the path
//! shapes it does not handle as written.

use thiserror::Error;

use crate::parse::parse_path;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("only one bracket group is supported")]
    MultipleBracketGroups,
    #[error("unbalanced bracket")]
    UnbalancedBracket,
    #[error("empty step at position {0} is not the last step")]
    EmptyStepNotLast(usize),
    #[error("Path too long")]
    PathTooLong,
}

/// Validate a path string.
///
/// # Errors
///
/// Returns an error if:
/// - The path has more than one `[` (only the first pair is normalized)
/// - A `[` has no `]` after it, or a `]` appears alone
/// - An empty step appears anywhere but at the end
/// - The path exceeds the maximum depth (256 steps)
///
/// # Example
///
/// ```
/// use model_path::{validate_path, ValidationError};
///
/// validate_path("a.b[0]", '.').unwrap();
/// validate_path("list[]", '.').unwrap();
/// assert_eq!(validate_path("a[0].b[1]", '.'), Err(ValidationError::MultipleBracketGroups));
/// ```
pub fn validate_path(path: &str, separator: char) -> Result<(), ValidationError> {
    let opens = path.matches('[').count();
    if opens > 1 {
        return Err(ValidationError::MultipleBracketGroups);
    }
    match (path.find('['), path.find(']')) {
        (Some(open), Some(close)) if open < close => {}
        (None, None) => {}
        _ => return Err(ValidationError::UnbalancedBracket),
    }
    let steps = parse_path(path, separator);
    if steps.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    let last = steps.len() - 1;
    if let Some(pos) = steps[..last].iter().position(String::is_empty) {
        return Err(ValidationError::EmptyStepNotLast(pos));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plain_paths() {
        assert!(validate_path("a", '.').is_ok());
        assert!(validate_path("a.b.c", '.').is_ok());
        assert!(validate_path("a.0.b", '.').is_ok());
        assert!(validate_path("list.", '.').is_ok());
        assert!(validate_path("", '.').is_ok());
    }

    #[test]
    fn test_validate_single_bracket_group() {
        assert!(validate_path("a[0]", '.').is_ok());
        assert!(validate_path("a[0].b", '.').is_ok());
        assert!(validate_path("a[]", '.').is_ok());
    }

    #[test]
    fn test_validate_multiple_bracket_groups() {
        assert_eq!(validate_path("a[0].b[1]", '.'), Err(ValidationError::MultipleBracketGroups));
        assert_eq!(validate_path("a[0][1]", '.'), Err(ValidationError::MultipleBracketGroups));
    }

    #[test]
    fn test_validate_unbalanced_brackets() {
        assert_eq!(validate_path("a[0", '.'), Err(ValidationError::UnbalancedBracket));
        assert_eq!(validate_path("a]0", '.'), Err(ValidationError::UnbalancedBracket));
        assert_eq!(validate_path("a]0[", '.'), Err(ValidationError::UnbalancedBracket));
    }

    #[test]
    fn test_validate_inner_empty_step() {
        assert_eq!(validate_path("a..b", '.'), Err(ValidationError::EmptyStepNotLast(1)));
        assert_eq!(validate_path(".a", '.'), Err(ValidationError::EmptyStepNotLast(0)));
        assert_eq!(validate_path("a[].b", '.'), Err(ValidationError::EmptyStepNotLast(1)));
    }

    #[test]
    fn test_validate_long_path() {
        let path = vec!["k"; 300].join(".");
        assert_eq!(validate_path(&path, '.'), Err(ValidationError::PathTooLong));

        let path = vec!["k"; 256].join(".");
        assert!(validate_path(&path, '.').is_ok());
    }
}
