//! Array key recognition.
//!
//! Auto-vivification looks one step ahead and creates an array when the next
//! step is an array key, otherwise an object.

use crate::types::ArrayKeyMode;

/// Check if a step should make its parent an array.
///
/// The empty step is always an array key. Other keys are judged by `mode`.
///
/// # Example
///
/// ```
/// use model_path::{is_array_key, ArrayKeyMode};
///
/// assert!(is_array_key("", ArrayKeyMode::Permissive));
/// assert!(is_array_key("0", ArrayKeyMode::Permissive));
/// assert!(is_array_key("3foo", ArrayKeyMode::Permissive));
/// assert!(!is_array_key("3foo", ArrayKeyMode::Strict));
/// assert!(!is_array_key("abc", ArrayKeyMode::Permissive));
/// ```
pub fn is_array_key(key: &str, mode: ArrayKeyMode) -> bool {
    if key.is_empty() {
        return true;
    }
    match mode {
        ArrayKeyMode::Permissive => parse_int_prefix(key).is_some(),
        ArrayKeyMode::Strict => is_integer(key),
    }
}

/// Parse the leading base-10 integer of a string.
///
/// Leading whitespace and a single `+` or `-` sign are skipped, then digits
/// are consumed up to the first non-digit. Returns `None` when no digit is
/// found. Values beyond the `i64` range saturate.
///
/// Whitespace is the ECMAScript `WhiteSpace` and `LineTerminator` set, which
/// is narrower than [`char::is_whitespace`]: U+0085 is not skipped.
///
/// # Example
///
/// ```
/// use model_path::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("42"), Some(42));
/// assert_eq!(parse_int_prefix("  -7px"), Some(-7));
/// assert_eq!(parse_int_prefix("3foo"), Some(3));
/// assert_eq!(parse_int_prefix("foo3"), None);
/// ```
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(is_js_whitespace);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let magnitude = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000d}'
            | ' '
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a key as a position in an array.
///
/// Only canonical non-negative integers address array elements: `"01"`,
/// `"+1"` and `"1.0"` do not.
pub fn parse_index(key: &str) -> Option<usize> {
    if !is_integer(key) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}
