use crate::types::Path;

/// Parse a path string into steps.
///
/// The first `[` is replaced by `separator` and the first `]` is removed,
/// then the string is split on `separator`. Empty steps produced by a
/// trailing or doubled separator are kept.
///
/// Only the first bracket pair is normalized: `"a[0].b[1]"` parses to
/// `["a", "0", "b[1"]`. Use [`crate::validate_path`] to detect such paths.
///
/// # Example
///
/// ```
/// use model_path::parse_path;
///
/// assert_eq!(parse_path("a.b.c", '.'), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("items[2]", '.'), vec!["items", "2"]);
/// assert_eq!(parse_path("items[]", '.'), vec!["items", ""]);
/// assert_eq!(parse_path("", '.'), vec![""]);
/// ```
pub fn parse_path(path: &str, separator: char) -> Path {
    let mut buf = [0u8; 4];
    let sep: &str = separator.encode_utf8(&mut buf);
    path.replacen('[', sep, 1)
        .replacen(']', "", 1)
        .split(separator)
        .map(str::to_owned)
        .collect()
}
