//! URL shape checks used by the query interpreter.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Minimal absolute-URL shape: non-whitespace, `://`, non-whitespace.
static IMPLICIT_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+://\S+").expect("implicit URL pattern is valid"));

/// Finds the URL-looking part of free search text.
///
/// Used when the plugin is matched globally rather than through its action
/// keyword: text without a match is none of our business.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(capture_implicit_url("see https://example.com"), Some("https://example.com"));
/// assert_eq!(capture_implicit_url("hello world"), None);
/// ```
pub fn capture_implicit_url(text: &str) -> Option<&str> {
    IMPLICIT_URL_REGEX.find(text).map(|m| m.as_str())
}

/// Returns true if `input` parses as an absolute URI.
///
/// Any scheme is accepted; relative references such as `example.com/path`
/// are rejected.
pub fn is_absolute_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
