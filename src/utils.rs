//! String helpers shared by the extractors and log statements.

use crate::error::{Error, Result};

/// Pull the URL out of an inline CSS declaration such as
/// `background-image:url(https://x/y.jpg)`.
///
/// Takes everything after the first `(` up to the first `)` that follows it.
/// No quote stripping is done.
///
/// # Errors
///
/// [`Error::StyleUrl`] when the declaration has no `(` or no closing `)`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_style_url("background-image:url(a.jpg)").unwrap(), "a.jpg");
/// ```
pub fn parse_style_url(decl: &str) -> Result<&str> {
    decl.split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(url, _)| url)
        .ok_or_else(|| Error::StyleUrl(decl.to_string()))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
