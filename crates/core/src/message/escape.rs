//! Narrow percent-escaping for messaging deep links.
//!
//! The messaging client decodes exactly four characters from the `text`
//! parameter of its deep links. Everything else, Arabic script included, must
//! reach it unchanged, so this is deliberately not general URI encoding.

/// Percent-encoded form of `c`, if `c` is one of the escaped characters.
#[must_use]
pub const fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '*' => Some("%2A"),
        ' ' => Some("%20"),
        '\n' => Some("%0A"),
        ':' => Some("%3A"),
        _ => None,
    }
}

/// Escape `*`, space, newline, and `:`; copy every other character as is.
///
/// ```
/// use dukkan_core::message::escape_message;
///
/// assert_eq!(escape_message("*السلة*\nالكمية: 2"), "%2Aالسلة%2A%0Aالكمية%3A%202");
/// assert_eq!(escape_message("100%/a?b=c"), "100%/a?b=c");
/// ```
#[must_use]
pub fn escape_message(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match escape_char(c) {
            Some(encoded) => escaped.push_str(encoded),
            None => escaped.push(c),
        }
    }
    escaped
}
