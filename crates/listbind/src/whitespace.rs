//! XML whitespace handling.
//!
//! XML recognizes exactly four whitespace characters: space, tab, line feed
//! and carriage return. The functions here implement the `xs:whiteSpace`
//! facet values (`replace`, `collapse`) plus trimming over that class.

use std::borrow::Cow;

/// Checks if `c` is XML whitespace.
#[inline]
pub fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Byte-level variant of [`is_xml_whitespace`].
///
/// All four characters are ASCII, so a UTF-8 string can be scanned byte by
/// byte and split at matching positions without landing inside a character.
#[inline]
pub fn is_xml_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Strips leading and trailing XML whitespace.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_xml_whitespace)
}

/// Replaces every tab, line feed and carriage return with a space.
pub fn replace(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(|b| matches!(b, b'\t' | b'\n' | b'\r')) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| if is_xml_whitespace(c) { ' ' } else { c })
            .collect(),
    )
}

/// Trims, then reduces every internal whitespace run to a single space.
pub fn collapse(s: &str) -> Cow<'_, str> {
    let trimmed = trim(s);
    let needs_work = trimmed
        .as_bytes()
        .windows(2)
        .any(|w| is_xml_whitespace_byte(w[0]) && is_xml_whitespace_byte(w[1]))
        || trimmed.bytes().any(|b| matches!(b, b'\t' | b'\n' | b'\r'));
    if !needs_work {
        return Cow::Borrowed(trimmed);
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut in_run = false;
    for c in trimmed.chars() {
        if is_xml_whitespace(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    Cow::Owned(out)
}
