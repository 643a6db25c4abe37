//! Whitespace trimming against a fixed six-character class.
//!
//! The class is the classic C set {space, tab, vertical tab, form feed,
//! newline, carriage return}. It is deliberately NOT `char::is_whitespace`
//! (which admits Unicode spaces) and NOT `u8::is_ascii_whitespace` (which
//! excludes vertical tab), so the membership test is spelled out here.
//!
//! All class members are single-byte ASCII, so the scans below work on
//! bytes and every boundary they produce is a valid `char` boundary.

/// The whitespace class, in scan order.
pub const WHITESPACE: &str = " \t\x0B\x0C\n\r";

/// Membership test for the whitespace class.
#[inline]
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C' | '\n' | '\r')
}

#[inline]
const fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C | b'\n' | b'\r')
}

/// Return the subslice of `s` with leading and trailing whitespace-class
/// characters removed. Interior whitespace is untouched.
///
/// All-whitespace input yields the empty slice; input with nothing to
/// trim comes back with identical bounds. Never allocates.
///
/// # Examples
///
/// ```
/// assert_eq!(strfold::trim("\t\x0B \x0C\n\rfoo \nbar\t\r \x0C\n\x0B"), "foo \nbar");
/// assert_eq!(strfold::trim(" \x0C\n\r\t\x0B"), "");
/// ```
#[must_use]
pub fn trim(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && is_whitespace_byte(bytes[start]) {
        start += 1;
    }
    while end > start && is_whitespace_byte(bytes[end - 1]) {
        end -= 1;
    }
    &s[start..end]
}

/// Return the subslice of `s` with leading whitespace-class characters
/// removed.
#[must_use]
pub fn trim_start(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut start = 0;
    while start < bytes.len() && is_whitespace_byte(bytes[start]) {
        start += 1;
    }
    &s[start..]
}

/// Return the subslice of `s` with trailing whitespace-class characters
/// removed.
#[must_use]
pub fn trim_end(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = bytes.len();
    while end > 0 && is_whitespace_byte(bytes[end - 1]) {
        end -= 1;
    }
    &s[..end]
}

/// Trim the buffer in place, erasing the leading and trailing
/// whitespace-class characters from it.
pub fn trim_in_place(s: &mut String) {
    let end = trim_end(s).len();
    s.truncate(end);
    let start = s.len() - trim_start(s).len();
    s.drain(..start);
}

/// Shrink the view's bounds to the trimmed range.
pub fn trim_view_in_place(s: &mut &str) {
    *s = trim(s);
}
