//! ASCII case folding and the comparisons derived from it.
//!
//! The folding rule is deliberately narrow: `'A'..='Z'` map to their
//! lowercase counterparts and every other character passes through
//! unchanged, including non-ASCII letters. Because the fold only ever
//! touches single-byte ASCII, it preserves byte length and never splits
//! a UTF-8 sequence, which lets the bulk operations below work on bytes.

use std::cmp::Ordering;

/// Fold a single character: ASCII uppercase becomes lowercase, everything
/// else is returned unchanged.
#[inline]
#[must_use]
pub const fn fold_char(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Return a new string with every ASCII uppercase letter lowercased.
///
/// Non-ASCII characters pass through untouched; empty input yields an
/// empty string.
///
/// # Examples
///
/// ```
/// assert_eq!(strfold::to_lower("FOO"), "foo");
/// assert_eq!(strfold::to_lower("Grüße"), "grüße");
/// ```
#[must_use]
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Lowercase every ASCII uppercase letter in the buffer, in place.
///
/// Takes `&mut str` since ASCII folding never changes byte length, so it
/// works on a `String` via auto-deref as well as on an exclusive slice.
pub fn to_lower_in_place(s: &mut str) {
    s.make_ascii_lowercase();
}

/// Case-insensitive (ASCII) equality.
///
/// Short-circuits on differing lengths without allocating, then compares
/// folded characters position by position. Commutative and reflexive.
///
/// # Examples
///
/// ```
/// assert!(strfold::eq_ignore_case("FOOBAR", "foobar"));
/// assert!(!strfold::eq_ignore_case("foo", "foobar"));
/// ```
#[inline]
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Total order over folded byte sequences.
///
/// Returns `Ordering::Equal` exactly when [`eq_ignore_case`] holds.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

/// Check whether `s` starts with `prefix`, ignoring ASCII case.
///
/// A subject shorter than the prefix is `false`, as is a prefix length
/// that would land inside a multi-byte character of the subject.
#[must_use]
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Case-insensitive (ASCII) substring search.
///
/// The empty needle is found in every haystack.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
