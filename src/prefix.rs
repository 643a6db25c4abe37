//! Exact prefix detection and removal.
//!
//! All checks are case-sensitive; the case-insensitive prefix test lives
//! in [`crate::fold`]. None of these operations has a failure mode: an
//! absent prefix is a pass-through, not an error.

/// Exact prefix test. A subject shorter than the prefix is `false`
/// without reading out of bounds.
#[inline]
#[must_use]
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Existential prefix test over a collection of candidates.
///
/// Short-circuits on the first match; order of candidates does not affect
/// the result. Accepts arrays, slices, and any iterator of string-likes.
///
/// # Examples
///
/// ```
/// assert!(strfold::starts_with_one_of("foobar", ["bar", "foobar", "foo"]));
/// assert!(!strfold::starts_with_one_of("buz", ["bar", "foobar", "foo"]));
/// ```
pub fn starts_with_one_of<I>(s: &str, prefixes: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    prefixes.into_iter().any(|p| s.starts_with(p.as_ref()))
}

/// Return the remainder of `s` after `prefix` when present (empty when
/// `s == prefix`), or `s` unchanged otherwise. Never allocates.
///
/// # Examples
///
/// ```
/// assert_eq!(strfold::remove_prefix("foobar", "foo"), "bar");
/// assert_eq!(strfold::remove_prefix("foo", "bar"), "foo");
/// assert_eq!(strfold::remove_prefix("foo", "foo"), "");
/// ```
#[must_use]
pub fn remove_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Erase `prefix` from the front of the buffer when present; leave the
/// buffer untouched otherwise.
pub fn remove_prefix_in_place(s: &mut String, prefix: &str) {
    if s.starts_with(prefix) {
        s.drain(..prefix.len());
    }
}

/// Advance the view's start bound past `prefix` when present; leave the
/// view untouched otherwise.
pub fn remove_prefix_view_in_place(s: &mut &str, prefix: &str) {
    *s = remove_prefix(s, prefix);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with() {
        assert!(!starts_with("foo", "foobar"));
        assert!(!starts_with("foobar", "bar"));
        assert!(starts_with("foobar", "foobar"));
        assert!(starts_with("foobar", "foo"));
        assert!(starts_with("anything", ""));
    }

    #[test]
    fn test_starts_with_one_of() {
        assert!(starts_with_one_of("foobar", ["bar", "foobar", "foo"]));
        assert!(!starts_with_one_of("buz", ["bar", "foobar", "foo"]));
        assert!(!starts_with_one_of("foobar", Vec::<&str>::new()));
    }

    #[test]
    fn test_starts_with_one_of_accepts_owned_items() {
        let candidates = vec![String::from("bar"), String::from("foo")];
        assert!(starts_with_one_of("foobar", &candidates));
    }

    #[test]
    fn test_remove_prefix() {
        assert_eq!(remove_prefix("foobar", "foo"), "bar");
        assert_eq!(remove_prefix("foo", "bar"), "foo");
        assert_eq!(remove_prefix("foo", "foo"), "");
    }

    #[test]
    fn test_remove_prefix_in_place() {
        let mut s = String::from("foobar");
        remove_prefix_in_place(&mut s, "foo");
        assert_eq!(s, "bar");

        let mut unchanged = String::from("foobar");
        remove_prefix_in_place(&mut unchanged, "bar");
        assert_eq!(unchanged, "foobar");

        let mut whole = String::from("foobar");
        remove_prefix_in_place(&mut whole, "foobar");
        assert!(whole.is_empty());
    }

    #[test]
    fn test_remove_prefix_view_in_place() {
        let mut view = "foobar";
        remove_prefix_view_in_place(&mut view, "foo");
        assert_eq!(view, "bar");

        let mut unchanged = "foobar";
        remove_prefix_view_in_place(&mut unchanged, "bar");
        assert_eq!(unchanged, "foobar");

        let mut whole = "foobar";
        remove_prefix_view_in_place(&mut whole, "foobar");
        assert!(whole.is_empty());
    }
}
