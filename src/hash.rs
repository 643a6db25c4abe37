//! Case-folded hashing and case-insensitive map keys.
//!
//! The contract tying this module to [`crate::fold`] is hash/equality
//! consistency: whenever [`eq_ignore_case`] says two strings are equal,
//! they must produce the same hash. Both [`lowercase_hash`] and the
//! [`IgnoreCase`] wrapper achieve this the same way — by feeding the
//! lowercase-folded byte stream (plus the `0xFF` terminator that `str`'s
//! own `Hash` impl uses) into the hasher, so equal-ignoring-case inputs
//! are indistinguishable at the hasher level.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::fold::{cmp_ignore_case, eq_ignore_case};

/// Feed the folded form of `s` into `state`, terminated like `str::hash`.
fn write_folded<H: Hasher>(state: &mut H, s: &str) {
    for b in s.bytes() {
        state.write_u8(b.to_ascii_lowercase());
    }
    state.write_u8(0xFF);
}

/// Hash a string by its lowercase-folded form.
///
/// Deterministic within a process; for all `a`, `b`,
/// `eq_ignore_case(a, b)` implies `lowercase_hash(a) == lowercase_hash(b)`.
///
/// # Examples
///
/// ```
/// assert_eq!(strfold::lowercase_hash("FOO"), strfold::lowercase_hash("foo"));
/// assert_ne!(strfold::lowercase_hash("foo"), strfold::lowercase_hash("foobar"));
/// ```
#[must_use]
pub fn lowercase_hash(s: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    write_folded(&mut hasher, s);
    hasher.finish()
}

/// Wrapper giving any string-like value case-insensitive equality,
/// ordering, and hashing, making it usable as a `HashMap`/`BTreeMap` key.
///
/// `Hash` feeds the same folded stream as [`lowercase_hash`] into the
/// caller's `Hasher`, so the hash/equality contract holds under any
/// `BuildHasher` a map supplies. Equality works across wrapped types:
/// `IgnoreCase("foo") == IgnoreCase(String::from("FOO"))`.
///
/// # Examples
///
/// ```
/// use strfold::{IgnoreCase, IgnoreCaseMap};
///
/// let mut headers: IgnoreCaseMap<u16> = IgnoreCaseMap::new();
/// headers.insert(IgnoreCase::new("Content-Length"), 42);
/// assert_eq!(headers.get(&IgnoreCase::new("content-length")), Some(&42));
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[repr(transparent)]
pub struct IgnoreCase<S>(pub S);

impl<S: AsRef<str>> IgnoreCase<S> {
    /// Wrap a string-like value.
    pub const fn new(inner: S) -> Self {
        Self(inner)
    }

    /// Consume the wrapper, returning the inner value.
    pub fn into_inner(self) -> S {
        self.0
    }

    /// View the wrapped text.
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl<S: AsRef<str>, T: AsRef<str>> PartialEq<IgnoreCase<T>> for IgnoreCase<S> {
    fn eq(&self, other: &IgnoreCase<T>) -> bool {
        eq_ignore_case(self.as_str(), other.as_str())
    }
}

impl<S: AsRef<str>> Eq for IgnoreCase<S> {}

impl<S: AsRef<str>> Hash for IgnoreCase<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        write_folded(state, self.as_str());
    }
}

impl<S: AsRef<str>, T: AsRef<str>> PartialOrd<IgnoreCase<T>> for IgnoreCase<S> {
    fn partial_cmp(&self, other: &IgnoreCase<T>) -> Option<std::cmp::Ordering> {
        Some(cmp_ignore_case(self.as_str(), other.as_str()))
    }
}

impl<S: AsRef<str>> Ord for IgnoreCase<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        cmp_ignore_case(self.as_str(), other.as_str())
    }
}

impl<S: AsRef<str>> fmt::Display for IgnoreCase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: AsRef<str>> From<S> for IgnoreCase<S> {
    fn from(inner: S) -> Self {
        Self(inner)
    }
}

impl<S: AsRef<str>> AsRef<str> for IgnoreCase<S> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Map keyed by borrowed text, compared and hashed ignoring ASCII case.
///
/// For owned keys use `HashMap<IgnoreCase<String>, V>` and probe with
/// `&IgnoreCase::new(owned)`.
pub type IgnoreCaseMap<'a, V> = HashMap<IgnoreCase<&'a str>, V>;

/// Set of borrowed text, deduplicated ignoring ASCII case.
pub type IgnoreCaseSet<'a> = HashSet<IgnoreCase<&'a str>>;
