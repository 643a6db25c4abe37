//! `strfold` - Case-insensitive ASCII string utilities
//!
//! A small, pure, allocation-conscious helper library providing ASCII
//! case folding, case-insensitive equality and hashing (usable as
//! `HashMap` keys via [`IgnoreCase`]), whitespace trimming against the
//! classic six-character C class, and exact prefix detection/removal.
//!
//! Every operation comes in a borrowing form and, where mutation makes
//! sense, in two explicit in-place forms: one over an owned `String`
//! (erasing characters) and one over a `&str` view (shrinking bounds).
//!
//! ```
//! use strfold::{IgnoreCase, IgnoreCaseMap};
//!
//! assert_eq!(strfold::to_lower("FOO"), "foo");
//! assert!(strfold::eq_ignore_case("FOOBAR", "foobar"));
//! assert_eq!(strfold::trim("\t foo \nbar\r\n"), "foo \nbar");
//! assert_eq!(strfold::remove_prefix("foobar", "foo"), "bar");
//!
//! let mut map: IgnoreCaseMap<u32> = IgnoreCaseMap::new();
//! map.insert(IgnoreCase::new("Accept"), 1);
//! assert_eq!(map.get(&IgnoreCase::new("ACCEPT")), Some(&1));
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // No unsafe anywhere in this crate
#![allow(clippy::module_name_repetitions)] // Allow IgnoreCaseMap etc
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod fold;
pub mod hash;
pub mod prefix;
pub mod trim;

// Re-export the full operation surface at crate root
pub use fold::{
    cmp_ignore_case, contains_ignore_case, eq_ignore_case, fold_char, starts_with_ignore_case,
    to_lower, to_lower_in_place,
};
pub use hash::{IgnoreCase, IgnoreCaseMap, IgnoreCaseSet, lowercase_hash};
pub use prefix::{
    remove_prefix, remove_prefix_in_place, remove_prefix_view_in_place, starts_with,
    starts_with_one_of,
};
pub use trim::{
    WHITESPACE, is_whitespace, trim, trim_end, trim_in_place, trim_start, trim_view_in_place,
};
