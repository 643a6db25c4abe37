//! Fuzz target for whitespace trimming.
//!
//! Checks that trimming arbitrary UTF-8 never panics, never splits a
//! character, and that all three forms agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strfold::{is_whitespace, trim, trim_end, trim_in_place, trim_start, trim_view_in_place};

fuzz_target!(|data: &str| {
    let trimmed = trim(data);
    assert_eq!(trim(trimmed), trimmed);
    assert_eq!(trim_end(trim_start(data)), trimmed);
    assert!(!trimmed.chars().next().is_some_and(is_whitespace));
    assert!(!trimmed.chars().next_back().is_some_and(is_whitespace));

    let mut view = data;
    trim_view_in_place(&mut view);
    assert_eq!(view, trimmed);

    let mut owned = data.to_owned();
    trim_in_place(&mut owned);
    assert_eq!(owned, trimmed);
});
