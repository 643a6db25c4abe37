//! Fuzz target for prefix detection and removal.
//!
//! Splits the input into subject and prefix at every char boundary of a
//! small window and checks the removal length law on each pair.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strfold::{remove_prefix, remove_prefix_in_place, remove_prefix_view_in_place, starts_with};

fuzz_target!(|data: &str| {
    for (at, _) in data.char_indices().take(16) {
        let (prefix, _) = data.split_at(at);
        assert!(starts_with(data, prefix));
        assert_eq!(remove_prefix(data, prefix).len(), data.len() - prefix.len());
    }

    // a prefix longer than the subject must be a pass-through
    let longer = format!("{data}x");
    assert!(!starts_with(data, &longer));
    assert_eq!(remove_prefix(data, &longer), data);

    let mut view = data;
    remove_prefix_view_in_place(&mut view, &longer);
    assert_eq!(view, data);

    let mut owned = data.to_owned();
    remove_prefix_in_place(&mut owned, &longer);
    assert_eq!(owned, data);
});
