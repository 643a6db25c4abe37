//! Fuzz target for case folding, equality, and hashing.
//!
//! Checks that folding arbitrary UTF-8 never panics, never changes length,
//! and keeps the hash/equality contract intact.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strfold::{eq_ignore_case, lowercase_hash, to_lower, to_lower_in_place};

fuzz_target!(|data: &str| {
    let folded = to_lower(data);
    assert_eq!(folded.len(), data.len());
    assert_eq!(to_lower(&folded), folded);

    let mut buf = data.to_owned();
    to_lower_in_place(&mut buf);
    assert_eq!(buf, folded);

    // fold-equal inputs must hash equal
    assert!(eq_ignore_case(data, &folded));
    assert_eq!(lowercase_hash(data), lowercase_hash(&folded));

    // compare against a shifted variant to exercise the unequal paths
    if let Some(rest) = data.get(1..) {
        let _ = eq_ignore_case(data, rest);
        let _ = lowercase_hash(rest);
    }
});
