//! Property-based tests for whitespace trimming and prefix operations.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use strfold::{
    is_whitespace, remove_prefix, remove_prefix_in_place, remove_prefix_view_in_place,
    starts_with, starts_with_one_of, trim, trim_end, trim_in_place, trim_start,
    trim_view_in_place,
};

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,100}"
}

/// Generate runs drawn from the whitespace class.
fn whitespace_run() -> impl Strategy<Value = String> {
    "[ \t\x0B\x0C\n\r]{0,20}"
}

/// Generate a core with no leading/trailing class character, padded on both
/// sides with class characters.
fn padded_string() -> impl Strategy<Value = (String, String, String)> {
    (whitespace_run(), "[a-zA-Z0-9]\\PC{0,40}[a-zA-Z0-9]|[a-zA-Z0-9]?", whitespace_run())
}

// ============================================================================
// Trim Properties
// ============================================================================

proptest! {
    /// Trimming is idempotent.
    #[test]
    fn trim_is_idempotent(s in utf8_string()) {
        prop_assert_eq!(trim(trim(&s)), trim(&s));
    }

    /// The trimmed result has no leading or trailing class character.
    #[test]
    fn trim_leaves_no_edge_whitespace(s in utf8_string()) {
        let t = trim(&s);
        if let Some(first) = t.chars().next() {
            prop_assert!(!is_whitespace(first));
        }
        if let Some(last) = t.chars().next_back() {
            prop_assert!(!is_whitespace(last));
        }
    }

    /// The trimmed result is a contiguous substring of the input.
    #[test]
    fn trim_yields_substring(s in utf8_string()) {
        prop_assert!(s.contains(trim(&s)));
    }

    /// Two-sided trim composes from the one-sided forms.
    #[test]
    fn trim_composes_from_one_sided(s in utf8_string()) {
        prop_assert_eq!(trim(&s), trim_end(trim_start(&s)));
        prop_assert_eq!(trim(&s), trim_start(trim_end(&s)));
    }

    /// Padding a trimmed core with class characters trims back to the core.
    #[test]
    fn trim_strips_exactly_the_padding((lead, core, tail) in padded_string()) {
        let core = trim(&core).to_owned();
        let padded = format!("{lead}{core}{tail}");
        prop_assert_eq!(trim(&padded), core);
    }

    /// All three forms agree.
    #[test]
    fn trim_forms_agree(s in utf8_string()) {
        let borrowed = trim(&s).to_owned();

        let mut view = s.as_str();
        trim_view_in_place(&mut view);
        prop_assert_eq!(view, borrowed.as_str());

        let mut owned = s.clone();
        trim_in_place(&mut owned);
        prop_assert_eq!(owned, borrowed);
    }
}

// ============================================================================
// Prefix Properties
// ============================================================================

proptest! {
    /// Removing a present prefix shortens by exactly the prefix length;
    /// removing an absent one is the identity.
    #[test]
    fn remove_prefix_length_law(s in utf8_string(), p in utf8_string()) {
        let rest = remove_prefix(&s, &p);
        if starts_with(&s, &p) {
            prop_assert_eq!(rest.len(), s.len() - p.len());
        } else {
            prop_assert_eq!(rest, s.as_str());
        }
    }

    /// Every prefix cut from the subject itself is detected and removable.
    #[test]
    fn own_prefixes_are_removable(s in utf8_string(), cut in 0usize..=100) {
        let boundary = s.char_indices().map(|(i, _)| i).chain([s.len()])
            .nth(cut.min(s.chars().count()));
        if let Some(at) = boundary {
            let (head, tail) = s.split_at(at);
            prop_assert!(starts_with(&s, head));
            prop_assert_eq!(remove_prefix(&s, head), tail);
        }
    }

    /// All three removal forms agree.
    #[test]
    fn remove_prefix_forms_agree(s in utf8_string(), p in utf8_string()) {
        let borrowed = remove_prefix(&s, &p).to_owned();

        let mut view = s.as_str();
        remove_prefix_view_in_place(&mut view, &p);
        prop_assert_eq!(view, borrowed.as_str());

        let mut owned = s.clone();
        remove_prefix_in_place(&mut owned, &p);
        prop_assert_eq!(owned, borrowed);
    }

    /// The one-of test is purely existential over its candidates.
    #[test]
    fn one_of_is_existential(s in utf8_string(), ps in prop::collection::vec(utf8_string(), 0..8)) {
        let expected = ps.iter().any(|p| starts_with(&s, p));
        prop_assert_eq!(starts_with_one_of(&s, &ps), expected);

        // order does not affect the result
        let reversed: Vec<_> = ps.iter().rev().collect();
        prop_assert_eq!(starts_with_one_of(&s, reversed), expected);
    }
}
