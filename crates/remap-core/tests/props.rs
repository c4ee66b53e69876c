//! Property tests for structural preservation under rewriting.

use proptest::prelude::*;

use remap_core::{RewriteOptions, rewrite_text};
use remap_model::{MappingEntry, MappingIndex};

const BODY_PATTERN: &str = r"[0-9]{1,5}(-[0-9]{1,5}){0,3}(\$[0-9]{1,2}){0,2}([&|][0-9]{1,5}(-[0-9]{1,5}){0,2}(\$[0-9]{1,2}){0,2}){0,3}";

fn token_count(body: &str) -> usize {
    body.split(['&', '|'])
        .map(|segment| {
            segment
                .split('$')
                .next()
                .unwrap_or("")
                .split('-')
                .filter(|token| !token.is_empty())
                .count()
        })
        .sum()
}

proptest! {
    /// With an empty index every token misses, so the body comes back
    /// textually identical and the miss count equals the token count.
    #[test]
    fn unknown_ids_round_trip(body in BODY_PATTERN) {
        let index = MappingIndex::default();
        let options = RewriteOptions::default();
        let outcome = rewrite_text(&body, &options, &index);
        prop_assert_eq!(&outcome.text, &body);
        prop_assert_eq!(outcome.unmatched_count(), token_count(&body));
    }

    /// Separator and suffix structure survives rewriting even when some
    /// tokens resolve.
    #[test]
    fn structure_is_preserved(body in BODY_PATTERN) {
        let index = MappingIndex::build(vec![
            MappingEntry::new("101", "Sword"),
            MappingEntry::new("66771", "BigAxe"),
        ]);
        let options = RewriteOptions::default();
        let outcome = rewrite_text(&body, &options, &index);

        let separators_in: Vec<char> =
            body.chars().filter(|ch| matches!(ch, '&' | '|')).collect();
        let separators_out: Vec<char> =
            outcome.text.chars().filter(|ch| matches!(ch, '&' | '|')).collect();
        prop_assert_eq!(separators_in, separators_out);

        let dollars_in = body.chars().filter(|ch| *ch == '$').count();
        let dollars_out = outcome.text.chars().filter(|ch| *ch == '$').count();
        prop_assert_eq!(dollars_in, dollars_out);
    }
}
