//! Property tests for the suffix array builder and infix completion.

use super::common::{table_of, unicode_vocabulary_strategy, vocabulary_strategy};
use super::oracles::oracle_infix;
use proptest::prelude::*;
use std::sync::Arc;
use suggestor::infix::suffix_array;
use suggestor::{Granularity, InfixConfig, InfixIndex};

/// Simple O(n² log n) suffix array construction.
fn oracle_suffix_array(input: &[u8]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..input.len()).collect();
    positions.sort_by(|&i, &j| input[i..].cmp(&input[j..]));
    positions
}

proptest! {
    /// Property: SA-IS agrees with sorting every suffix.
    #[test]
    fn prop_sais_matches_oracle(input in prop::collection::vec(0u8..4, 0..200)) {
        prop_assert_eq!(suffix_array(&input), oracle_suffix_array(&input));
    }

    /// Property: SA-IS handles the full byte range, including NUL.
    #[test]
    fn prop_sais_full_alphabet(input in prop::collection::vec(any::<u8>(), 0..120)) {
        prop_assert_eq!(suffix_array(&input), oracle_suffix_array(&input));
    }

    /// Property: infix lookup equals `str::find` over every term.
    #[test]
    fn prop_infix_matches_oracle(
        vocab in vocabulary_strategy(),
        query in prop::string::string_regex("[a-d]{0,3}").unwrap(),
        k in 1usize..10,
    ) {
        let table = table_of(&vocab);
        let index = InfixIndex::build(Arc::new(table.clone()), InfixConfig::default());
        prop_assert_eq!(index.lookup(&query, k), oracle_infix(&table, &query, k));
    }

    /// Property: spans are character offsets and cover the query exactly.
    #[test]
    fn prop_infix_spans_cover_query(
        vocab in unicode_vocabulary_strategy(),
        query in prop::string::string_regex("[abcéō]{1,2}").unwrap(),
    ) {
        let table = table_of(&vocab);
        let index = InfixIndex::build(Arc::new(table.clone()), InfixConfig::default());
        let hits = index.lookup(&query, table.len());
        prop_assert_eq!(&hits, &oracle_infix(&table, &query, table.len()));
        for hit in &hits {
            prop_assert_eq!(hit.matched(), query.as_str());
            prop_assert!(hit.span_end <= hit.term.chars().count());
        }
    }

    /// Property: token granularity only reports matches at word starts, and
    /// every such match is found.
    #[test]
    fn prop_token_granularity_word_starts(
        words in prop::collection::vec(
            prop::string::string_regex("[a-c]{1,3}( [a-c]{1,3}){0,2}").unwrap(),
            1..20,
        ),
        query in prop::string::string_regex("[a-c]{1,2}").unwrap(),
    ) {
        let vocab: Vec<(String, u64)> = words.into_iter().map(|w| (w, 1)).collect();
        let table = table_of(&vocab);
        let config = InfixConfig { granularity: Granularity::Token };
        let index = InfixIndex::build(Arc::new(table.clone()), config);
        let hits = index.lookup(&query, table.len());

        let expected: usize = table
            .entries()
            .iter()
            .filter(|e| e.text.split(' ').any(|w| w.starts_with(&query)))
            .count();
        prop_assert_eq!(hits.len(), expected);
        for hit in &hits {
            let before = hit.term.chars().nth(hit.span_start.wrapping_sub(1));
            prop_assert!(hit.span_start == 0 || before == Some(' '));
        }
    }
}
