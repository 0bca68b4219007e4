//! Property tests for prefix completion and vocabulary aggregation.

use super::common::{table_of, vocabulary_strategy, unicode_vocabulary_strategy, word_strategy};
use super::oracles::oracle_prefix;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use suggestor::ranking::{compare_completions, is_ranked};
use suggestor::{PrefixIndex, VocabularyBuilder};

proptest! {
    /// Property: the trie traversal returns exactly what a full scan returns.
    #[test]
    fn prop_prefix_matches_oracle(
        vocab in vocabulary_strategy(),
        prefix in prop::string::string_regex("[a-d]{0,3}").unwrap(),
        k in 0usize..12,
    ) {
        let table = table_of(&vocab);
        let expected = oracle_prefix(&table, &prefix, k);
        let index = PrefixIndex::build(Arc::new(table));
        prop_assert_eq!(index.lookup(&prefix, k), expected);
    }

    /// Property: multi-byte terms are walked by character.
    #[test]
    fn prop_prefix_unicode_matches_oracle(
        vocab in unicode_vocabulary_strategy(),
        k in 1usize..8,
    ) {
        let table = table_of(&vocab);
        let index = PrefixIndex::build(Arc::new(table.clone()));
        for entry in table.entries() {
            for (cut, _) in entry.text.char_indices() {
                let prefix = &entry.text[..cut];
                prop_assert_eq!(index.lookup(prefix, k), oracle_prefix(&table, prefix, k));
            }
        }
    }

    /// Property: results start with the prefix, are ranked, and never exceed k.
    #[test]
    fn prop_prefix_results_well_formed(
        vocab in vocabulary_strategy(),
        prefix in word_strategy(),
        k in 0usize..10,
    ) {
        let index = PrefixIndex::build(Arc::new(table_of(&vocab)));
        let hits = index.lookup(&prefix, k);
        prop_assert!(hits.len() <= k);
        prop_assert!(is_ranked(&hits, compare_completions));
        for hit in &hits {
            prop_assert!(hit.term.starts_with(&prefix));
        }
    }

    /// Property: weights of duplicate observations add up.
    #[test]
    fn prop_aggregation_sums_weights(vocab in vocabulary_strategy()) {
        let mut expected: HashMap<&str, u64> = HashMap::new();
        let mut builder = VocabularyBuilder::new();
        for (term, weight) in &vocab {
            *expected.entry(term.as_str()).or_insert(0) += weight;
            builder.add(term.clone(), *weight as i64).unwrap();
        }
        let table = builder.finalize();
        prop_assert_eq!(table.len(), expected.len());
        for (term, weight) in expected {
            prop_assert_eq!(table.find(term).map(|(_, e)| e.weight), Some(weight));
        }
    }

    /// Property: no child outweighs its parent.
    #[test]
    fn prop_subtree_max_monotone(vocab in vocabulary_strategy()) {
        let index = PrefixIndex::build(Arc::new(table_of(&vocab)));
        prop_assert!(index.trie().check_subtree_max());
    }

    /// Property: every term is found exactly, and its own prefix lookup
    /// contains it when k covers the whole vocabulary.
    #[test]
    fn prop_every_term_reachable(vocab in vocabulary_strategy()) {
        let table = table_of(&vocab);
        let n = table.len();
        let index = PrefixIndex::build(Arc::new(table.clone()));
        for entry in table.entries() {
            prop_assert!(index.contains(&entry.text));
            let hits = index.lookup(&entry.text, n);
            prop_assert!(hits.iter().any(|h| h.term == entry.text));
        }
    }
}
