//! Property tests for the back-off n-gram model.

use super::common::lines_strategy;
use super::oracles::{oracle_next_bigram, oracle_unigrams};
use proptest::prelude::*;
use suggestor::ranking::{compare_predictions, is_ranked};
use suggestor::NextTermModel;

proptest! {
    /// Property: with no context the model ranks unigram counts.
    #[test]
    fn prop_empty_context_is_unigrams(lines in lines_strategy(), k in 1usize..8) {
        let model = NextTermModel::build(3, lines.clone()).unwrap();
        prop_assert_eq!(model.predict(&[], k), oracle_unigrams(&lines, k));
    }

    /// Property: a bigram model answers from the previous token, or backs
    /// off to unigrams when that token was never followed by anything.
    #[test]
    fn prop_bigram_back_off(
        lines in lines_strategy(),
        previous in prop::string::string_regex("[a-e]{1,2}").unwrap(),
        k in 1usize..8,
    ) {
        let model = NextTermModel::build(2, lines.clone()).unwrap();
        prop_assert_eq!(
            model.predict(&[previous.clone()], k),
            oracle_next_bigram(&lines, &previous, k)
        );
    }

    /// Property: only the last N-1 tokens of the context matter.
    #[test]
    fn prop_context_truncated_to_order(
        lines in lines_strategy(),
        context in prop::collection::vec(prop::string::string_regex("[a-e]{1,2}").unwrap(), 2..6),
    ) {
        let model = NextTermModel::build(2, lines).unwrap();
        let last = &context[context.len() - 1..];
        prop_assert_eq!(model.predict(&context, 5), model.predict(last, 5));
    }

    /// Property: predictions are ranked, bounded by k, and partial
    /// completions honor the typed prefix.
    #[test]
    fn prop_predictions_well_formed(
        lines in lines_strategy(),
        partial in prop::string::string_regex("[a-e]").unwrap(),
        k in 0usize..6,
    ) {
        let model = NextTermModel::build(3, lines).unwrap();
        let plain = model.predict(&[], k);
        prop_assert!(plain.len() <= k);
        prop_assert!(is_ranked(&plain, compare_predictions));

        let partial_hits = model.predict_partial(&[], &partial, k);
        prop_assert!(partial_hits.len() <= k);
        prop_assert!(is_ranked(&partial_hits, compare_predictions));
        for p in &partial_hits {
            prop_assert!(p.token.starts_with(&partial));
        }
    }
}
