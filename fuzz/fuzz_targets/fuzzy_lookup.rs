// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for fuzzy completion.
//!
//! Builds a small vocabulary from the input and checks every fuzzy hit
//! against the pairwise edit distance. The automaton walks the trie with
//! pruning; if the pruning is wrong, hits go missing or carry the wrong
//! distance.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use suggestor::{bounded_distance, FuzzyConfig, FuzzyIndex, PrefixIndex, TermTable};

#[derive(Debug, Arbitrary)]
struct LookupInput {
    terms: Vec<(String, u16)>,
    query: String,
    max_edits: u8,
    k: u8,
    transpositions: bool,
}

fuzz_target!(|input: LookupInput| {
    // Cap sizes to avoid timeouts
    let terms: Vec<(String, u64)> = input
        .terms
        .into_iter()
        .take(64)
        .map(|(t, w)| (t.chars().take(16).collect(), u64::from(w)))
        .collect();
    let query: String = input.query.chars().take(16).collect();
    let max = u32::from(input.max_edits % 4);
    let k = usize::from(input.k % 32);

    let table = Arc::new(TermTable::from_pairs(terms));
    let config = FuzzyConfig {
        transpositions: input.transpositions,
        ..FuzzyConfig::default()
    };
    let index = FuzzyIndex::new(Arc::new(PrefixIndex::build(Arc::clone(&table))), config);
    let hits = index.lookup(&query, k, max).expect("radius is in range");

    // INVARIANT 1: never more than k
    assert!(hits.len() <= k);

    // INVARIANT 2: every reported distance is the true one
    for hit in &hits {
        assert_eq!(
            bounded_distance(&query, &hit.term, max, input.transpositions),
            Some(hit.distance),
            "wrong distance for query='{}', term='{}'",
            query,
            hit.term
        );
    }

    // INVARIANT 3: with room to spare, nothing within range is missing
    if hits.len() < k {
        let expected = table
            .entries()
            .iter()
            .filter(|e| bounded_distance(&query, &e.text, max, input.transpositions).is_some())
            .count();
        assert_eq!(hits.len(), expected, "missing fuzzy hits for query='{}'", query);
    }
});
