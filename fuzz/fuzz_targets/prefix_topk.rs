// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for weighted prefix completion.
//!
//! The best-first traversal must return exactly the k heaviest matching
//! terms. A full scan is the reference.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use suggestor::ranking::compare_completions;
use suggestor::{Completion, PrefixIndex, TermTable};

#[derive(Debug, Arbitrary)]
struct PrefixInput {
    terms: Vec<(String, u32)>,
    prefix: String,
    k: u8,
}

fuzz_target!(|input: PrefixInput| {
    let terms: Vec<(String, u64)> = input
        .terms
        .into_iter()
        .take(128)
        .map(|(t, w)| (t.chars().take(24).collect(), u64::from(w)))
        .collect();
    let prefix: String = input.prefix.chars().take(8).collect();
    let k = usize::from(input.k);

    let table = Arc::new(TermTable::from_pairs(terms));
    let index = PrefixIndex::build(Arc::clone(&table));
    assert!(index.trie().check_subtree_max());

    let mut expected: Vec<Completion> = table
        .entries()
        .iter()
        .filter(|e| e.text.starts_with(&prefix))
        .map(|e| Completion {
            term: e.text.clone(),
            weight: e.weight,
        })
        .collect();
    expected.sort_by(compare_completions);
    expected.truncate(k);

    assert_eq!(index.lookup(&prefix, k), expected, "prefix='{}'", prefix);
});
