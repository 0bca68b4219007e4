// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for infix completion over arbitrary UTF-8.
//!
//! Terms may contain NUL and any multi-byte character. Every span must land
//! on the earliest occurrence and slice back to the query.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use suggestor::{InfixConfig, InfixIndex, TermTable};

#[derive(Debug, Arbitrary)]
struct InfixInput {
    terms: Vec<String>,
    query: String,
}

fuzz_target!(|input: InfixInput| {
    let terms: Vec<(String, u64)> = input
        .terms
        .into_iter()
        .take(64)
        .map(|t| (t.chars().take(24).collect(), 1))
        .collect();
    let query: String = input.query.chars().take(6).collect();

    let table = Arc::new(TermTable::from_pairs(terms));
    let index = InfixIndex::build(Arc::clone(&table), InfixConfig::default());
    let hits = index.lookup(&query, table.len());

    let expected = table
        .entries()
        .iter()
        .filter(|e| e.text.contains(query.as_str()))
        .count();
    assert_eq!(hits.len(), expected, "query='{:?}'", query);

    for hit in &hits {
        assert_eq!(hit.matched(), query);
        let byte = hit.term.find(query.as_str()).expect("term contains query");
        assert_eq!(hit.span_start, hit.term[..byte].chars().count());
    }
});
