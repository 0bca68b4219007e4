// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::TermTable;

/// The three-term amenities vocabulary used throughout the docs.
pub fn amenities() -> Vec<(&'static str, i64)> {
    vec![("wifi", 10), ("wifi router", 5), ("parking", 8)]
}

/// [`amenities`] as a finalized table.
pub fn amenities_table() -> TermTable {
    TermTable::from_pairs(amenities().into_iter().map(|(t, w)| (t, w as u64)))
}

/// A larger hotel-amenities vocabulary with mixed case, phrases and accents.
pub fn hotel_vocabulary() -> Vec<(&'static str, i64)> {
    vec![
        ("wifi", 120),
        ("free wifi", 95),
        ("wifi router", 14),
        ("parking", 80),
        ("free parking", 60),
        ("valet parking", 12),
        ("pool", 70),
        ("indoor pool", 25),
        ("outdoor pool", 30),
        ("pet friendly", 22),
        ("airport shuttle", 40),
        ("air conditioning", 66),
        ("breakfast included", 55),
        ("café", 18),
        ("Café Central", 7),
        ("spa", 33),
        ("sauna", 9),
        ("fitness center", 44),
        ("24 hour front desk", 38),
        ("room service", 27),
    ]
}

/// Deterministic pseudo-random vocabulary of `n` lowercase terms.
///
/// Weights follow a rough power law so top-k pruning has something to prune.
pub fn synthetic_vocabulary(n: usize, seed: u64) -> Vec<(String, i64)> {
    const SYLLABLES: &[&str] = &[
        "ka", "ro", "mi", "te", "su", "lan", "por", "vi", "ne", "da", "go", "chi", "bel", "fu",
    ];
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    (0..n)
        .map(|i| {
            let parts = 1 + next() % 4;
            let term: String = (0..parts)
                .map(|_| SYLLABLES[next() % SYLLABLES.len()])
                .collect();
            let weight = (1000 / (1 + (next() % (i + 1)))) as i64;
            (term, weight)
        })
        .collect()
}
