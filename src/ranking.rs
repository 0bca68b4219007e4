// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how suggestions get sorted.
//!
//! There is no relevance score. Every order is a chain of three plain facts
//! about a result, compared in a fixed priority:
//!
//! | Lookup    | 1st              | 2nd              | 3rd          |
//! |-----------|------------------|------------------|--------------|
//! | prefix    | weight ↓         | text ↑           |              |
//! | fuzzy     | distance ↑       | weight ↓         | text ↑       |
//! | infix     | weight ↓         | span start ↑     | text ↑       |
//! | next-term | frequency ↓      | token ↑          |              |
//!
//! Text is always the last tiebreaker, and texts are unique within one index,
//! so every order is total and every result list is deterministic.
//!
//! The traversals in `prefix` and `fuzzy` produce these orders directly.
//! The comparators here are used where results are sorted after the fact
//! (infix, next-term) and by the tests that check the traversals.

use crate::types::{Completion, FuzzyCompletion, InfixCompletion, Prediction};
use std::cmp::Ordering;

/// `Less` means `a` ranks first.
pub fn compare_completions(a: &Completion, b: &Completion) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then_with(|| a.term.cmp(&b.term))
}

/// Closer beats heavier: distance 0 at weight 1 ranks above distance 1 at
/// weight 1000.
pub fn compare_fuzzy(a: &FuzzyCompletion, b: &FuzzyCompletion) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.weight.cmp(&a.weight))
        .then_with(|| a.term.cmp(&b.term))
}

pub fn compare_infix(a: &InfixCompletion, b: &InfixCompletion) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then_with(|| a.span_start.cmp(&b.span_start))
        .then_with(|| a.term.cmp(&b.term))
}

pub fn compare_predictions(a: &Prediction, b: &Prediction) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.token.cmp(&b.token))
}

/// Keep the best `k` of `items` under `cmp`, sorted.
///
/// Partitions around the `k`-th element first so only the survivors are
/// fully sorted.
pub fn top_k_by<T, F>(mut items: Vec<T>, k: usize, cmp: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    if items.len() > k {
        items.select_nth_unstable_by(k - 1, &cmp);
        items.truncate(k);
    }
    items.sort_unstable_by(&cmp);
    items
}

/// Whether `items` is already in `cmp` order.
pub fn is_ranked<T, F>(items: &[T], cmp: F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    items.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}
