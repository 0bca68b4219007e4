// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//!
//! These are the one-pair versions. Bulk matching against a vocabulary goes
//! through [`LevenshteinAutomaton`](super::LevenshteinAutomaton) instead;
//! the two must agree, which is what the property suites check.

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max as u32, false).is_some()
}

/// Edit distance between `a` and `b`, or `None` once it must exceed `max`.
///
/// With `transpositions`, swapping two adjacent characters costs one edit
/// (optimal string alignment: a transposed pair is not edited again).
pub fn bounded_distance(a: &str, b: &str, max: u32, transpositions: bool) -> Option<u32> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max = max as usize;

    // Length difference is a lower bound on edit distance
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut before: Vec<usize> = Vec::new();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        let mut min_row = cur[0];
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut d = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
            if transpositions
                && i > 1
                && j > 1
                && a[i - 1] == b[j - 2]
                && a[i - 2] == b[j - 1]
            {
                d = d.min(before[j - 2] + 1);
            }
            cur[j] = d;
            min_row = min_row.min(d);
        }

        // Row minimum never decreases for plain Levenshtein; with
        // transpositions the previous row may still undercut it by one.
        let floor = if transpositions {
            min_row.min(prev.iter().min().map_or(usize::MAX, |m| m + 1))
        } else {
            min_row
        };
        if floor > max {
            return None;
        }

        before = std::mem::replace(&mut prev, cur.clone());
    }

    let d = prev[b.len()];
    (d <= max).then_some(d as u32)
}

/// Unbounded edit distance.
pub fn edit_distance(a: &str, b: &str, transpositions: bool) -> u32 {
    let bound = a.chars().count().max(b.chars().count()) as u32;
    bounded_distance(a, b, bound, transpositions).unwrap_or(bound)
}
