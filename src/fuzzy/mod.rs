// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two implementations here: a simple bounded Levenshtein for one-off
//! comparisons, and a lazily built automaton for bulk matching against the
//! whole vocabulary through the prefix trie.

mod automaton;
mod index;
mod levenshtein;

pub use automaton::{LevenshteinAutomaton, StateId};
pub use index::{FuzzyConfig, FuzzyIndex, MatchMode, MAX_EDIT_DISTANCE};
pub use levenshtein::*;
