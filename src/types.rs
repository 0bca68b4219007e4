// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: the vocabulary table and the result rows each lookup returns.
//!
//! Everything downstream of [`VocabularyBuilder`](crate::VocabularyBuilder)
//! speaks in terms of [`TermTable`], a sorted, deduplicated, immutable list of
//! weighted terms. Indices refer to entries by [`TermId`] (a position in that
//! table) rather than owning copies, so one `Arc<TermTable>` backs every index
//! built for a name.

use crate::utils::char_slice;
use serde::{Deserialize, Serialize};

/// Position of a term inside its [`TermTable`].
pub type TermId = u32;

/// A weighted vocabulary term.
///
/// Weights are popularity counts: non-negative, summed on duplicates, never
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermEntry {
    /// The term exactly as supplied (case preserved).
    pub text: String,
    /// Aggregated popularity weight.
    pub weight: u64,
    /// Optional opaque bytes carried alongside the term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<u8>>,
}

impl TermEntry {
    pub fn new(text: impl Into<String>, weight: u64) -> Self {
        Self {
            text: text.into(),
            weight,
            payload: None,
        }
    }
}

/// Finalized vocabulary: sorted by `text`, one entry per distinct text.
///
/// Only [`VocabularyBuilder::finalize`](crate::VocabularyBuilder::finalize)
/// produces one, which is what guarantees the sort and uniqueness invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermTable {
    entries: Vec<TermEntry>,
}

impl TermTable {
    /// Wrap entries the builder has already sorted and deduplicated.
    pub(crate) fn from_sorted(entries: Vec<TermEntry>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].text < w[1].text),
            "term table must be strictly sorted by text"
        );
        Self { entries }
    }

    /// Build a table directly from `(term, weight)` pairs.
    ///
    /// Shorthand for feeding a [`VocabularyBuilder`](crate::VocabularyBuilder);
    /// duplicate terms are summed. Unsigned weights cannot be rejected, so this
    /// never fails.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut builder = crate::VocabularyBuilder::new();
        for (term, weight) in pairs {
            builder.add_unsigned(term, weight);
        }
        builder.finalize()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `id`, if it exists.
    pub fn get(&self, id: TermId) -> Option<&TermEntry> {
        self.entries.get(id as usize)
    }

    /// Look up a term by exact text.
    pub fn find(&self, text: &str) -> Option<(TermId, &TermEntry)> {
        self.entries
            .binary_search_by(|e| e.text.as_str().cmp(text))
            .ok()
            .map(|i| (i as TermId, &self.entries[i]))
    }

    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &TermEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i as TermId, e))
    }

    /// Sum of all weights (saturating).
    pub fn total_weight(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.weight))
    }
}

/// One exact-prefix completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub term: String,
    pub weight: u64,
}

/// One approximate completion together with its edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyCompletion {
    pub term: String,
    pub weight: u64,
    pub distance: u32,
}

/// One infix match with the highlighted span (character offsets, end exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfixCompletion {
    pub term: String,
    pub weight: u64,
    pub span_start: usize,
    pub span_end: usize,
}

impl InfixCompletion {
    /// The part of `term` covered by the span.
    pub fn matched(&self) -> &str {
        char_slice(&self.term, self.span_start, self.span_end)
    }

    /// Render the term with the span wrapped in `open`/`close` markers.
    pub fn highlight(&self, open: &str, close: &str) -> String {
        let before = char_slice(&self.term, 0, self.span_start);
        let after = char_slice(&self.term, self.span_end, usize::MAX);
        format!("{}{}{}{}{}", before, open, self.matched(), close, after)
    }
}

/// One next-token prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub token: String,
    pub frequency: u64,
}
