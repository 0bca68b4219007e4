// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary aggregation: many `(term, weight)` observations in, one sorted
//! [`TermTable`] out.
//!
//! The builder is the only gate into the indices, so it is where bad input
//! stops. Negative weights are refused per observation; everything else
//! accumulates:
//!
//! | Observation          | Effect                                   |
//! |----------------------|------------------------------------------|
//! | new term             | inserted with its weight                 |
//! | repeated term        | weights summed (saturating), never reset |
//! | same text, new case  | separate term (`Wifi` ≠ `wifi`)          |
//! | negative weight      | `InvalidWeight`, builder unchanged       |
//! | empty text           | `InvalidParameter`, builder unchanged    |

use crate::error::{Result, SuggestError};
use crate::types::{TermEntry, TermTable};
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Accumulated {
    weight: u64,
    payload: Option<Vec<u8>>,
}

/// Accumulates weighted observations into a [`TermTable`].
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    terms: HashMap<String, Accumulated>,
    observations: usize,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `term`.
    pub fn add(&mut self, term: impl Into<String>, weight: i64) -> Result<()> {
        self.add_inner(term.into(), weight, None)
    }

    /// Record an observation carrying an opaque payload.
    ///
    /// When a term is seen several times the first non-empty payload sticks.
    pub fn add_with_payload(
        &mut self,
        term: impl Into<String>,
        weight: i64,
        payload: Vec<u8>,
    ) -> Result<()> {
        self.add_inner(term.into(), weight, Some(payload))
    }

    /// Record an observation whose weight is already known to be valid.
    ///
    /// Empty terms are ignored.
    pub fn add_unsigned(&mut self, term: impl Into<String>, weight: u64) {
        let term = term.into();
        if term.is_empty() {
            return;
        }
        self.accumulate(term, weight, None);
    }

    /// Feed a whole vocabulary source, skipping bad observations.
    ///
    /// Returns how many observations were rejected.
    pub fn extend<I, S>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut rejected = 0;
        for (term, weight) in source {
            if let Err(e) = self.add(term, weight) {
                log::warn!("skipping vocabulary entry: {}", e);
                rejected += 1;
            }
        }
        rejected
    }

    /// Distinct terms so far.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Accepted observations so far (duplicates included).
    pub fn observations(&self) -> usize {
        self.observations
    }

    fn add_inner(&mut self, term: String, weight: i64, payload: Option<Vec<u8>>) -> Result<()> {
        if term.is_empty() {
            return Err(SuggestError::InvalidParameter {
                name: "term",
                reason: "terms must not be empty".to_string(),
            });
        }
        let weight = u64::try_from(weight)
            .map_err(|_| SuggestError::InvalidWeight { term: term.clone(), weight })?;
        self.accumulate(term, weight, payload);
        Ok(())
    }

    fn accumulate(&mut self, term: String, weight: u64, payload: Option<Vec<u8>>) {
        let slot = self.terms.entry(term).or_default();
        slot.weight = slot.weight.saturating_add(weight);
        if slot.payload.as_ref().map_or(true, |p| p.is_empty()) {
            if let Some(p) = payload.filter(|p| !p.is_empty()) {
                slot.payload = Some(p);
            }
        }
        self.observations += 1;
    }

    /// Freeze into a table sorted by term text.
    pub fn finalize(self) -> TermTable {
        let mut entries: Vec<TermEntry> = self
            .terms
            .into_iter()
            .map(|(text, acc)| TermEntry {
                text,
                weight: acc.weight,
                payload: acc.payload,
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.text.cmp(&b.text));
        log::debug!(
            "vocabulary finalized: {} terms from {} observations",
            entries.len(),
            self.observations
        );
        TermTable::from_sorted(entries)
    }
}
