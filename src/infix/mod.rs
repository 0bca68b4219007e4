// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Contains" completion over a vocabulary suffix array.
//!
//! Every registered suffix of every term goes into one sorted array. A
//! substring query is then a prefix query over suffixes: binary search for
//! the first suffix ≥ query, scan while suffixes still start with it.
//!
//! ```text
//!   terms: wifi, wifi router, parking
//!
//!   sorted suffixes (excerpt)        query "fi"
//!   ...
//!   fi            (wifi @2)      ◄── lower bound
//!   fi router     (wifi router @2)
//!   i             (wifi @3)      ◄── stop: no longer starts with "fi"
//!   ...
//! ```
//!
//! The array is built once with SA-IS over the concatenated terms (each
//! followed by a NUL separator) and then filtered to the positions the
//! configured [`Granularity`] registers. Positions are stored as byte offsets
//! and only converted to character spans for the few results returned.

mod sais;

pub use sais::suffix_array;

use crate::ranking::{compare_infix, top_k_by};
use crate::types::{InfixCompletion, TermId, TermTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Which positions inside a term can start a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Every character position: `"fi"` matches inside `"wifi"`.
    #[default]
    Suffix,
    /// Only word starts: `"rou"` matches `"wifi router"`, `"fi"` does not
    /// match `"wifi"`.
    Token,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfixConfig {
    pub granularity: Granularity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SuffixEntry {
    term: TermId,
    /// Byte offset into the term.
    offset: u32,
}

/// Immutable infix index over one term table.
#[derive(Debug, Clone)]
pub struct InfixIndex {
    table: Arc<TermTable>,
    suffixes: Vec<SuffixEntry>,
    config: InfixConfig,
}

impl InfixIndex {
    pub fn build(table: Arc<TermTable>, config: InfixConfig) -> Self {
        let suffixes = if table.entries().iter().any(|e| e.text.contains('\0')) {
            // NUL is the separator, so SA-IS order would be off for these.
            sorted_by_comparison(&table, config.granularity)
        } else {
            sorted_by_sais(&table, config.granularity)
        };
        log::debug!(
            "infix index: {} terms, {} registered positions ({:?})",
            table.len(),
            suffixes.len(),
            config.granularity
        );
        Self {
            table,
            suffixes,
            config,
        }
    }

    pub fn config(&self) -> &InfixConfig {
        &self.config
    }

    /// Number of registered suffix positions.
    pub fn positions(&self) -> usize {
        self.suffixes.len()
    }

    fn suffix(&self, entry: &SuffixEntry) -> &str {
        self.table
            .get(entry.term)
            .and_then(|e| e.text.get(entry.offset as usize..))
            .unwrap_or("")
    }

    /// Up to `k` terms containing `query`, each with the span of its earliest
    /// occurrence. Ranked by weight descending, span start ascending, text
    /// ascending.
    pub fn lookup(&self, query: &str, k: usize) -> Vec<InfixCompletion> {
        if k == 0 || self.suffixes.is_empty() {
            return Vec::new();
        }

        let lo = self
            .suffixes
            .partition_point(|e| self.suffix(e) < query);

        // Earliest matching offset per term.
        let mut earliest: HashMap<TermId, u32> = HashMap::new();
        for entry in &self.suffixes[lo..] {
            if !self.suffix(entry).starts_with(query) {
                break;
            }
            earliest
                .entry(entry.term)
                .and_modify(|o| *o = (*o).min(entry.offset))
                .or_insert(entry.offset);
        }

        let query_chars = query.chars().count();
        let hits: Vec<InfixCompletion> = earliest
            .into_iter()
            .filter_map(|(id, offset)| {
                let entry = self.table.get(id)?;
                let span_start = entry.text.get(..offset as usize)?.chars().count();
                Some(InfixCompletion {
                    term: entry.text.clone(),
                    weight: entry.weight,
                    span_start,
                    span_end: span_start + query_chars,
                })
            })
            .collect();

        log::debug!("infix '{}': {} matching terms", query, hits.len());
        top_k_by(hits, k, compare_infix)
    }
}

/// Whether a match may start at byte `offset` of `text`.
fn registered(text: &str, offset: usize, granularity: Granularity) -> bool {
    if offset >= text.len() || !text.is_char_boundary(offset) {
        return false;
    }
    match granularity {
        Granularity::Suffix => true,
        Granularity::Token => {
            offset == 0
                || (!text[..offset]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_alphanumeric)
                    && text[offset..].chars().next().is_some_and(char::is_alphanumeric))
        }
    }
}

fn sorted_by_sais(table: &TermTable, granularity: Granularity) -> Vec<SuffixEntry> {
    let mut concat: Vec<u8> = Vec::new();
    let mut starts: Vec<usize> = Vec::with_capacity(table.len());
    for entry in table.entries() {
        starts.push(concat.len());
        concat.extend_from_slice(entry.text.as_bytes());
        concat.push(0);
    }

    suffix_array(&concat)
        .into_iter()
        .filter_map(|pos| {
            // Last term starting at or before `pos`.
            let idx = starts.partition_point(|&s| s <= pos).checked_sub(1)?;
            let offset = pos - starts[idx];
            let text = &table.get(idx as TermId)?.text;
            registered(text, offset, granularity).then_some(SuffixEntry {
                term: idx as TermId,
                offset: offset as u32,
            })
        })
        .collect()
}

fn sorted_by_comparison(table: &TermTable, granularity: Granularity) -> Vec<SuffixEntry> {
    let mut entries: Vec<SuffixEntry> = table
        .iter()
        .flat_map(|(id, entry)| {
            (0..entry.text.len())
                .filter(|&o| registered(&entry.text, o, granularity))
                .map(move |o| SuffixEntry {
                    term: id,
                    offset: o as u32,
                })
        })
        .collect();
    let suffix = |e: &SuffixEntry| {
        table
            .get(e.term)
            .and_then(|t| t.text.get(e.offset as usize..))
            .unwrap_or("")
    };
    entries.sort_by(|a, b| suffix(a).cmp(suffix(b)).then(a.term.cmp(&b.term)));
    entries
}
