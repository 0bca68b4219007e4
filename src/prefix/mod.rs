// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-prefix completion over a weight-annotated trie.
//!
//! ```text
//!   lookup("ca", 2)
//!
//!        (root) max=9
//!          │ c
//!        ( ) max=9 ◄── walk ends here
//!          │ a
//!        ( ) max=9
//!        r/    \t
//!   car(3)     cat(5)
//!   max=9
//!   d/  \e
//! card(9) care(1)
//!
//!   best-first by subtree max → card(9), cat(5)   [care never expanded]
//! ```
//!
//! A failed walk means no term has the prefix: that is an empty result, not
//! an error. `k = 0` short-circuits before touching the trie.

mod trie;

pub use trie::{NodeId, Trie, ROOT};

use crate::types::{Completion, TermTable};
use std::sync::Arc;

/// Immutable prefix index over one term table.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    table: Arc<TermTable>,
    trie: Trie,
}

impl PrefixIndex {
    pub fn build(table: Arc<TermTable>) -> Self {
        let trie = Trie::build(&table);
        log::debug!(
            "prefix index: {} terms, {} trie nodes",
            table.len(),
            trie.node_count()
        );
        Self { table, trie }
    }

    /// Up to `k` terms starting with `prefix`, weight descending then text
    /// ascending. An empty prefix ranks the whole vocabulary.
    pub fn lookup(&self, prefix: &str, k: usize) -> Vec<Completion> {
        if k == 0 {
            return Vec::new();
        }
        let Some(start) = self.trie.walk(ROOT, prefix) else {
            return Vec::new();
        };
        self.trie
            .top_k(&self.table, start, k)
            .into_iter()
            .filter_map(|id| self.table.get(id))
            .map(|e| Completion {
                term: e.text.clone(),
                weight: e.weight,
            })
            .collect()
    }

    /// Whether `term` is in the vocabulary exactly.
    pub fn contains(&self, term: &str) -> bool {
        self.trie
            .walk(ROOT, term)
            .and_then(|n| self.trie.terminal(n))
            .is_some()
    }

    pub fn table(&self) -> &Arc<TermTable> {
        &self.table
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
