// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate completion: the trie and a Levenshtein automaton walked in
//! lockstep.
//!
//! The product of (trie node, automaton state) is never built. We pop the
//! most promising pair off a heap, step the automaton by each outgoing edge
//! label, and push the children that are still alive. The heap key is a
//! bound on anything reachable below the pair:
//!
//! | Key component        | Bound on terms below                   |
//! |----------------------|----------------------------------------|
//! | automaton floor ↑    | edit distance can only be ≥ this       |
//! | subtree max ↓        | weight can only be ≤ this              |
//! | first term id ↑      | text can only sort at or after this    |
//!
//! That is exactly the result order (distance ↑, weight ↓, text ↑) with each
//! component bounded in the safe direction, so terms leave the heap already
//! ranked and the walk stops at the `k`-th.

use super::automaton::{LevenshteinAutomaton, StateId};
use crate::error::{Result, SuggestError};
use crate::prefix::{NodeId, PrefixIndex, ROOT};
use crate::types::{FuzzyCompletion, TermId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

/// Largest edit distance a lookup accepts.
pub const MAX_EDIT_DISTANCE: u32 = 4;

/// How a term is compared against the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The whole term must be within range.
    #[default]
    WholeTerm,
    /// Some prefix of the term must be within range (typo-tolerant
    /// autocomplete). The reported distance is the best over all prefixes.
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Radius used when a caller does not name one.
    pub max_edits: u32,
    /// Count an adjacent swap as one edit (optimal string alignment).
    pub transpositions: bool,
    /// Leading query characters that must match exactly.
    pub non_fuzzy_prefix: usize,
    /// Queries shorter than this (in characters) get no edits at all.
    pub min_fuzzy_length: usize,
    pub mode: MatchMode,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            max_edits: 2,
            transpositions: true,
            non_fuzzy_prefix: 0,
            min_fuzzy_length: 0,
            mode: MatchMode::WholeTerm,
        }
    }
}

/// Read-only fuzzy view over a shared [`PrefixIndex`].
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    prefix: Arc<PrefixIndex>,
    config: FuzzyConfig,
}

impl FuzzyIndex {
    pub fn new(prefix: Arc<PrefixIndex>, config: FuzzyConfig) -> Self {
        Self { prefix, config }
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Lookup with the configured default radius.
    pub fn lookup_default(&self, query: &str, k: usize) -> Result<Vec<FuzzyCompletion>> {
        self.lookup(query, k, self.config.max_edits)
    }

    /// Up to `k` terms within `max_edits` of `query`, ranked by distance
    /// ascending, weight descending, text ascending.
    pub fn lookup(&self, query: &str, k: usize, max_edits: u32) -> Result<Vec<FuzzyCompletion>> {
        if max_edits > MAX_EDIT_DISTANCE {
            return Err(SuggestError::InvalidParameter {
                name: "max_edits",
                reason: format!(
                    "{} exceeds the supported maximum of {}",
                    max_edits, MAX_EDIT_DISTANCE
                ),
            });
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let query_len = crate::utils::char_len(query);
        let max_edits = if query_len < self.config.min_fuzzy_length {
            0
        } else {
            max_edits
        };

        // The exact part is a plain trie walk; only the rest is fuzzy.
        let exact = self.config.non_fuzzy_prefix.min(query_len);
        let split = crate::utils::byte_offset(query, exact);
        let (head, tail) = query.split_at(split);
        let Some(start) = self.prefix.trie().walk(ROOT, head) else {
            return Ok(Vec::new());
        };

        let mut dfa = LevenshteinAutomaton::new(tail, max_edits, self.config.transpositions);
        let hits = self.search(&mut dfa, start, k);
        log::debug!(
            "fuzzy '{}' (≤{} edits): {} hits, {} automaton states",
            query,
            max_edits,
            hits.len(),
            dfa.state_count()
        );

        let table = self.prefix.table();
        Ok(hits
            .into_iter()
            .filter_map(|(id, distance)| {
                table.get(id).map(|e| FuzzyCompletion {
                    term: e.text.clone(),
                    weight: e.weight,
                    distance,
                })
            })
            .collect())
    }

    fn search(
        &self,
        dfa: &mut LevenshteinAutomaton,
        start: NodeId,
        k: usize,
    ) -> Vec<(TermId, u32)> {
        let trie = self.prefix.trie();
        let table = self.prefix.table();
        let max = dfa.max_edits();
        let prefix_mode = self.config.mode == MatchMode::Prefix;

        let mut out = Vec::with_capacity(k.min(64));
        let mut heap = BinaryHeap::new();
        let initial = dfa.start();
        let best = if prefix_mode {
            dfa.distance(initial).unwrap_or(u32::MAX)
        } else {
            u32::MAX
        };
        heap.push(Frontier::node(
            dfa.lower_bound(initial).min(best),
            trie.subtree_max(start),
            trie.first(start),
            start,
            Some(initial),
            best,
        ));

        while let Some(entry) = heap.pop() {
            let (node, state, best) = match entry.item {
                Item::Term(id) => {
                    out.push((id, entry.distance));
                    if out.len() == k {
                        break;
                    }
                    continue;
                }
                Item::Node { node, state, best } => (node, state, best),
            };

            if let Some(id) = trie.terminal(node) {
                let here = state.and_then(|s| dfa.distance(s));
                let distance = if prefix_mode {
                    Some(best).filter(|&b| b <= max)
                } else {
                    here
                };
                if let Some(distance) = distance {
                    let weight = table.get(id).map_or(0, |e| e.weight);
                    heap.push(Frontier::term(distance, weight, id));
                }
            }

            for &(label, child) in trie.edges(node) {
                let next = state.and_then(|s| dfa.step(s, label));
                let child_best = match next {
                    Some(s) if prefix_mode => best.min(dfa.distance(s).unwrap_or(u32::MAX)),
                    _ => best,
                };
                let bound = match next {
                    Some(s) => dfa.lower_bound(s).min(child_best),
                    // Dead automaton: only an already matched prefix keeps
                    // this branch alive.
                    None if prefix_mode && child_best <= max => child_best,
                    None => continue,
                };
                heap.push(Frontier::node(
                    bound,
                    trie.subtree_max(child),
                    trie.first(child),
                    child,
                    next,
                    child_best,
                ));
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Term(TermId),
    Node {
        node: NodeId,
        state: Option<StateId>,
        best: u32,
    },
}

/// Heap entry. Greater = explored sooner.
#[derive(Debug, PartialEq, Eq)]
struct Frontier {
    distance: u32,
    weight: u64,
    rank: TermId,
    item: Item,
}

impl Frontier {
    fn term(distance: u32, weight: u64, id: TermId) -> Self {
        Self {
            distance,
            weight,
            rank: id,
            item: Item::Term(id),
        }
    }

    fn node(
        bound: u32,
        weight: u64,
        rank: TermId,
        node: NodeId,
        state: Option<StateId>,
        best: u32,
    ) -> Self {
        Self {
            distance: bound,
            weight,
            rank,
            item: Item::Node { node, state, best },
        }
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.weight.cmp(&other.weight))
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| match (&self.item, &other.item) {
                (Item::Term(_), Item::Node { .. }) => Ordering::Greater,
                (Item::Node { .. }, Item::Term(_)) => Ordering::Less,
                (Item::Term(a), Item::Term(b)) => b.cmp(a),
                (Item::Node { node: a, .. }, Item::Node { node: b, .. }) => b.cmp(a),
            })
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
