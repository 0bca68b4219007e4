// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Next-token prediction with a back-off n-gram model.
//!
//! Training counts, for every position in every line and every order
//! `n` in `1..=N`, the pair (previous `n-1` tokens, token). No padding: a
//! position near the start of a line only contributes the orders it has
//! enough history for.
//!
//! ```text
//!   order 3, line "free wifi router" (weight 2)
//!
//!   context            next     +count
//!   []                 free     2
//!   []                 wifi     2
//!   [free]             wifi     2
//!   []                 router   2
//!   [wifi]             router   2
//!   [free, wifi]       router   2
//! ```
//!
//! Prediction backs off from the longest usable context to the empty one and
//! answers from the first context that has any candidates. Any non-empty
//! model has a non-empty unigram table, so an empty answer only ever means
//! "nothing was trained" (or, for [`NextTermModel::predict_partial`],
//! "nothing starts with that").

use crate::error::{Result, SuggestError};
use crate::ranking::compare_predictions;
use crate::types::Prediction;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context → (next token → count).
type Counts = HashMap<Vec<String>, HashMap<String, u64>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextTermConfig {
    /// N: contexts hold up to N-1 tokens.
    pub order: usize,
}

impl Default for NextTermConfig {
    fn default() -> Self {
        Self { order: 3 }
    }
}

/// Frozen n-gram tables.
#[derive(Debug, Clone, Default)]
pub struct NextTermModel {
    order: usize,
    /// Candidates per context, already ranked.
    tables: HashMap<Vec<String>, Vec<Prediction>>,
}

impl NextTermModel {
    /// Train on unweighted token lines.
    pub fn build<I>(order: usize, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        Self::build_weighted(order, lines.into_iter().map(|line| (line, 1)))
    }

    /// Train on token lines that each count `weight` times.
    pub fn build_weighted<I>(order: usize, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<String>, u64)>,
    {
        if order == 0 {
            return Err(SuggestError::InvalidParameter {
                name: "order",
                reason: "n-gram order must be at least 1".to_string(),
            });
        }
        let lines: Vec<(Vec<String>, u64)> = lines.into_iter().collect();

        // MAP: one count table per line
        #[cfg(feature = "parallel")]
        let per_line: Vec<Counts> = lines
            .par_iter()
            .map(|(tokens, weight)| count_line(order, tokens, *weight))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let per_line: Vec<Counts> = lines
            .iter()
            .map(|(tokens, weight)| count_line(order, tokens, *weight))
            .collect();

        // REDUCE: merge into one table
        let mut counts: Counts = HashMap::new();
        for line_counts in per_line {
            for (context, nexts) in line_counts {
                let slot = counts.entry(context).or_default();
                for (token, n) in nexts {
                    let c = slot.entry(token).or_insert(0);
                    *c = c.saturating_add(n);
                }
            }
        }

        let tables = freeze(counts);
        log::debug!(
            "next-term model: order {}, {} lines, {} contexts",
            order,
            lines.len(),
            tables.len()
        );
        Ok(Self { order, tables })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct contexts (of every length) seen in training.
    pub fn context_count(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Up to `k` likely next tokens after `context`, frequency descending then
    /// token ascending.
    pub fn predict(&self, context: &[String], k: usize) -> Vec<Prediction> {
        self.back_off(context, k, |_| true)
    }

    /// Like [`predict`](Self::predict), but only tokens starting with
    /// `partial` count as candidates. A context whose candidates all fail the
    /// filter backs off like a missing one.
    pub fn predict_partial(&self, context: &[String], partial: &str, k: usize) -> Vec<Prediction> {
        self.back_off(context, k, |p| p.token.starts_with(partial))
    }

    fn back_off<F>(&self, context: &[String], k: usize, keep: F) -> Vec<Prediction>
    where
        F: Fn(&Prediction) -> bool,
    {
        if k == 0 || self.order == 0 {
            return Vec::new();
        }
        let longest = context.len().min(self.order - 1);
        for len in (0..=longest).rev() {
            let key = &context[context.len() - len..];
            let Some(candidates) = self.tables.get(key) else {
                continue;
            };
            let hits: Vec<Prediction> = candidates
                .iter()
                .filter(|p| keep(p))
                .take(k)
                .cloned()
                .collect();
            if !hits.is_empty() {
                log::trace!("next-term: answered from a {}-token context", len);
                return hits;
            }
        }
        Vec::new()
    }
}

fn count_line(order: usize, tokens: &[String], weight: u64) -> Counts {
    let mut counts: Counts = HashMap::new();
    if weight == 0 {
        return counts;
    }
    for i in 0..tokens.len() {
        for n in 1..=order.min(i + 1) {
            let context = tokens[i + 1 - n..i].to_vec();
            let c = counts
                .entry(context)
                .or_default()
                .entry(tokens[i].clone())
                .or_insert(0);
            *c = c.saturating_add(weight);
        }
    }
    counts
}

fn freeze(counts: Counts) -> HashMap<Vec<String>, Vec<Prediction>> {
    #[cfg(feature = "parallel")]
    let iter = counts.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = counts.into_iter();

    iter.map(|(context, nexts)| {
        let mut ranked: Vec<Prediction> = nexts
            .into_iter()
            .map(|(token, frequency)| Prediction { token, frequency })
            .collect();
        ranked.sort_unstable_by(compare_predictions);
        (context, ranked)
    })
    .collect()
}
