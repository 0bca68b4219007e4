// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One published generation of indices for a name.
//!
//! ```text
//!                      ┌──► PrefixIndex ──► FuzzyIndex (view)
//!   TermTable (Arc) ───┼──► InfixIndex
//!                      └──► NextTermModel  (trained on normalized lines)
//! ```
//!
//! The three builds share nothing mutable, so with the `parallel` feature they
//! run side by side via `rayon::join`. The result is immutable: lookups hold
//! an `Arc<IndexSet>` and never lock anything.

use super::config::EngineConfig;
use crate::error::Result;
use crate::fuzzy::FuzzyIndex;
use crate::infix::InfixIndex;
use crate::ngram::NextTermModel;
use crate::normalize::Normalizer;
use crate::prefix::PrefixIndex;
use crate::types::TermTable;
use std::fmt;
use std::sync::Arc;

/// All indices built from one vocabulary snapshot.
pub struct IndexSet {
    table: Arc<TermTable>,
    prefix: Arc<PrefixIndex>,
    fuzzy: FuzzyIndex,
    infix: InfixIndex,
    next_term: NextTermModel,
    normalizer: Arc<dyn Normalizer>,
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexSet")
            .field("terms", &self.table.len())
            .field("total_weight", &self.table.total_weight())
            .field("infix_positions", &self.infix.positions())
            .field("contexts", &self.next_term.context_count())
            .finish()
    }
}

impl IndexSet {
    /// Build every index over `table`.
    ///
    /// `corpus` trains the next-term model. When `None`, each term is its own
    /// training line, weighted by the term's weight.
    pub fn build(
        table: TermTable,
        corpus: Option<Vec<(String, u64)>>,
        config: &EngineConfig,
        normalizer: Arc<dyn Normalizer>,
    ) -> Result<Self> {
        let table = Arc::new(table);
        let lines: Vec<(String, u64)> = corpus.unwrap_or_else(|| {
            table
                .entries()
                .iter()
                .map(|e| (e.text.clone(), e.weight))
                .collect()
        });
        let order = config.next_term.order;

        let build_prefix = || PrefixIndex::build(Arc::clone(&table));
        let build_infix = || InfixIndex::build(Arc::clone(&table), config.infix.clone());
        let build_model = || {
            let tokenized = lines
                .iter()
                .map(|(text, weight)| (normalizer.tokens(text), *weight));
            NextTermModel::build_weighted(order, tokenized)
        };

        #[cfg(feature = "parallel")]
        let (prefix, (infix, next_term)) =
            rayon::join(build_prefix, || rayon::join(build_infix, build_model));

        #[cfg(not(feature = "parallel"))]
        let (prefix, infix, next_term) = (build_prefix(), build_infix(), build_model());

        let prefix = Arc::new(prefix);
        Ok(Self {
            fuzzy: FuzzyIndex::new(Arc::clone(&prefix), config.fuzzy.clone()),
            table,
            prefix,
            infix,
            next_term: next_term?,
            normalizer,
        })
    }

    pub fn table(&self) -> &Arc<TermTable> {
        &self.table
    }

    pub fn prefix(&self) -> &PrefixIndex {
        &self.prefix
    }

    pub fn fuzzy(&self) -> &FuzzyIndex {
        &self.fuzzy
    }

    pub fn infix(&self) -> &InfixIndex {
        &self.infix
    }

    pub fn next_term(&self) -> &NextTermModel {
        &self.next_term
    }

    /// The normalizer this generation was built with. Query text for the
    /// next-term model goes through the same one.
    pub fn normalizer(&self) -> &Arc<dyn Normalizer> {
        &self.normalizer
    }
}
