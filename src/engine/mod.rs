// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The façade: named index sets, built off to the side and published whole.
//!
//! # Publication
//!
//! ```text
//!   build("amenities", source)
//!     │  aggregate ──► TermTable          (no lock held)
//!     │  build    ──► IndexSet            (no lock held)
//!     ▼
//!   write lock: map["amenities"] = Arc<IndexSet>   ◄── the only mutation
//!
//!   lookup_*("amenities", ..)
//!     read lock: clone the Arc, release ──► query the snapshot lock-free
//! ```
//!
//! A lookup that cloned the old `Arc` before a rebuild published finishes
//! against the old generation, which is dropped when its last reader is done.
//! Nobody ever sees a half-built index.

mod config;
mod snapshot;

pub use config::EngineConfig;
pub use snapshot::IndexSet;

use crate::error::{Result, SuggestError};
use crate::normalize::Normalizer;
use crate::types::{Completion, FuzzyCompletion, InfixCompletion, Prediction, TermTable};
use crate::utils::char_len;
use crate::vocab::VocabularyBuilder;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a build accepted and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Observations aggregated into the table.
    pub accepted: usize,
    /// Observations skipped (negative weight, empty term).
    pub rejected: usize,
    /// Distinct terms in the published table.
    pub terms: usize,
}

/// One lookup, any strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Query {
    Prefix { text: String, k: usize },
    /// `max_edits: None` uses the configured radius.
    Fuzzy { text: String, k: usize, max_edits: Option<u32> },
    Infix { text: String, k: usize },
    Next { context: String, k: usize },
    CompleteNext { text: String, k: usize },
}

/// Results of a [`Query`], tagged by strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "results", rename_all = "snake_case")]
pub enum Suggestions {
    Prefix(Vec<Completion>),
    Fuzzy(Vec<FuzzyCompletion>),
    Infix(Vec<InfixCompletion>),
    Next(Vec<Prediction>),
}

impl Suggestions {
    pub fn len(&self) -> usize {
        match self {
            Suggestions::Prefix(r) => r.len(),
            Suggestions::Fuzzy(r) => r.len(),
            Suggestions::Infix(r) => r.len(),
            Suggestions::Next(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named suggestion indices behind one interface.
pub struct SuggestionEngine {
    config: EngineConfig,
    normalizer: Arc<dyn Normalizer>,
    indices: RwLock<HashMap<String, Arc<IndexSet>>>,
}

impl fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionEngine")
            .field("config", &self.config)
            .field("indices", &self.names())
            .finish()
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            normalizer: config.normalizer.build(),
            config,
            indices: RwLock::new(HashMap::new()),
        }
    }
}

impl SuggestionEngine {
    /// Engine with a validated config. The normalizer comes from
    /// `config.normalizer` unless replaced with [`with_normalizer`](Self::with_normalizer).
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: config.normalizer.build(),
            config,
            indices: RwLock::new(HashMap::new()),
        })
    }

    /// Use a custom normalizer for every later build.
    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -------------------------------------------------------------------
    // Build
    // -------------------------------------------------------------------

    /// Aggregate `source` and publish a fresh index set under `name`,
    /// replacing any previous one.
    ///
    /// Bad observations are skipped and counted in the report; they never
    /// fail the build.
    pub fn build<I, S>(&self, name: &str, source: I) -> Result<BuildReport>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let (table, accepted, rejected) = aggregate(source);
        self.publish(name, table, None, accepted, rejected)
    }

    /// Like [`build`](Self::build), but the next-term model learns from
    /// `corpus` (text, weight) lines instead of the terms themselves.
    pub fn build_with_corpus<I, S, C>(&self, name: &str, source: I, corpus: C) -> Result<BuildReport>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
        C: IntoIterator<Item = (String, u64)>,
    {
        let (table, accepted, rejected) = aggregate(source);
        let corpus = corpus.into_iter().collect();
        self.publish(name, table, Some(corpus), accepted, rejected)
    }

    /// Publish an already finalized table.
    pub fn build_table(&self, name: &str, table: TermTable) -> Result<BuildReport> {
        let accepted = table.len();
        self.publish(name, table, None, accepted, 0)
    }

    fn publish(
        &self,
        name: &str,
        table: TermTable,
        corpus: Option<Vec<(String, u64)>>,
        accepted: usize,
        rejected: usize,
    ) -> Result<BuildReport> {
        let terms = table.len();
        let set = IndexSet::build(table, corpus, &self.config, Arc::clone(&self.normalizer))?;

        let replaced = self
            .indices
            .write()
            .insert(name.to_string(), Arc::new(set))
            .is_some();

        log::info!(
            "{} index '{}': {} terms ({} accepted, {} rejected)",
            if replaced { "rebuilt" } else { "built" },
            name,
            terms,
            accepted,
            rejected
        );
        Ok(BuildReport {
            accepted,
            rejected,
            terms,
        })
    }

    /// Drop the index set published under `name`. In-flight lookups keep
    /// their snapshot.
    pub fn remove(&self, name: &str) -> bool {
        self.indices.write().remove(name).is_some()
    }

    /// Published names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indices.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.read().contains_key(name)
    }

    /// The current snapshot for `name`.
    pub fn snapshot(&self, name: &str) -> Result<Arc<IndexSet>> {
        self.indices
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SuggestError::UnknownIndex(name.to_string()))
    }

    // -------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------

    pub fn lookup_prefix(&self, name: &str, prefix: &str, k: usize) -> Result<Vec<Completion>> {
        Ok(self.snapshot(name)?.prefix().lookup(prefix, k))
    }

    pub fn lookup_fuzzy(
        &self,
        name: &str,
        query: &str,
        k: usize,
        max_edits: u32,
    ) -> Result<Vec<FuzzyCompletion>> {
        self.snapshot(name)?.fuzzy().lookup(query, k, max_edits)
    }

    pub fn lookup_infix(&self, name: &str, query: &str, k: usize) -> Result<Vec<InfixCompletion>> {
        Ok(self.snapshot(name)?.infix().lookup(query, k))
    }

    /// Next tokens after `context`, which is normalized the same way the
    /// training lines were.
    pub fn predict_next(&self, name: &str, context: &str, k: usize) -> Result<Vec<Prediction>> {
        let set = self.snapshot(name)?;
        let tokens = set.normalizer().tokens(context);
        Ok(set.next_term().predict(&tokens, k))
    }

    /// Free-text completion of what a user is typing.
    ///
    /// If `text` ends in whitespace (or is empty) this is [`predict_next`](Self::predict_next).
    /// Otherwise the last token is a word in progress: it is dropped from the
    /// context and only candidates starting with it are returned.
    pub fn complete_next(&self, name: &str, text: &str, k: usize) -> Result<Vec<Prediction>> {
        let set = self.snapshot(name)?;
        let mut tokens = set.normalizer().normalize(text);
        let text_len = char_len(text);
        let partial = match tokens.last() {
            Some(last) if last.end == text_len => tokens.pop().map(|t| t.text),
            _ => None,
        };
        let context: Vec<String> = tokens.into_iter().map(|t| t.text).collect();
        let model = set.next_term();
        Ok(match partial {
            Some(partial) => model.predict_partial(&context, &partial, k),
            None => model.predict(&context, k),
        })
    }

    /// Dispatch a [`Query`].
    pub fn lookup(&self, name: &str, query: &Query) -> Result<Suggestions> {
        Ok(match query {
            Query::Prefix { text, k } => Suggestions::Prefix(self.lookup_prefix(name, text, *k)?),
            Query::Fuzzy { text, k, max_edits } => Suggestions::Fuzzy(match max_edits {
                Some(max_edits) => self.lookup_fuzzy(name, text, *k, *max_edits)?,
                None => self.snapshot(name)?.fuzzy().lookup_default(text, *k)?,
            }),
            Query::Infix { text, k } => Suggestions::Infix(self.lookup_infix(name, text, *k)?),
            Query::Next { context, k } => Suggestions::Next(self.predict_next(name, context, *k)?),
            Query::CompleteNext { text, k } => {
                Suggestions::Next(self.complete_next(name, text, *k)?)
            }
        })
    }
}

fn aggregate<I, S>(source: I) -> (TermTable, usize, usize)
where
    I: IntoIterator<Item = (S, i64)>,
    S: Into<String>,
{
    let mut builder = VocabularyBuilder::new();
    let rejected = builder.extend(source);
    let accepted = builder.observations();
    (builder.finalize(), accepted, rejected)
}
