// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted autocomplete over a vocabulary of terms.
//!
//! A vocabulary of `(term, weight)` observations is aggregated into a
//! [`TermTable`], and four indexes are built over it. Each answers a
//! different question about what the user is typing:
//!
//! | Strategy  | Index             | Answers                                        |
//! |-----------|-------------------|------------------------------------------------|
//! | prefix    | [`PrefixIndex`]   | heaviest terms starting with the input         |
//! | fuzzy     | [`FuzzyIndex`]    | terms within k edits, closest then heaviest    |
//! | infix     | [`InfixIndex`]    | terms containing the input, with the span      |
//! | next-term | [`NextTermModel`] | likely next words after the input              |
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────────────────────┐
//! │  ingest.rs   │───▶│  vocab.rs    │───▶│  TermTable (sorted, summed)   │
//! │ (files → obs)│    │ (aggregate)  │    └───────────────┬───────────────┘
//! └──────────────┘    └──────────────┘                    │
//!                            ┌─────────────────┬──────────┼─────────────────┐
//!                            ▼                 ▼          ▼                 ▼
//!                     ┌────────────┐    ┌────────────┐ ┌────────────┐ ┌────────────┐
//!                     │  prefix/   │◀───│  fuzzy/    │ │  infix/    │ │  ngram/    │
//!                     │ (trie,     │    │ (Lev. DFA  │ │ (SA-IS     │ │ (back-off  │
//!                     │  top-k)    │    │  × trie)   │ │  suffixes) │ │  counts)   │
//!                     └────────────┘    └────────────┘ └────────────┘ └────────────┘
//!                            │                 │              │              │
//!                            └─────────────────┴──────┬───────┴──────────────┘
//!                                                     ▼
//!                                  ┌─────────────────────────────────────┐
//!                                  │  engine/  (IndexSet per name,       │
//!                                  │   built aside, published by swap)   │
//!                                  └─────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use suggestor::SuggestionEngine;
//!
//! let engine = SuggestionEngine::default();
//! engine
//!     .build("amenities", vec![("wifi", 10), ("wifi router", 5), ("parking", 8)])
//!     .unwrap();
//!
//! let hits = engine.lookup_prefix("amenities", "wi", 5).unwrap();
//! assert_eq!(hits[0].term, "wifi");
//!
//! let hits = engine.lookup_fuzzy("amenities", "parkng", 5, 2).unwrap();
//! assert_eq!((hits[0].term.as_str(), hits[0].distance), ("parking", 1));
//!
//! let hits = engine.lookup_infix("amenities", "fi", 5).unwrap();
//! assert_eq!((hits[0].span_start, hits[0].span_end), (2, 4));
//! ```

mod error;
mod types;
mod utils;
mod vocab;

pub mod engine;
pub mod fuzzy;
pub mod infix;
pub mod ingest;
pub mod ngram;
pub mod normalize;
pub mod prefix;
pub mod ranking;

pub mod testing;

pub use engine::{BuildReport, EngineConfig, IndexSet, Query, SuggestionEngine, Suggestions};
pub use error::{Result, SuggestError};
pub use fuzzy::{
    bounded_distance, edit_distance, levenshtein_within, FuzzyConfig, FuzzyIndex,
    LevenshteinAutomaton, MatchMode, MAX_EDIT_DISTANCE,
};
pub use infix::{Granularity, InfixConfig, InfixIndex};
pub use ngram::{NextTermConfig, NextTermModel};
pub use normalize::{
    Language, Normalizer, NormalizerConfig, NormalizerKind, StandardNormalizer, StopWords, Token,
    WhitespaceNormalizer,
};
pub use prefix::PrefixIndex;
pub use types::{
    Completion, FuzzyCompletion, InfixCompletion, Prediction, TermEntry, TermId, TermTable,
};
pub use vocab::VocabularyBuilder;
