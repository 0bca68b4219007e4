//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use suggestor::{SuggestionEngine, TermTable};
use tempfile::TempDir;

// Re-export canonical fixtures from suggestor::testing
pub use suggestor::testing::{amenities, hotel_vocabulary, synthetic_vocabulary};

// ============================================================================
// ENGINES
// ============================================================================

/// Engine with the amenities vocabulary published as "amenities".
pub fn amenities_engine() -> SuggestionEngine {
    let engine = SuggestionEngine::default();
    engine
        .build("amenities", amenities())
        .expect("amenities vocabulary builds");
    engine
}

/// Engine with the hotel vocabulary published as "hotels".
pub fn hotel_engine() -> SuggestionEngine {
    let engine = SuggestionEngine::default();
    engine
        .build("hotels", hotel_vocabulary())
        .expect("hotel vocabulary builds");
    engine
}

pub fn table_of(pairs: &[(String, u64)]) -> TermTable {
    TermTable::from_pairs(pairs.iter().map(|(t, w)| (t.as_str(), *w)))
}

// ============================================================================
// FILES
// ============================================================================

/// Write `content` to `name` inside a fresh temp dir.
///
/// The dir is returned too; the file disappears when it drops.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    (dir, path)
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet, so prefixes and near misses collide.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,6}").unwrap()
}

/// Words that mix ASCII with multi-byte characters.
pub fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcé ō]{1,6}").unwrap()
}

/// A vocabulary of weighted terms (duplicates allowed).
pub fn vocabulary_strategy() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec((word_strategy(), 0u64..50), 1..40)
}

pub fn unicode_vocabulary_strategy() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec((unicode_word_strategy(), 0u64..50), 1..30)
}

/// Lines of space-separated words for next-term training.
pub fn lines_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    let token = prop::string::string_regex("[a-e]{1,2}").unwrap();
    prop::collection::vec(prop::collection::vec(token, 1..6), 1..15)
}
