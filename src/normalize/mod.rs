// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: turning raw text into the tokens the next-term model
//! and token-granular infix index agree on.
//!
//! The indices themselves never normalize the vocabulary. "Wifi" and "wifi"
//! stay two terms. Normalizers only matter where text has to be *split*:
//! training n-grams, parsing a typed context, marking token boundaries.
//!
//! ```text
//!   "Café  Wi-Fi the best"
//!        │ split on non-alphanumeric
//!        ▼
//!   [Café 0..4] [Wi 6..8] [Fi 9..11] [the 12..15] [best 16..20]
//!        │ lowercase / fold diacritics / stop words / synonyms / stemming
//!        ▼
//!   [cafe 0..4] [wi 6..8] [fi 9..11] [best 16..20]
//! ```
//!
//! Offsets are character positions in the *original* text, so a token can
//! always be mapped back onto what the user typed.

mod stop_words;

pub use stop_words::StopWords;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// A normalized token with its character span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Splits text into normalized tokens.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Vec<Token>;

    /// Just the token texts.
    fn tokens(&self, text: &str) -> Vec<String> {
        self.normalize(text).into_iter().map(|t| t.text).collect()
    }
}

/// Splits on whitespace. Case and punctuation are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceNormalizer;

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        start,
                        end: i,
                    });
                }
            } else {
                if current.is_empty() {
                    start = i;
                }
                current.push(c);
            }
        }
        if !current.is_empty() {
            let end = start + current.chars().count();
            tokens.push(Token {
                text: current,
                start,
                end,
            });
        }
        tokens
    }
}

/// Languages with a Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    fn algorithm(self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::Spanish => Algorithm::Spanish,
        }
    }
}

/// Word tokenizer with optional case folding, diacritic folding, stop word
/// removal, synonym rewriting and stemming.
///
/// A synonym key containing punctuation, such as the emoticon `:)`, is
/// matched literally in the text and becomes a token of its own. Stemming
/// applies to words that no synonym rewrote.
#[derive(Debug, Clone)]
pub struct StandardNormalizer {
    lowercase: bool,
    fold_diacritics: bool,
    keep_handles: bool,
    stemmer: Option<Language>,
    stop_words: HashSet<String>,
    synonyms: HashMap<String, String>,
    /// Longest key first.
    symbol_synonyms: Vec<(String, usize, String)>,
}

impl Default for StandardNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardNormalizer {
    /// Lowercasing tokenizer with no folding, stop words or synonyms.
    pub fn new() -> Self {
        Self {
            lowercase: true,
            fold_diacritics: false,
            keep_handles: false,
            stemmer: None,
            stop_words: HashSet::new(),
            synonyms: HashMap::new(),
            symbol_synonyms: Vec::new(),
        }
    }

    pub fn with_lowercase(mut self, on: bool) -> Self {
        self.lowercase = on;
        self
    }

    /// Strip diacritics (`café` → `cafe`). A no-op without the
    /// `unicode-normalization` feature.
    pub fn with_diacritic_folding(mut self, on: bool) -> Self {
        self.fold_diacritics = on;
        self
    }

    /// Keep a leading `@` or `#` attached to the word that follows it.
    pub fn with_handles(mut self, on: bool) -> Self {
        self.keep_handles = on;
        self
    }

    /// Reduce words to their Snowball stem (`spaces` → `space`).
    pub fn with_stemmer(mut self, language: Option<Language>) -> Self {
        self.stemmer = language;
        self
    }

    pub fn with_stop_words(mut self, list: &StopWords) -> Self {
        let folded: Vec<String> = list.words().iter().map(|w| self.fold(w)).collect();
        self.stop_words.extend(folded);
        self
    }

    /// Rewrite `from` to `to` after folding.
    pub fn with_synonym(mut self, from: &str, to: &str) -> Self {
        let key = self.fold(from);
        if key.is_empty() {
            return self;
        }
        if key.chars().all(char::is_alphanumeric) {
            self.synonyms.insert(key, to.to_string());
        } else {
            self.symbol_synonyms.retain(|(k, _, _)| *k != key);
            let len = key.chars().count();
            self.symbol_synonyms.push((key, len, to.to_string()));
            self.symbol_synonyms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        }
        self
    }

    fn fold(&self, word: &str) -> String {
        let folded = if self.fold_diacritics {
            strip_diacritics(word)
        } else {
            word.to_string()
        };
        if self.lowercase {
            folded.to_lowercase()
        } else {
            folded
        }
    }

    /// A symbolic synonym spelled out at `chars[i..]`, with its length.
    fn symbol_at(&self, chars: &[char], i: usize) -> Option<(&str, usize)> {
        self.symbol_synonyms.iter().find_map(|(key, len, to)| {
            let window = chars.get(i..i + len)?;
            let candidate: String = window.iter().collect();
            (self.fold(&candidate) == *key).then_some((to.as_str(), *len))
        })
    }

    fn starts_word(&self, chars: &[char], i: usize) -> bool {
        if chars[i].is_alphanumeric() {
            return true;
        }
        self.keep_handles
            && matches!(chars[i], '@' | '#')
            && chars.get(i + 1).is_some_and(|c| c.is_alphanumeric())
    }
}

impl Normalizer for StandardNormalizer {
    fn normalize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let stemmer = self.stemmer.map(|l| Stemmer::create(l.algorithm()));
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((to, len)) = self.symbol_at(&chars, i) {
                tokens.push(Token {
                    text: to.to_string(),
                    start: i,
                    end: i + len,
                });
                i += len;
                continue;
            }
            if !self.starts_word(&chars, i) {
                i += 1;
                continue;
            }
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }

            let raw: String = chars[start..i].iter().collect();
            let word = self.fold(&raw);
            if self.stop_words.contains(&word) {
                continue;
            }
            let word = match (self.synonyms.get(&word), &stemmer) {
                (Some(synonym), _) => synonym.clone(),
                (None, Some(stemmer)) => stemmer.stem(&word).into_owned(),
                (None, None) => word,
            };
            tokens.push(Token {
                text: word,
                start,
                end: i,
            });
        }
        tokens
    }
}

#[cfg(feature = "unicode-normalization")]
fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritics(value: &str) -> String {
    value.to_string()
}

/// Nonspacing marks left behind by NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Supplement
        '\u{20D0}'..='\u{20FF}' |  // For Symbols
        '\u{FE20}'..='\u{FE2F}'    // Half Marks
    )
}

/// Which normalizer an engine uses, as it appears in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerKind {
    Whitespace,
    #[default]
    Standard,
}

/// Serializable description of a normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub kind: NormalizerKind,
    pub lowercase: bool,
    pub fold_diacritics: bool,
    pub keep_handles: bool,
    pub stemmer: Option<Language>,
    pub stop_words: StopWords,
    pub synonyms: HashMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            kind: NormalizerKind::Standard,
            lowercase: true,
            fold_diacritics: false,
            keep_handles: false,
            stemmer: None,
            stop_words: StopWords::None,
            synonyms: HashMap::new(),
        }
    }
}

impl NormalizerConfig {
    pub fn build(&self) -> Arc<dyn Normalizer> {
        match self.kind {
            NormalizerKind::Whitespace => Arc::new(WhitespaceNormalizer),
            NormalizerKind::Standard => {
                let mut n = StandardNormalizer::new()
                    .with_lowercase(self.lowercase)
                    .with_diacritic_folding(self.fold_diacritics)
                    .with_handles(self.keep_handles)
                    .with_stemmer(self.stemmer)
                    .with_stop_words(&self.stop_words);
                for (from, to) in &self.synonyms {
                    n = n.with_synonym(from, to);
                }
                Arc::new(n)
            }
        }
    }
}
