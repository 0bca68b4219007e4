// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Built-in stop word lists, loaded once from `data/stop_words.json`.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Deserialize)]
struct StopWordFile {
    english: Vec<String>,
    spanish: Vec<String>,
}

static LISTS: LazyLock<StopWordFile> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/stop_words.json")).unwrap_or_else(|e| {
        log::warn!("bundled stop word list is malformed, continuing without it: {}", e);
        StopWordFile {
            english: Vec::new(),
            spanish: Vec::new(),
        }
    })
});

/// Which stop words a [`StandardNormalizer`](super::StandardNormalizer) drops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    #[default]
    None,
    English,
    Spanish,
    /// Caller-supplied list. Matched after case and diacritic folding.
    Custom(Vec<String>),
}

impl StopWords {
    /// Raw words of this list (before any folding).
    pub fn words(&self) -> Vec<String> {
        match self {
            StopWords::None => Vec::new(),
            StopWords::English => LISTS.english.clone(),
            StopWords::Spanish => LISTS.spanish.clone(),
            StopWords::Custom(words) => words.clone(),
        }
    }
}
