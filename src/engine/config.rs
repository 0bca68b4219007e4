// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, so a config file only names what it changes:
//!
//! ```json
//! { "fuzzy": { "max_edits": 1, "mode": "prefix" },
//!   "infix": { "granularity": "token" },
//!   "normalizer": { "fold_diacritics": true, "stop_words": "spanish" } }
//! ```

use crate::error::{Result, SuggestError};
use crate::fuzzy::{FuzzyConfig, MAX_EDIT_DISTANCE};
use crate::infix::InfixConfig;
use crate::ngram::NextTermConfig;
use crate::normalize::NormalizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fuzzy: FuzzyConfig,
    pub infix: InfixConfig,
    pub next_term: NextTermConfig,
    pub normalizer: NormalizerConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    /// Reject values no lookup could honour.
    pub fn validate(&self) -> Result<()> {
        if self.fuzzy.max_edits > MAX_EDIT_DISTANCE {
            return Err(SuggestError::InvalidParameter {
                name: "fuzzy.max_edits",
                reason: format!(
                    "{} exceeds the supported maximum of {}",
                    self.fuzzy.max_edits, MAX_EDIT_DISTANCE
                ),
            });
        }
        if self.next_term.order == 0 {
            return Err(SuggestError::InvalidParameter {
                name: "next_term.order",
                reason: "n-gram order must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
