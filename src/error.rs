// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the suggestion core.
//!
//! There are only three ways to fail, and none of them is "nothing matched".
//! An empty result list is a perfectly good answer for every lookup. Errors
//! are reserved for callers handing us values we refuse to interpret.

use thiserror::Error;

/// Errors produced while building or querying suggestion indices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// A vocabulary observation carried a negative weight.
    ///
    /// Rejected at `add` time. During an engine build the entry is skipped
    /// and counted in the [`BuildReport`](crate::BuildReport) instead of
    /// aborting the whole build.
    #[error("invalid weight {weight} for term '{term}': weights must be non-negative")]
    InvalidWeight { term: String, weight: i64 },

    /// A lookup or build parameter is out of its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A lookup named an index that was never built.
    #[error("no index named '{0}' has been built")]
    UnknownIndex(String),
}

/// A specialized `Result` type for suggestion operations.
pub type Result<T> = std::result::Result<T, SuggestError>;
