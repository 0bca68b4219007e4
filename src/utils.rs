// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for character-indexed string handling.
//!
//! Offsets throughout the crate count Unicode scalar values, not bytes. These
//! helpers translate between the two without panicking on out-of-range input.

/// Slice `s` by character positions `[start, end)`.
///
/// Positions past the end clamp to the end of the string, and `start > end`
/// yields an empty slice.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(s, start);
    let to = byte_offset(s, end);
    if from >= to {
        return "";
    }
    &s[from..to]
}

/// Byte offset of the `index`-th character (or `s.len()` past the end).
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(b, _)| b)
}

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
