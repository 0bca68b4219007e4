// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for suggestor results.
//!
//! One row per suggestion, weight right-aligned on the left, infix spans in
//! bold, fuzzy distances dimmed. Respects `NO_COLOR` for the purists and
//! non-TTY detection for pipelines. `--json` bypasses all of it.

use std::io::IsTerminal;
use suggestor::{Completion, FuzzyCompletion, InfixCompletion, Prediction, Suggestions};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const YELLOW: &str = "\x1b[33m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn weight_cell(weight: u64) -> String {
    styled(&[YELLOW], &format!("{:>8}", weight))
}

pub fn prefix_row(c: &Completion) -> String {
    format!("{}  {}", weight_cell(c.weight), c.term)
}

pub fn fuzzy_row(c: &FuzzyCompletion) -> String {
    let edits = match c.distance {
        0 => "exact".to_string(),
        1 => "1 edit".to_string(),
        n => format!("{} edits", n),
    };
    format!(
        "{}  {}  {}",
        weight_cell(c.weight),
        c.term,
        styled(&[DIM], &format!("({})", edits))
    )
}

pub fn infix_row(c: &InfixCompletion) -> String {
    let term = if use_colors() {
        c.highlight(&format!("{}{}", BOLD, CYAN), RESET)
    } else {
        c.highlight("[", "]")
    };
    format!("{}  {}", weight_cell(c.weight), term)
}

pub fn prediction_row(p: &Prediction) -> String {
    format!("{}  {}", weight_cell(p.frequency), p.token)
}

/// Print results as a table, or as one JSON document.
pub fn print_suggestions(results: &Suggestions, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("{}", styled(&[DIM], "(no suggestions)"));
        return Ok(());
    }
    let rows: Vec<String> = match results {
        Suggestions::Prefix(r) => r.iter().map(prefix_row).collect(),
        Suggestions::Fuzzy(r) => r.iter().map(fuzzy_row).collect(),
        Suggestions::Infix(r) => r.iter().map(infix_row).collect(),
        Suggestions::Next(r) => r.iter().map(prediction_row).collect(),
    };
    for row in rows {
        println!("{}", row);
    }
    Ok(())
}
