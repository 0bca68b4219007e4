// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading vocabularies and training text from disk.
//!
//! None of this is needed to use the engine: it only turns common file
//! shapes into the `(term, weight)` and `(line, weight)` sequences that
//! [`SuggestionEngine::build`](crate::SuggestionEngine::build) and
//! [`build_with_corpus`](crate::SuggestionEngine::build_with_corpus) take.
//!
//! | Function                  | File shape                                 |
//! |---------------------------|--------------------------------------------|
//! | [`read_weighted_terms`]   | `term<TAB>weight` per line                 |
//! | [`read_lines`]            | one phrase per line                        |
//! | [`read_sentences`]        | free text, split into sentences on `.`     |
//! | [`read_list_column`]      | CSV whose column holds `["a", "b", ...]`   |
//!
//! Lines that cannot be understood are skipped and listed, never fatal.
//! Only I/O errors abort.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A line that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line: usize,
    pub reason: String,
}

/// Observations read from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    pub entries: Vec<(String, i64)>,
    pub skipped: Vec<SkippedLine>,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Read a `term<TAB>weight` file. A line with no tab counts once.
///
/// Weights are passed through as signed numbers: a negative weight reaches
/// the vocabulary builder and is rejected there, so it shows up in the build
/// report rather than here.
pub fn read_weighted_terms(path: &Path) -> Result<Ingested> {
    parse_weighted_terms(open(path)?)
}

pub fn parse_weighted_terms<R: BufRead>(reader: R) -> Result<Ingested> {
    let mut out = Ingested::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match line.rsplit_once('\t') {
            None => out.entries.push((line.to_string(), 1)),
            Some((term, weight)) => match weight.trim().parse::<i64>() {
                Ok(w) => out.entries.push((term.to_string(), w)),
                Err(e) => {
                    log::warn!("line {}: bad weight {:?}: {}", i + 1, weight, e);
                    out.skipped.push(SkippedLine {
                        line: i + 1,
                        reason: format!("bad weight {:?}", weight),
                    });
                }
            },
        }
    }
    Ok(out)
}

/// Read one phrase per line, each counted once. Blank lines are ignored.
pub fn read_lines(path: &Path) -> Result<Vec<(String, i64)>> {
    let mut out = Vec::new();
    for line in open(path)?.lines() {
        let line = line?;
        let phrase = line.trim();
        if !phrase.is_empty() {
            out.push((phrase.to_string(), 1));
        }
    }
    Ok(out)
}

/// Split free text into lowercased sentences and count repeats.
///
/// Output is sorted by sentence so training is reproducible.
pub fn read_sentences(path: &Path) -> Result<Vec<(String, u64)>> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for line in open(path)?.lines() {
        let line = line?.to_lowercase();
        for sentence in line.split('.') {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                *counts.entry(sentence.to_string()).or_insert(0) += 1;
            }
        }
    }
    let mut sentences: Vec<(String, u64)> = counts.into_iter().collect();
    sentences.sort_unstable();
    Ok(sentences)
}

/// Items of a list cell such as `["Wifi", "Free parking"]`.
///
/// Accepts the cell either raw or still CSV-quoted (`"[""Wifi""]"`).
/// Items are trimmed; empty items are dropped.
pub fn parse_list_column(cell: &str) -> Vec<String> {
    let cell = cell.trim();
    let unquoted;
    let cell = if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        unquoted = cell[1..cell.len() - 1].replace("\"\"", "\"");
        unquoted.as_str()
    } else {
        cell
    };

    let items: Vec<String> = serde_json::from_str(cell).unwrap_or_else(|_| {
        cell.trim_matches(|c| c == '[' || c == ']')
            .split(',')
            .map(|item| item.trim().trim_matches('"').to_string())
            .collect()
    });
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Count list items found in `column` (0-based) of a CSV file with a header.
///
/// Records are parsed with full RFC 4180 quoting, so a quoted field may span
/// several physical lines. Short rows and malformed records are skipped and
/// reported by the line they start on. With `lowercase`, items are
/// case-folded before counting, the way amenity names are usually merged.
pub fn read_list_column(path: &Path, column: usize, lowercase: bool) -> Result<Ingested> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    parse_list_column_records(reader, column, lowercase)
}

fn parse_list_column_records<R: Read>(
    mut reader: csv::Reader<R>,
    column: usize,
    lowercase: bool,
) -> Result<Ingested> {
    let mut out = Ingested::default();
    let mut counts: HashMap<String, i64> = HashMap::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line() as usize);
                log::warn!("line {}: unreadable record: {}", line, e);
                out.skipped.push(SkippedLine {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let Some(cell) = record.get(column) else {
            let line = record.position().map_or(0, |p| p.line() as usize);
            out.skipped.push(SkippedLine {
                line,
                reason: format!("only {} columns", record.len()),
            });
            continue;
        };
        for item in parse_list_column(cell) {
            let item = if lowercase { item.to_lowercase() } else { item };
            *counts.entry(item).or_insert(0) += 1;
        }
    }
    out.entries = counts.into_iter().collect();
    out.entries.sort_unstable();
    Ok(out)
}
