// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suggestor command-line interface.
//!
//! Every invocation loads one vocabulary (from `--terms`, `--lines` or
//! `--csv`), builds an engine over it, and then answers either a single
//! query (`prefix`, `fuzzy`, `infix`, `next`) or a stream of them (`shell`).

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "suggestor",
    about = "Weighted autocomplete: prefix, fuzzy, infix and next-term suggestions",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// JSON engine configuration (fuzzy, infix, next_term, normalizer)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Log build and lookup details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the vocabulary comes from. Exactly one of `--terms`, `--lines`,
/// `--csv` is required.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Tab-separated `term<TAB>weight` file (missing weight counts once)
    #[arg(long, global = true)]
    pub terms: Option<PathBuf>,

    /// One phrase per line, each counted once
    #[arg(long, global = true)]
    pub lines: Option<PathBuf>,

    /// CSV file whose `--column` holds a list such as ["Wifi", "Pool"]
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    /// Column (0-based) read from `--csv`
    #[arg(long, default_value = "0", global = true)]
    pub column: usize,

    /// Lowercase list items read from `--csv` before counting
    #[arg(long, global = true)]
    pub lowercase: bool,

    /// Free text to train next-term prediction on, split into sentences
    /// (defaults to the vocabulary itself)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Complete a prefix
    Prefix {
        query: String,

        /// Maximum number of suggestions
        #[arg(short, default_value = "10")]
        k: usize,
    },

    /// Complete a possibly misspelled term
    Fuzzy {
        query: String,

        #[arg(short, default_value = "10")]
        k: usize,

        /// Edit distance radius (defaults to the configured one)
        #[arg(short, long)]
        max_edits: Option<u32>,
    },

    /// Find terms containing a substring
    Infix {
        query: String,

        #[arg(short, default_value = "10")]
        k: usize,
    },

    /// Predict the next word after some text
    Next {
        context: String,

        #[arg(short, default_value = "10")]
        k: usize,

        /// Treat a trailing word without a following space as unfinished
        #[arg(long)]
        complete: bool,
    },

    /// Read queries from stdin, one per line, until EOF or a line `FIN`
    Shell {
        #[arg(short, long, value_enum, default_value = "prefix")]
        strategy: Strategy,

        #[arg(short, default_value = "10")]
        k: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Prefix,
    Fuzzy,
    Infix,
    Next,
}
