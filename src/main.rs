// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::BufRead;
use suggestor::{ingest, BuildReport, EngineConfig, Query, SuggestionEngine};

mod cli;
use cli::display::{print_suggestions, styled, DIM};
use cli::{Cli, Commands, SourceArgs, Strategy};

const INDEX: &str = "default";

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = SuggestionEngine::new(config)?;
    let report = load(&engine, &cli.source)?;
    if report.rejected > 0 {
        eprintln!(
            "{}",
            styled(
                &[DIM],
                &format!("skipped {} invalid vocabulary entries", report.rejected)
            )
        );
    }

    let query = match cli.command {
        Commands::Prefix { query, k } => Query::Prefix { text: query, k },
        Commands::Fuzzy { query, k, max_edits } => Query::Fuzzy {
            text: query,
            k,
            max_edits,
        },
        Commands::Infix { query, k } => Query::Infix { text: query, k },
        Commands::Next {
            context,
            k,
            complete,
        } => {
            if complete {
                Query::CompleteNext { text: context, k }
            } else {
                Query::Next { context, k }
            }
        }
        Commands::Shell { strategy, k } => return shell(&engine, strategy, k, cli.json),
    };
    print_suggestions(&engine.lookup(INDEX, &query)?, cli.json)
}

/// Read the vocabulary named on the command line and publish it.
fn load(engine: &SuggestionEngine, source: &SourceArgs) -> Result<BuildReport> {
    let given = [&source.terms, &source.lines, &source.csv]
        .iter()
        .filter(|p| p.is_some())
        .count();
    if given != 1 {
        bail!("give exactly one of --terms, --lines or --csv");
    }

    let entries = if let Some(path) = &source.terms {
        let ingested = ingest::read_weighted_terms(path)?;
        for skipped in &ingested.skipped {
            log::warn!("{}:{}: {}", path.display(), skipped.line, skipped.reason);
        }
        ingested.entries
    } else if let Some(path) = &source.lines {
        ingest::read_lines(path)?
    } else if let Some(path) = &source.csv {
        let ingested = ingest::read_list_column(path, source.column, source.lowercase)?;
        for skipped in &ingested.skipped {
            log::warn!("{}:{}: {}", path.display(), skipped.line, skipped.reason);
        }
        ingested.entries
    } else {
        Vec::new()
    };

    let report = match &source.corpus {
        Some(path) => {
            let corpus = ingest::read_sentences(path)
                .with_context(|| format!("reading corpus {}", path.display()))?;
            engine.build_with_corpus(INDEX, entries, corpus)?
        }
        None => engine.build(INDEX, entries)?,
    };
    Ok(report)
}

/// Answer one query per stdin line until EOF or `FIN`.
fn shell(engine: &SuggestionEngine, strategy: Strategy, k: usize, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim_end_matches(['\r', '\n']);
        if text == "FIN" {
            break;
        }
        let query = match strategy {
            Strategy::Prefix => Query::Prefix {
                text: text.to_string(),
                k,
            },
            Strategy::Fuzzy => Query::Fuzzy {
                text: text.to_string(),
                k,
                max_edits: None,
            },
            Strategy::Infix => Query::Infix {
                text: text.to_string(),
                k,
            },
            Strategy::Next => Query::CompleteNext {
                text: text.to_string(),
                k,
            },
        };
        if !json {
            println!("{}", styled(&[DIM], &format!("» {}", text)));
        }
        print_suggestions(&engine.lookup(INDEX, &query)?, json)?;
    }
    Ok(())
}
