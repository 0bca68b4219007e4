//! Reading vocabularies, corpora and configuration from files.

use super::common::temp_file;
use suggestor::{ingest, EngineConfig, Granularity, MatchMode, SuggestionEngine};

#[test]
fn weighted_terms_file_builds_an_index() {
    let (_dir, path) = temp_file("terms.tsv", "wifi\t10\nwifi router\t5\nparking\t8\npool\tmany\n");
    let ingested = ingest::read_weighted_terms(&path).unwrap();
    assert_eq!(ingested.entries.len(), 3);
    assert_eq!(ingested.skipped.len(), 1);

    let engine = SuggestionEngine::default();
    let report = engine.build("amenities", ingested.entries).unwrap();
    assert_eq!(report.terms, 3);
    let hits = engine.lookup_prefix("amenities", "wi", 5).unwrap();
    assert_eq!(hits[0].term, "wifi");
}

#[test]
fn lines_file_counts_repeats() {
    let (_dir, path) = temp_file("lines.txt", "pool\n\nspa\npool\n  pool  \n");
    let entries = ingest::read_lines(&path).unwrap();
    let engine = SuggestionEngine::default();
    engine.build("x", entries).unwrap();
    let hits = engine.lookup_prefix("x", "", 5).unwrap();
    assert_eq!((hits[0].term.as_str(), hits[0].weight), ("pool", 3));
    assert_eq!((hits[1].term.as_str(), hits[1].weight), ("spa", 1));
}

#[test]
fn sentences_are_lowercased_split_and_counted() {
    let (_dir, path) = temp_file(
        "reviews.txt",
        "Great Pool. Free wifi.\nfree wifi. Great pool\n",
    );
    let sentences = ingest::read_sentences(&path).unwrap();
    assert_eq!(
        sentences,
        vec![("free wifi".to_string(), 2), ("great pool".to_string(), 2)]
    );
}

#[test]
fn csv_list_column_counts_items() {
    let csv = "id,name,amenities\n\
               1,Sol,\"[\"\"Wifi\"\", \"\"Pool\"\"]\"\n\
               2,Mar,\"[\"\"wifi\"\", \"\"Kitchen\"\"]\"\n\
               3,Short\n";
    let (_dir, path) = temp_file("listings.csv", csv);

    let ingested = ingest::read_list_column(&path, 2, true).unwrap();
    assert_eq!(
        ingested.entries,
        vec![
            ("kitchen".to_string(), 1),
            ("pool".to_string(), 1),
            ("wifi".to_string(), 2)
        ]
    );
    assert_eq!(ingested.skipped.len(), 1);
    assert_eq!(ingested.skipped[0].line, 4);

    let cased = ingest::read_list_column(&path, 2, false).unwrap();
    assert_eq!(cased.entries.len(), 4);
}

#[test]
fn csv_multiline_descriptions_keep_every_listing() {
    let csv = "id,description,amenities\n\
               1,\"Nice flat\nnear the sea\",\"[\"\"Wifi\"\",\"\"Pool\"\"]\"\n\
               2,Cozy,\"[\"\"Wifi\"\"]\"\n";
    let (_dir, path) = temp_file("multiline.csv", csv);

    let ingested = ingest::read_list_column(&path, 2, false).unwrap();
    assert_eq!(
        ingested.entries,
        vec![("Pool".to_string(), 1), ("Wifi".to_string(), 2)]
    );
    assert!(ingested.skipped.is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ingest::read_lines(&dir.path().join("absent.txt")).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn engine_config_loads_from_json_file() {
    let (_dir, path) = temp_file(
        "engine.json",
        r#"{
            "fuzzy": { "max_edits": 1, "mode": "prefix" },
            "infix": { "granularity": "token" },
            "next_term": { "order": 2 },
            "normalizer": { "stop_words": "english" }
        }"#,
    );
    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.fuzzy.max_edits, 1);
    assert_eq!(config.fuzzy.mode, MatchMode::Prefix);
    assert!(config.fuzzy.transpositions);
    assert_eq!(config.infix.granularity, Granularity::Token);
    assert_eq!(config.next_term.order, 2);

    let engine = SuggestionEngine::new(config).unwrap();
    engine.build("x", vec![("wifi router", 1)]).unwrap();
    assert!(engine.lookup_infix("x", "ifi", 5).unwrap().is_empty());
    assert_eq!(engine.lookup_infix("x", "rou", 5).unwrap().len(), 1);
}

#[test]
fn invalid_config_file_is_rejected() {
    let (_dir, path) = temp_file("engine.json", r#"{ "fuzzy": { "max_edits": 7 } }"#);
    assert!(EngineConfig::load(&path).is_err());
}
