//! End-to-end behavior of the engine façade on realistic vocabularies.

use super::common::{amenities_engine, hotel_engine, hotel_vocabulary};
use suggestor::{
    EngineConfig, MatchMode, NormalizerKind, Query, StopWords, SuggestError, SuggestionEngine,
    Suggestions,
};

fn terms<T, F: Fn(&T) -> &str>(items: &[T], f: F) -> Vec<&str> {
    items.iter().map(f).collect()
}

// ============================================================================
// PREFIX
// ============================================================================

#[test]
fn prefix_ranks_by_weight() {
    let engine = amenities_engine();
    let hits = engine.lookup_prefix("amenities", "wi", 5).unwrap();
    assert_eq!(terms(&hits, |c| c.term.as_str()), vec!["wifi", "wifi router"]);
    assert_eq!(hits[0].weight, 10);
}

#[test]
fn prefix_with_no_match_is_empty() {
    let engine = amenities_engine();
    assert!(engine.lookup_prefix("amenities", "zz", 5).unwrap().is_empty());
}

#[test]
fn empty_prefix_ranks_whole_vocabulary() {
    let engine = hotel_engine();
    let hits = engine.lookup_prefix("hotels", "", 3).unwrap();
    assert_eq!(
        terms(&hits, |c| c.term.as_str()),
        vec!["wifi", "free wifi", "parking"]
    );
}

#[test]
fn prefix_is_case_sensitive() {
    let engine = hotel_engine();
    let hits = engine.lookup_prefix("hotels", "Caf", 5).unwrap();
    assert_eq!(terms(&hits, |c| c.term.as_str()), vec!["Café Central"]);
    let hits = engine.lookup_prefix("hotels", "caf", 5).unwrap();
    assert_eq!(terms(&hits, |c| c.term.as_str()), vec!["café"]);
}

#[test]
fn k_zero_returns_nothing_everywhere() {
    let engine = hotel_engine();
    assert!(engine.lookup_prefix("hotels", "p", 0).unwrap().is_empty());
    assert!(engine.lookup_fuzzy("hotels", "pool", 0, 1).unwrap().is_empty());
    assert!(engine.lookup_infix("hotels", "oo", 0).unwrap().is_empty());
    assert!(engine.predict_next("hotels", "free", 0).unwrap().is_empty());
}

// ============================================================================
// FUZZY
// ============================================================================

#[test]
fn fuzzy_corrects_typos() {
    let engine = amenities_engine();
    let hits = engine.lookup_fuzzy("amenities", "parkng", 5, 2).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!((hits[0].term.as_str(), hits[0].weight, hits[0].distance), ("parking", 8, 1));
}

#[test]
fn fuzzy_prefers_closer_matches() {
    let engine = hotel_engine();
    let hits = engine.lookup_fuzzy("hotels", "pol", 5, 1).unwrap();
    assert_eq!(terms(&hits, |c| c.term.as_str()), vec!["pool"]);

    let hits = engine.lookup_fuzzy("hotels", "sana", 5, 2).unwrap();
    assert_eq!(terms(&hits, |c| c.term.as_str()), vec!["sauna", "spa"]);
    assert_eq!(hits[0].distance, 1);
    assert_eq!(hits[1].distance, 2);
}

#[test]
fn fuzzy_radius_above_maximum_is_rejected() {
    let engine = amenities_engine();
    let err = engine.lookup_fuzzy("amenities", "wifi", 5, 9).unwrap_err();
    assert!(matches!(err, SuggestError::InvalidParameter { name: "max_edits", .. }));
}

#[test]
fn fuzzy_prefix_mode_completes_while_typing() {
    let mut config = EngineConfig::default();
    config.fuzzy.mode = MatchMode::Prefix;
    let engine = SuggestionEngine::new(config).unwrap();
    engine.build("hotels", hotel_vocabulary()).unwrap();

    let hits = engine.lookup_fuzzy("hotels", "aiport", 3, 1).unwrap();
    assert_eq!(terms(&hits, |c| c.term.as_str()), vec!["airport shuttle"]);
    assert_eq!(hits[0].distance, 1);
}

// ============================================================================
// INFIX
// ============================================================================

#[test]
fn infix_reports_character_spans() {
    let engine = amenities_engine();
    let hits = engine.lookup_infix("amenities", "fi", 5).unwrap();
    let rows: Vec<(&str, usize, usize)> = hits
        .iter()
        .map(|h| (h.term.as_str(), h.span_start, h.span_end))
        .collect();
    assert_eq!(rows, vec![("wifi", 2, 4), ("wifi router", 2, 4)]);
}

#[test]
fn infix_spans_count_characters_not_bytes() {
    let engine = hotel_engine();
    let hits = engine.lookup_infix("hotels", "é C", 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].term, "Café Central");
    assert_eq!((hits[0].span_start, hits[0].span_end), (3, 6));
    assert_eq!(hits[0].matched(), "é C");
    assert_eq!(hits[0].highlight("<", ">"), "Caf<é C>entral");
}

#[test]
fn infix_finds_inner_words() {
    let engine = hotel_engine();
    let hits = engine.lookup_infix("hotels", "parking", 5).unwrap();
    assert_eq!(
        terms(&hits, |c| c.term.as_str()),
        vec!["parking", "free parking", "valet parking"]
    );
    assert_eq!(hits[1].span_start, 5);
}

// ============================================================================
// NEXT TERM
// ============================================================================

#[test]
fn next_term_from_vocabulary_phrases() {
    let engine = hotel_engine();
    let hits = engine.predict_next("hotels", "free", 5).unwrap();
    // "free wifi" (95) outweighs "free parking" (60).
    assert_eq!(terms(&hits, |p| p.token.as_str()), vec!["wifi", "parking"]);
    assert_eq!(hits[0].frequency, 95);
}

#[test]
fn next_term_backs_off_for_unseen_context() {
    let engine = amenities_engine();
    let hits = engine.predict_next("amenities", "nothing like this", 2).unwrap();
    // Unigrams: wifi 15, parking 8, router 5.
    assert_eq!(terms(&hits, |p| p.token.as_str()), vec!["wifi", "parking"]);
}

#[test]
fn complete_next_filters_the_word_in_progress() {
    let engine = hotel_engine();
    let hits = engine.complete_next("hotels", "free p", 5).unwrap();
    assert_eq!(terms(&hits, |p| p.token.as_str()), vec!["parking"]);

    let hits = engine.complete_next("hotels", "free ", 5).unwrap();
    assert_eq!(terms(&hits, |p| p.token.as_str()), vec!["wifi", "parking"]);
}

#[test]
fn corpus_trains_next_term_instead_of_terms() {
    let engine = SuggestionEngine::default();
    let corpus = vec![
        ("the room has free breakfast".to_string(), 3),
        ("the room has a view".to_string(), 1),
    ];
    engine
        .build_with_corpus("hotels", hotel_vocabulary(), corpus)
        .unwrap();
    let hits = engine.predict_next("hotels", "room has", 5).unwrap();
    assert_eq!(terms(&hits, |p| p.token.as_str()), vec!["free", "a"]);
    // Completion still comes from the vocabulary.
    let hits = engine.lookup_prefix("hotels", "free", 5).unwrap();
    assert_eq!(hits[0].term, "free wifi");
}

#[test]
fn stop_words_are_dropped_from_context() {
    let mut config = EngineConfig::default();
    config.normalizer.stop_words = StopWords::English;
    let engine = SuggestionEngine::new(config).unwrap();
    engine
        .build_with_corpus(
            "notes",
            vec![("pool", 1)],
            vec![("the pool is heated".to_string(), 1)],
        )
        .unwrap();
    let hits = engine.predict_next("notes", "pool is", 1).unwrap();
    assert_eq!(hits[0].token, "heated");
}

#[test]
fn whitespace_normalizer_keeps_case() {
    let mut config = EngineConfig::default();
    config.normalizer.kind = NormalizerKind::Whitespace;
    let engine = SuggestionEngine::new(config).unwrap();
    engine
        .build("x", vec![("Free WiFi", 2), ("free parking", 1)])
        .unwrap();
    let hits = engine.predict_next("x", "Free", 5).unwrap();
    assert_eq!(terms(&hits, |p| p.token.as_str()), vec!["WiFi"]);
}

// ============================================================================
// DISPATCH AND REGISTRY
// ============================================================================

#[test]
fn query_enum_round_trips_through_json() {
    let engine = amenities_engine();
    let query: Query =
        serde_json::from_str(r#"{"strategy":"fuzzy","text":"wfii","k":3,"max_edits":1}"#).unwrap();
    match engine.lookup("amenities", &query).unwrap() {
        Suggestions::Fuzzy(hits) => assert_eq!(hits[0].term, "wifi"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn unknown_index_names_the_index() {
    let engine = amenities_engine();
    let err = engine.lookup_infix("rooms", "fi", 3).unwrap_err();
    assert_eq!(err.to_string(), SuggestError::UnknownIndex("rooms".into()).to_string());
    assert!(err.to_string().contains("rooms"));
}

#[test]
fn independent_names_do_not_interfere() {
    let engine = amenities_engine();
    engine.build("rooms", vec![("suite", 4), ("single", 9)]).unwrap();
    assert_eq!(engine.names(), vec!["amenities", "rooms"]);
    assert!(engine.lookup_prefix("rooms", "wi", 5).unwrap().is_empty());
    assert_eq!(engine.lookup_prefix("amenities", "wi", 5).unwrap().len(), 2);
}

#[test]
fn rebuild_with_same_input_is_idempotent() {
    let engine = hotel_engine();
    let before = engine.lookup_prefix("hotels", "", 50).unwrap();
    let report = engine.build("hotels", hotel_vocabulary()).unwrap();
    assert_eq!(report.terms, hotel_vocabulary().len());
    assert_eq!(engine.lookup_prefix("hotels", "", 50).unwrap(), before);
}

#[test]
fn bad_observations_are_reported_not_fatal() {
    let engine = SuggestionEngine::default();
    let report = engine
        .build("x", vec![("wifi", 3), ("pool", -1), ("", 4), ("wifi", 2)])
        .unwrap();
    assert_eq!((report.accepted, report.rejected, report.terms), (2, 2, 1));
    assert_eq!(engine.lookup_prefix("x", "w", 1).unwrap()[0].weight, 5);
}

#[test]
fn empty_vocabulary_answers_empty() {
    let engine = SuggestionEngine::default();
    engine.build("empty", Vec::<(String, i64)>::new()).unwrap();
    assert!(engine.lookup_prefix("empty", "", 5).unwrap().is_empty());
    assert!(engine.lookup_fuzzy("empty", "a", 5, 2).unwrap().is_empty());
    assert!(engine.lookup_infix("empty", "", 5).unwrap().is_empty());
    assert!(engine.predict_next("empty", "", 5).unwrap().is_empty());
}
