use super::*;

fn animals() -> SynonymTable {
    SynonymTable::new()
        .with("dog", ["כלב", "puppy"])
        .with("moon", ["ירח", "lunar"])
        .with("bird", ["ציפור", "birdsong"])
}

// ============================================================================
// Exact tier
// ============================================================================

#[test]
fn test_hebrew_prefix_stripped_exact_match() {
    let table = SynonymTable::new().with("ציפור", ["ציפור"]);
    let result = KeywordMatcher::default().match_title("הציפור ששכחה לעוף", &table);

    assert_eq!(result.keyword.as_deref(), Some("ציפור"));
    assert_eq!(result.confidence, Confidence::Exact);
    assert_eq!(result.search_terms[0], "הציפור ששכחה לעוף");
}

#[test]
fn test_exact_synonym_match_is_case_and_punctuation_insensitive() {
    let result = KeywordMatcher::default().match_title("Puppy!", &animals());
    assert_eq!(result.keyword.as_deref(), Some("dog"));
    assert_eq!(result.confidence, Confidence::Exact);
}

#[test]
fn test_exact_match_beats_longer_fuzzy_overlap() {
    // "moonlight" fuzzy-overlaps a long synonym of the first keyword,
    // but "ירח" is an exact token hit on a later keyword.
    let table = SynonymTable::new()
        .with("nocturne", ["moonlight serenade extended"])
        .with("moon", ["ירח"]);

    let result = KeywordMatcher::default().match_title("Moonlight Serenade ירח", &table);
    assert_eq!(result.keyword.as_deref(), Some("moon"));
    assert_eq!(result.confidence, Confidence::Exact);
}

#[test]
fn test_shared_synonym_first_keyword_wins() {
    let table = SynonymTable::new()
        .with("moon", ["night"])
        .with("star", ["night"]);

    let result = KeywordMatcher::default().match_title("Night", &table);
    assert_eq!(result.keyword.as_deref(), Some("moon"));
}

// ============================================================================
// Fuzzy tier
// ============================================================================

#[test]
fn test_partial_match_when_synonym_contains_token() {
    let result = KeywordMatcher::default().match_title("Song of the Birds", &animals());
    // the full title contains "bird" and "birds" sits inside "birdsong"
    assert_eq!(result.keyword.as_deref(), Some("bird"));
    assert_eq!(result.confidence, Confidence::Partial);
}

#[test]
fn test_partial_match_when_token_contains_keyword() {
    let result = KeywordMatcher::default().match_title("Doghouse Blues", &animals());
    assert_eq!(result.keyword.as_deref(), Some("dog"));
    assert_eq!(result.confidence, Confidence::Partial);
}

#[test]
fn test_longer_overlap_wins() {
    let table = SynonymTable::new()
        .with("sun", ["sun"])
        .with("flower", ["sunflower fields"]);

    // "sun" scores 9 inside "sunflower"; "sunflower fields" scores 16
    let result = KeywordMatcher::default().match_title("Sunflower", &table);
    assert_eq!(result.keyword.as_deref(), Some("flower"));
    assert_eq!(result.confidence, Confidence::Partial);
}

#[test]
fn test_equal_scores_keep_first_keyword() {
    // Both keywords are contained in the same token; score is the token length
    let table = SynonymTable::new()
        .with("rain", Vec::<String>::new())
        .with("bow", Vec::<String>::new());

    let result = KeywordMatcher::default().match_title("rainbow", &table);
    assert_eq!(result.keyword.as_deref(), Some("rain"));
    assert_eq!(result.confidence, Confidence::Partial);
}

#[test]
fn test_empty_synonyms_do_not_match_everything() {
    let table = SynonymTable::new().with("dog", ["", "!!"]);
    let result = KeywordMatcher::default().match_title("Advanced Calculus", &table);
    assert_eq!(result.keyword, None);
}

// ============================================================================
// No match
// ============================================================================

#[test]
fn test_no_match_returns_none() {
    let table = SynonymTable::new()
        .with("dog", ["כלב", "puppy"])
        .with("moon", ["ירח", "lunar"]);

    let result = KeywordMatcher::default().match_title("Advanced Calculus", &table);
    assert_eq!(result.keyword, None);
    assert_eq!(result.external_id, None);
    assert_eq!(result.confidence, Confidence::None);
    assert_eq!(
        result.search_terms,
        vec!["advanced calculus", "advanced", "calculus"]
    );
}

#[test]
fn test_empty_title_is_none_not_error() {
    let matcher = KeywordMatcher::default();
    for title in ["", "   ", "?!"] {
        let result = matcher.match_title(title, &animals());
        assert_eq!(result.confidence, Confidence::None);
        assert!(result.search_terms.is_empty());
    }
}

#[test]
fn test_empty_table_is_none() {
    let result = KeywordMatcher::default().match_title("dog", &SynonymTable::new());
    assert_eq!(result.confidence, Confidence::None);
}

// ============================================================================
// External id resolution
// ============================================================================

#[test]
fn test_unmapped_keyword_keeps_null_external_id() {
    let icons = IconMapping::new().with("moon", "mdi:moon-waning-crescent");
    let result = KeywordMatcher::default()
        .match_title("My Dog", &animals())
        .with_external_id(&icons);

    assert_eq!(result.keyword.as_deref(), Some("dog"));
    assert_eq!(result.external_id, None);
}

#[test]
fn test_mapped_keyword_resolves_external_id() {
    let icons = IconMapping::new().with("moon", "mdi:moon-waning-crescent");
    let result = KeywordMatcher::default()
        .match_title("ירח של חורף", &animals())
        .with_external_id(&icons);

    assert_eq!(result.external_id.as_deref(), Some("mdi:moon-waning-crescent"));
}

#[test]
fn test_external_id_implies_keyword() {
    let icons = IconMapping::new()
        .with("dog", "mdi:dog")
        .with("moon", "mdi:moon")
        .with("bird", "mdi:bird");
    let matcher = KeywordMatcher::default();
    let titles = [
        "Dog Days",
        "Advanced Calculus",
        "",
        "הירח",
        "וציפור",
        "birdsong at dawn",
    ];

    for title in titles {
        let result = matcher.match_title(title, &animals()).with_external_id(&icons);
        if result.external_id.is_some() {
            assert!(result.keyword.is_some(), "id without keyword for {:?}", title);
        }
    }
}

#[test]
fn test_match_result_serializes_lowercase_confidence() {
    let json = serde_json::to_value(MatchResult::none(vec!["x".into()])).unwrap();
    assert_eq!(json["confidence"], "none");
    assert!(json["keyword"].is_null());
}
