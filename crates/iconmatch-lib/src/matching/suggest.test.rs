use super::*;

fn weather() -> SynonymTable {
    SynonymTable::new()
        .with("rain", ["גשם", "rainy"])
        .with("rainbow", ["קשת"])
        .with("storm", ["סערה", "thunderstorm"])
        .with("sun", ["שמש", "sunny"])
}

#[test]
fn test_overlap_relevance_ratio() {
    assert_eq!(overlap_relevance("rain", "rain"), Some(100.0));
    assert_eq!(overlap_relevance("rainbow", "rain"), Some(100.0 * 4.0 / 7.0));
    assert_eq!(overlap_relevance("bow", "rain"), None);
    assert_eq!(overlap_relevance("", ""), None);
}

#[test]
fn test_suggestions_ranked_descending() {
    let icons = IconMapping::new().with("rainbow", "mdi:looks");
    let suggestions = KeywordMatcher::default().suggest("Rainbow Storm", &weather(), &icons, 10);

    let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();
    // rainbow and storm are exact tokens (100); rain is 4/7 of "rainbow"
    assert_eq!(keywords, vec!["rainbow", "storm", "rain"]);
    assert_eq!(suggestions[0].relevance, 100.0);
    assert_eq!(suggestions[0].external_id.as_deref(), Some("mdi:looks"));
    assert_eq!(suggestions[1].external_id, None);

    for pair in suggestions.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
}

#[test]
fn test_suggestion_limit_is_respected() {
    let table = SynonymTable::new()
        .with("a1", ["xxa"])
        .with("b2", ["xxb"])
        .with("c3", ["xxc"])
        .with("d4", ["xxd"])
        .with("e5", ["xxe"]);

    let suggestions = KeywordMatcher::default().suggest("xx", &table, &IconMapping::new(), 3);
    assert_eq!(suggestions.len(), 3);
    // All tie at 2/3: table order survives
    let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["a1", "b2", "c3"]);
    for s in &suggestions {
        assert!(s.relevance > 0.0 && s.relevance <= 100.0);
    }
}

#[test]
fn test_no_overlap_yields_no_suggestions() {
    let table = SynonymTable::new()
        .with("dog", ["כלב", "puppy"])
        .with("moon", ["ירח", "lunar"]);

    let suggestions =
        KeywordMatcher::default().suggest("Advanced Calculus", &table, &IconMapping::new(), 3);
    assert!(suggestions.is_empty());
}

#[test]
fn test_zero_limit_and_empty_title() {
    let matcher = KeywordMatcher::default();
    assert!(matcher.suggest("rain", &weather(), &IconMapping::new(), 0).is_empty());
    assert!(matcher.suggest("", &weather(), &IconMapping::new(), 3).is_empty());
}
