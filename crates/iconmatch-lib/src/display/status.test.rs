use super::*;

fn result(keyword: Option<&str>, id: Option<&str>, confidence: Confidence) -> MatchResult {
    MatchResult {
        keyword: keyword.map(str::to_string),
        external_id: id.map(str::to_string),
        confidence,
        search_terms: Vec::new(),
    }
}

#[test]
fn test_format_match_variants() {
    let styling = StyleManager::new(false);
    let status = StatusDisplay::new(&styling);

    assert_eq!(
        status.format_match("Moon Song", &result(Some("moon"), Some("mdi:moon"), Confidence::Exact)),
        "✓ Moon Song: moon → mdi:moon [exact]"
    );
    assert_eq!(
        status.format_match("Doghouse", &result(Some("dog"), None, Confidence::Partial)),
        "! Doghouse: dog → (unmapped) [partial]"
    );
    assert_eq!(
        status.format_match("Calculus", &result(None, None, Confidence::None)),
        "✗ Calculus: no match [none]"
    );
}

#[test]
fn test_format_suggestion_marks_unmapped() {
    let styling = StyleManager::new(false);
    let status = StatusDisplay::new(&styling);
    let line = status.format_suggestion(&Suggestion {
        keyword: "rain".to_string(),
        external_id: None,
        relevance: 57.14,
    });

    assert!(line.contains("rain"));
    assert!(line.contains("57.1"));
    assert!(line.ends_with("(unmapped)"));
}
