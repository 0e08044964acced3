use super::*;
use crate::matching::{IconMapping, KeywordMatcher, SynonymTable};

fn snapshot() -> MappingSnapshot {
    MappingSnapshot::new(
        "he",
        SynonymTable::new()
            .with("dog", ["כלב"])
            .with("math", ["מתמטיקה"])
            .with("ghost", ["רוח"]),
        IconMapping::new()
            .with("dog", "mdi:dog")
            .with("math", "mdi:calculator")
            .with("ghost", ""),
    )
}

fn unmatched(title: &str) -> MatchResult {
    let result = snapshot().match_title(&KeywordMatcher::default(), title);
    assert_eq!(result.confidence, Confidence::None);
    result
}

#[tokio::test]
async fn test_valid_answer_becomes_semantic() {
    let resolver = StaticResolver::new().with_answer("Advanced Calculus", "math");
    let result = apply_semantic_fallback(
        unmatched("Advanced Calculus"),
        "Advanced Calculus",
        &resolver,
        &snapshot(),
    )
    .await;

    assert_eq!(result.keyword.as_deref(), Some("math"));
    assert_eq!(result.external_id.as_deref(), Some("mdi:calculator"));
    assert_eq!(result.confidence, Confidence::Semantic);
    assert_eq!(result.search_terms[0], "advanced calculus");
    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn test_hallucinated_keyword_is_rejected() {
    let resolver = StaticResolver::new().with_answer("Advanced Calculus", "algebra");
    let result = apply_semantic_fallback(
        unmatched("Advanced Calculus"),
        "Advanced Calculus",
        &resolver,
        &snapshot(),
    )
    .await;

    assert_eq!(result.keyword, None);
    assert_eq!(result.confidence, Confidence::None);
}

#[tokio::test]
async fn test_answer_without_icon_is_downgraded() {
    let resolver = StaticResolver::new().with_answer("Haunted House", "ghost");
    let result = apply_semantic_fallback(
        unmatched("Haunted House"),
        "Haunted House",
        &resolver,
        &snapshot(),
    )
    .await;

    assert_eq!(result.confidence, Confidence::None);
    assert_eq!(result.external_id, None);
}

#[tokio::test]
async fn test_resolver_failure_is_not_fatal() {
    let resolver = StaticResolver::failing();
    let result = apply_semantic_fallback(
        unmatched("Advanced Calculus"),
        "Advanced Calculus",
        &resolver,
        &snapshot(),
    )
    .await;

    assert_eq!(result.confidence, Confidence::None);
    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn test_confident_results_skip_the_resolver() {
    let resolver = StaticResolver::new().with_answer("הכלב", "math");
    let matched = snapshot().match_title(&KeywordMatcher::default(), "הכלב");
    let result = apply_semantic_fallback(matched, "הכלב", &resolver, &snapshot()).await;

    assert_eq!(result.keyword.as_deref(), Some("dog"));
    assert_eq!(result.confidence, Confidence::Exact);
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_no_resolver_answers_nothing() {
    let result = apply_semantic_fallback(
        unmatched("Advanced Calculus"),
        "Advanced Calculus",
        &NoResolver,
        &snapshot(),
    )
    .await;
    assert_eq!(result.confidence, Confidence::None);
}

#[test]
fn test_accept_trims_but_is_otherwise_literal() {
    let base = MatchResult::none(vec!["x".to_string()]);

    let trimmed = accept_semantic_answer(base.clone(), Some("  dog\n"), &snapshot());
    assert_eq!(trimmed.keyword.as_deref(), Some("dog"));

    let wrong_case = accept_semantic_answer(base.clone(), Some("Dog"), &snapshot());
    assert_eq!(wrong_case.confidence, Confidence::None);

    let empty = accept_semantic_answer(base, Some("   "), &snapshot());
    assert_eq!(empty.confidence, Confidence::None);
}
