use super::*;
use crate::matching::fallback::StaticResolver;
use crate::matching::{IconMapping, SynonymTable};
use std::time::Instant;

fn snapshot() -> MappingSnapshot {
    MappingSnapshot::new(
        "he",
        SynonymTable::new()
            .with("bird", ["ציפור"])
            .with("dog", ["כלב", "puppy"])
            .with("math", ["מתמטיקה"]),
        IconMapping::new()
            .with("bird", "mdi:bird")
            .with("math", "mdi:calculator"),
    )
}

#[tokio::test]
async fn test_batch_without_resolver() {
    let runner = BatchRunner::new(KeywordMatcher::default());
    let outcome = runner
        .run(
            ["הציפור ששכחה לעוף", "Doghouse", "Advanced Calculus"],
            &snapshot(),
        )
        .await;

    assert_eq!(outcome.entries.len(), 3);
    assert_eq!(outcome.stats.exact, 1);
    assert_eq!(outcome.stats.partial, 1);
    assert_eq!(outcome.stats.none, 1);
    assert_eq!(outcome.stats.assignable(), 2);

    let assignments: Vec<(&str, &str)> = outcome.assignments().collect();
    // "dog" has no icon, so only the bird title is assignable to an icon
    assert_eq!(assignments, vec![("הציפור ששכחה לעוף", "mdi:bird")]);

    let unresolved: Vec<&str> = outcome.unresolved().collect();
    assert_eq!(unresolved, vec!["Advanced Calculus"]);
}

#[tokio::test]
async fn test_batch_preserves_title_order() {
    let runner = BatchRunner::new(KeywordMatcher::default());
    let titles = vec!["c".to_string(), "Puppy".to_string(), "a b".to_string()];
    let outcome = runner.run(titles.clone(), &snapshot()).await;

    let processed: Vec<&str> = outcome.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(processed, vec!["c", "Puppy", "a b"]);
}

#[tokio::test]
async fn test_resolver_only_called_for_unmatched_titles() {
    let resolver = StaticResolver::new()
        .with_answer("Advanced Calculus", "math")
        .with_answer("Lullaby", "dog");
    let runner = BatchRunner::new(KeywordMatcher::default())
        .with_fallback(resolver, Duration::ZERO);

    let outcome = runner
        .run(["Advanced Calculus", "כלב", "Lullaby"], &snapshot())
        .await;

    assert_eq!(runner.resolver().map(StaticResolver::calls), Some(2));
    assert_eq!(outcome.stats.semantic, 1);
    assert_eq!(outcome.stats.exact, 1);
    // "dog" exists but has no icon: downgraded back to none
    assert_eq!(outcome.stats.none, 1);
    assert_eq!(outcome.stats.total(), 3);
}

#[tokio::test]
async fn test_resolver_failures_do_not_abort_batch() {
    let runner = BatchRunner::new(KeywordMatcher::default())
        .with_fallback(StaticResolver::failing(), Duration::ZERO);

    let outcome = runner
        .run(["Advanced Calculus", "Haunted", "ציפור"], &snapshot())
        .await;

    assert_eq!(outcome.entries.len(), 3);
    assert_eq!(outcome.stats.none, 2);
    assert_eq!(outcome.stats.exact, 1);
}

#[tokio::test]
async fn test_fixed_delay_follows_each_resolver_call() {
    let delay = Duration::from_millis(25);
    let runner = BatchRunner::new(KeywordMatcher::default())
        .with_fallback(StaticResolver::new(), delay);

    let started = Instant::now();
    runner
        .run(["Advanced Calculus", "Haunted", "ציפור"], &snapshot())
        .await;

    // Two unmatched titles, two delays; the exact match waits for nothing
    assert!(started.elapsed() >= delay * 2);
}

#[tokio::test]
async fn test_empty_table_skips_resolver() {
    let empty = MappingSnapshot::new("he", SynonymTable::new(), IconMapping::new());
    let runner = BatchRunner::new(KeywordMatcher::default())
        .with_fallback(StaticResolver::new(), Duration::ZERO);

    let outcome = runner.run(["anything"], &empty).await;
    assert_eq!(outcome.stats.none, 1);
    assert_eq!(runner.resolver().map(StaticResolver::calls), Some(0));
}
