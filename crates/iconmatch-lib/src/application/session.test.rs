use super::*;
use crate::matching::fallback::StaticResolver;
use crate::matching::{Confidence, IconMapping, InMemorySource, SynonymTable};
use std::time::{Duration, Instant};

fn session(fallback_delay_ms: u64) -> CommandSession<InMemorySource> {
    let source = InMemorySource::new().with_language(
        "he",
        SynonymTable::new()
            .with("bird", ["ציפור"])
            .with("math", ["מתמטיקה"]),
        IconMapping::new()
            .with("bird", "mdi:bird")
            .with("math", "mdi:calculator"),
    );
    let config = AppConfig {
        fallback_delay_ms,
        ..AppConfig::default()
    };
    CommandSession::with_source(config, source).unwrap()
}

#[test]
fn test_snapshot_uses_configured_language() {
    let session = session(0);
    assert_eq!(session.snapshot().language(), "he");
    assert_eq!(session.snapshot().synonyms().len(), 2);
}

#[tokio::test]
async fn test_plain_batch_runner_has_no_resolver() {
    let session = session(0);
    let runner = session.batch_runner();
    assert!(runner.resolver().is_none());

    let outcome = runner.run(["Advanced Calculus"], &session.snapshot()).await;
    assert_eq!(outcome.stats.none, 1);
}

#[tokio::test]
async fn test_resolver_runner_waits_configured_delay() {
    let session = session(40);
    let runner =
        session.batch_runner_with(StaticResolver::new().with_answer("Advanced Calculus", "math"));

    let started = Instant::now();
    let outcome = runner
        .run(["Advanced Calculus", "Haunted", "ציפור"], &session.snapshot())
        .await;

    // Two resolver calls, each followed by the configured pause
    assert!(started.elapsed() >= Duration::from_millis(80));
    assert_eq!(runner.resolver().map(StaticResolver::calls), Some(2));
    assert_eq!(outcome.entries[0].result.confidence, Confidence::Semantic);
    assert_eq!(
        outcome.entries[0].result.external_id.as_deref(),
        Some("mdi:calculator")
    );
}
