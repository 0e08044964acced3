//! Batch runs over a titles file, with and without the semantic fallback

use anyhow::Result;
use iconmatch_lib::application::read_titles;
use iconmatch_lib::matching::fallback::StaticResolver;
use iconmatch_lib::matching::{BatchRunner, Confidence, KeywordMatcher, MappingStore};
use iconmatch_tests::MappingDirFixture;
use std::time::Duration;

const TITLES: &str = "\
הציפור ששכחה לעוף

Doghouse Blues
   Sunflower   
Advanced Calculus
Lullaby
Haunted
";

#[tokio::test]
async fn batch_counts_each_tier() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let file = fixture.write_raw("titles.txt", TITLES)?;
    let titles = read_titles(&file)?;
    assert_eq!(titles.len(), 6);
    assert_eq!(titles[2], "Sunflower");

    let snapshot = MappingStore::new(fixture.source()).try_load("he")?;
    let outcome = BatchRunner::new(KeywordMatcher::default())
        .run(titles, &snapshot)
        .await;

    assert_eq!(outcome.stats.exact, 1);
    assert_eq!(outcome.stats.partial, 2);
    assert_eq!(outcome.stats.none, 3);
    assert_eq!(outcome.stats.total(), 6);
    assert!((outcome.stats.percentage(outcome.stats.assignable()) - 50.0).abs() < 1e-9);

    let assignments: Vec<(&str, &str)> = outcome.assignments().collect();
    assert_eq!(
        assignments,
        vec![
            ("הציפור ששכחה לעוף", "mdi:bird"),
            ("Sunflower", "mdi:flower"),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn semantic_answers_must_name_a_mapped_keyword() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let snapshot = MappingStore::new(fixture.source()).try_load("he")?;

    let resolver = StaticResolver::new()
        .with_answer("Advanced Calculus", " moon ")
        .with_answer("Lullaby", "dog")
        .with_answer("Haunted", "ghost");
    let runner = BatchRunner::new(KeywordMatcher::default())
        .with_fallback(resolver, Duration::from_millis(1));

    let outcome = runner
        .run(["Advanced Calculus", "Lullaby", "Haunted", "Blue Moon"], &snapshot)
        .await;

    let confidences: Vec<Confidence> = outcome
        .entries
        .iter()
        .map(|entry| entry.result.confidence)
        .collect();
    assert_eq!(
        confidences,
        vec![
            Confidence::Semantic,
            Confidence::None,
            Confidence::None,
            Confidence::Exact,
        ]
    );
    assert_eq!(
        outcome.entries[0].result.external_id.as_deref(),
        Some("mdi:moon-waning-crescent")
    );
    // Rejected answers leave no keyword behind
    assert_eq!(outcome.entries[1].result.keyword, None);

    // The exact match never reaches the resolver
    assert_eq!(runner.resolver().map(StaticResolver::calls), Some(3));
    assert_eq!(outcome.unresolved().collect::<Vec<_>>(), vec!["Lullaby", "Haunted"]);
    Ok(())
}

#[tokio::test]
async fn failing_resolver_leaves_titles_unmatched() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let snapshot = MappingStore::new(fixture.source()).try_load("he")?;
    let runner = BatchRunner::new(KeywordMatcher::default())
        .with_fallback(StaticResolver::failing(), Duration::ZERO);

    let outcome = runner.run(["Advanced Calculus", "והירח"], &snapshot).await;
    assert_eq!(outcome.stats.none, 1);
    assert_eq!(outcome.stats.exact, 1);
    assert_eq!(runner.resolver().map(StaticResolver::calls), Some(1));
    Ok(())
}
