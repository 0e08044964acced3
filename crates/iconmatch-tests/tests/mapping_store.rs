//! Loading, caching and reloading mapping tables from disk

use anyhow::Result;
use iconmatch_lib::matching::{MappingError, MappingStore};
use iconmatch_tests::{HEBREW_KEYWORDS, MappingDirFixture, hebrew_icons};
use serde_json::json;

#[test]
fn snapshot_is_cached_until_reload() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let store = MappingStore::new(fixture.source());

    let first = store.snapshot("he");
    assert_eq!(first.synonyms().len(), 8);

    fixture.write_keywords("he", r#"{"bird": ["ציפור"]}"#)?;
    assert_eq!(store.snapshot("he").synonyms().len(), 8);

    let reloaded = store.reload("he");
    assert_eq!(reloaded.synonyms().len(), 1);
    assert_eq!(store.snapshot("he").synonyms().len(), 1);

    // Snapshots handed out earlier are unaffected
    assert_eq!(first.synonyms().len(), 8);
    Ok(())
}

#[test]
fn icons_reload_independently() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let store = MappingStore::new(fixture.source());
    assert_eq!(store.snapshot("he").coverage().mapped, 6);

    let mut icons = hebrew_icons();
    icons["dog"] = json!("mdi:dog");
    fixture.write_icons("he", &icons)?;
    // Changing keywords on disk must not leak into an icon-only reload
    fixture.write_keywords("he", r#"{"bird": ["ציפור"]}"#)?;

    let snapshot = store.reload_icons("he");
    assert_eq!(snapshot.synonyms().len(), 8);
    assert_eq!(snapshot.icons().get("dog"), Some("mdi:dog"));
    assert_eq!(snapshot.coverage().mapped, 7);
    Ok(())
}

#[test]
fn coverage_lists_unmapped_keywords_in_table_order() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let coverage = MappingStore::new(fixture.source()).snapshot("he").coverage();

    assert_eq!(coverage.total, 8);
    assert_eq!(coverage.mapped, 6);
    assert_eq!(coverage.unmapped, vec!["dog", "night"]);
    assert!((coverage.percentage_mapped() - 75.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn missing_files_degrade_to_empty_tables() -> Result<()> {
    let fixture = MappingDirFixture::new()?;
    let store = MappingStore::new(fixture.source());

    let snapshot = store.snapshot("he");
    assert!(snapshot.synonyms().is_empty());
    assert!(snapshot.icons().is_empty());
    assert!(snapshot.available_keywords().is_empty());

    assert!(matches!(
        store.try_load("he"),
        Err(MappingError::Read { .. })
    ));
    Ok(())
}

#[test]
fn malformed_json_is_a_parse_error() -> Result<()> {
    let fixture = MappingDirFixture::new()?;
    fixture.write_raw("keywords_he.json", "{\"bird\": [\"ציפור\"")?;
    fixture.write_icons("he", &hebrew_icons())?;
    let store = MappingStore::new(fixture.source());

    assert!(matches!(
        store.try_load("he"),
        Err(MappingError::Parse { .. })
    ));
    // The lenient path keeps the icons it could read
    let snapshot = store.reload("he");
    assert!(snapshot.synonyms().is_empty());
    assert_eq!(snapshot.icons().get("bird"), Some("mdi:bird"));
    Ok(())
}

#[test]
fn shared_synonyms_are_reported() -> Result<()> {
    let fixture = MappingDirFixture::new()?;
    fixture.write_keywords(
        "he",
        r#"{"moon": ["ירח", "לילה"], "night": ["לילה", "חושך"]}"#,
    )?;
    fixture.write_icons("he", &json!({}))?;

    let snapshot = MappingStore::new(fixture.source()).try_load("he")?;
    let shared = snapshot.synonyms().overlapping_synonyms();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].synonym, "לילה");
    assert_eq!(shared[0].keywords, vec!["moon", "night"]);
    Ok(())
}

#[test]
fn languages_are_cached_separately() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    fixture.write_keywords("en", r#"{"bird": ["sparrow"]}"#)?;
    fixture.write_icons("en", &json!({"bird": "mdi:bird"}))?;
    let store = MappingStore::new(fixture.source());

    assert_eq!(store.snapshot("he").synonyms().len(), 8);
    assert_eq!(store.snapshot("en").synonyms().len(), 1);
    assert_eq!(store.snapshot("en").language(), "en");
    Ok(())
}

#[test]
fn fixture_tables_load_under_any_language_code() -> Result<()> {
    let fixture = MappingDirFixture::new()?;
    fixture.write_keywords("iw", HEBREW_KEYWORDS)?;
    fixture.write_icons("iw", &hebrew_icons())?;

    let snapshot = MappingStore::new(fixture.source()).try_load("iw")?;
    let keywords: Vec<&str> = snapshot.synonyms().keywords().collect();
    assert_eq!(
        keywords,
        vec!["bird", "dog", "moon", "rain", "rainbow", "sun", "flower", "night"]
    );
    Ok(())
}
