//! Title matching against tables read from a mappings directory

use anyhow::Result;
use iconmatch_lib::matching::{Confidence, KeywordMatcher, MappingStore, NormalizerConfig};
use iconmatch_tests::MappingDirFixture;

fn matched(title: &str) -> Result<(Option<String>, Option<String>, Confidence)> {
    let fixture = MappingDirFixture::hebrew()?;
    let store = MappingStore::new(fixture.source());
    let snapshot = store.try_load("he")?;
    let result = snapshot.match_title(&KeywordMatcher::default(), title);
    Ok((result.keyword, result.external_id, result.confidence))
}

#[test]
fn prefix_stripped_hebrew_title_matches_exactly() -> Result<()> {
    let (keyword, id, confidence) = matched("הציפור ששכחה לעוף")?;
    assert_eq!(keyword.as_deref(), Some("bird"));
    assert_eq!(id.as_deref(), Some("mdi:bird"));
    assert_eq!(confidence, Confidence::Exact);
    Ok(())
}

#[test]
fn combined_prefix_is_stripped() -> Result<()> {
    let (keyword, _, confidence) = matched("והירח")?;
    assert_eq!(keyword.as_deref(), Some("moon"));
    assert_eq!(confidence, Confidence::Exact);
    Ok(())
}

#[test]
fn keyword_itself_matches_latin_token() -> Result<()> {
    let (keyword, id, confidence) = matched("Blue MOON!")?;
    assert_eq!(keyword.as_deref(), Some("moon"));
    assert_eq!(id.as_deref(), Some("mdi:moon-waning-crescent"));
    assert_eq!(confidence, Confidence::Exact);
    Ok(())
}

#[test]
fn exact_match_beats_earlier_partial_overlap() -> Result<()> {
    // "rain" overlaps first, but "rainbow" is an exact token
    let (keyword, _, confidence) = matched("Rainbow Connection")?;
    assert_eq!(keyword.as_deref(), Some("rainbow"));
    assert_eq!(confidence, Confidence::Exact);
    Ok(())
}

#[test]
fn equal_fuzzy_scores_keep_table_order() -> Result<()> {
    let (keyword, _, confidence) = matched("rainbows")?;
    assert_eq!(keyword.as_deref(), Some("rain"));
    assert_eq!(confidence, Confidence::Partial);
    Ok(())
}

#[test]
fn longer_overlap_wins_fuzzy_tier() -> Result<()> {
    let (keyword, id, confidence) = matched("Sunflower")?;
    assert_eq!(keyword.as_deref(), Some("flower"));
    assert_eq!(id.as_deref(), Some("mdi:flower"));
    assert_eq!(confidence, Confidence::Partial);
    Ok(())
}

#[test]
fn unmapped_keyword_is_still_returned() -> Result<()> {
    let (keyword, id, confidence) = matched("Doghouse Blues")?;
    assert_eq!(keyword.as_deref(), Some("dog"));
    assert_eq!(id, None);
    assert_eq!(confidence, Confidence::Partial);

    // Empty identifiers count as unmapped
    let (keyword, id, confidence) = matched("שיר לילה")?;
    assert_eq!(keyword.as_deref(), Some("night"));
    assert_eq!(id, None);
    assert_eq!(confidence, Confidence::Exact);
    Ok(())
}

#[test]
fn unrelated_title_has_no_match_or_suggestions() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let store = MappingStore::new(fixture.source());
    let snapshot = store.snapshot("he");
    let matcher = KeywordMatcher::default();

    let result = snapshot.match_title(&matcher, "Advanced Calculus");
    assert_eq!(result.keyword, None);
    assert_eq!(result.external_id, None);
    assert_eq!(result.confidence, Confidence::None);
    assert_eq!(
        result.search_terms,
        vec!["advanced calculus", "advanced", "calculus"]
    );
    assert!(snapshot.suggest(&matcher, "Advanced Calculus", 5).is_empty());
    Ok(())
}

#[test]
fn suggestions_rank_by_overlap_ratio() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let snapshot = MappingStore::new(fixture.source()).try_load("he")?;
    let matcher = KeywordMatcher::default();

    let suggestions = snapshot.suggest(&matcher, "rainbows", 3);
    let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["rainbow", "rain"]);
    assert!((suggestions[0].relevance - 87.5).abs() < 1e-9);
    assert!((suggestions[1].relevance - 50.0).abs() < 1e-9);
    assert_eq!(suggestions[0].external_id.as_deref(), Some("mdi:looks"));

    let truncated = snapshot.suggest(&matcher, "rainbows", 1);
    assert_eq!(truncated.len(), 1);
    assert_eq!(truncated[0].keyword, "rainbow");
    Ok(())
}

#[test]
fn latin_preset_reads_english_tables() -> Result<()> {
    let fixture = MappingDirFixture::new()?;
    fixture.write_keywords("en", r#"{"bird": ["sparrow"], "moon": ["lunar"]}"#)?;
    fixture.write_icons("en", &serde_json::json!({"bird": "mdi:bird"}))?;

    let snapshot = MappingStore::new(fixture.source()).try_load("en")?;
    let matcher = KeywordMatcher::new(NormalizerConfig::latin());

    let result = snapshot.match_title(&matcher, "The Sparrow's Song");
    assert_eq!(result.keyword.as_deref(), Some("bird"));
    assert_eq!(result.external_id.as_deref(), Some("mdi:bird"));
    Ok(())
}
