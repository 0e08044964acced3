use super::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Source whose tables can be swapped between loads
struct SwappableSource {
    synonyms: Mutex<SynonymTable>,
    icons: Mutex<IconMapping>,
    loads: AtomicUsize,
}

impl SwappableSource {
    fn new(synonyms: SynonymTable, icons: IconMapping) -> Self {
        Self {
            synonyms: Mutex::new(synonyms),
            icons: Mutex::new(icons),
            loads: AtomicUsize::new(0),
        }
    }
}

impl MappingSource for SwappableSource {
    fn load_synonyms(&self, _language: &str) -> Result<SynonymTable, MappingError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.synonyms.lock().unwrap().clone())
    }

    fn load_icons(&self, _language: &str) -> Result<IconMapping, MappingError> {
        Ok(self.icons.lock().unwrap().clone())
    }
}

#[test]
fn test_snapshot_is_cached_until_reload() {
    let store = MappingStore::new(SwappableSource::new(
        SynonymTable::new().with("dog", ["כלב"]),
        IconMapping::new(),
    ));

    store.snapshot("he");
    store.snapshot("he");
    assert_eq!(store.source().loads.load(Ordering::SeqCst), 1);

    store.reload("he");
    assert_eq!(store.source().loads.load(Ordering::SeqCst), 2);
}

#[test]
fn test_reload_replaces_without_touching_held_snapshot() {
    let store = MappingStore::new(SwappableSource::new(
        SynonymTable::new().with("dog", ["כלב"]),
        IconMapping::new(),
    ));

    let before = store.snapshot("he");
    *store.source().synonyms.lock().unwrap() =
        SynonymTable::new().with("dog", ["כלב"]).with("moon", ["ירח"]);
    *store.source().icons.lock().unwrap() = IconMapping::new().with("moon", "mdi:moon");
    let after = store.reload("he");

    assert_eq!(before.synonyms().len(), 1);
    assert!(before.icons().is_empty());
    assert_eq!(after.synonyms().len(), 2);
    assert_eq!(store.snapshot("he").icons().get("moon"), Some("mdi:moon"));
}

#[test]
fn test_reload_icons_keeps_synonyms() {
    let store = MappingStore::new(SwappableSource::new(
        SynonymTable::new().with("dog", ["כלב"]),
        IconMapping::new(),
    ));
    store.snapshot("he");

    *store.source().icons.lock().unwrap() = IconMapping::new().with("dog", "mdi:dog");
    let snapshot = store.reload_icons("he");

    assert_eq!(store.source().loads.load(Ordering::SeqCst), 1);
    assert_eq!(snapshot.icons().get("dog"), Some("mdi:dog"));
    assert_eq!(snapshot.coverage().mapped, 1);
}

#[test]
fn test_unknown_language_degrades_to_empty() {
    let store = MappingStore::new(InMemorySource::new());
    let snapshot = store.snapshot("he");

    assert!(snapshot.synonyms().is_empty());
    assert_eq!(snapshot.coverage().mapped, 0);

    let matcher = KeywordMatcher::default();
    let result = snapshot.match_title(&matcher, "anything at all");
    assert_eq!(result.confidence, crate::matching::Confidence::None);
}

#[test]
fn test_try_load_reports_errors() {
    let store = MappingStore::new(InMemorySource::new());
    let err = store.try_load("he").unwrap_err();
    assert!(matches!(err, MappingError::UnknownLanguage { ref language } if language == "he"));
}

#[test]
fn test_snapshot_match_resolves_ids() {
    let source = InMemorySource::new().with_language(
        "he",
        SynonymTable::new().with("dog", ["כלב"]).with("cat", ["חתול"]),
        IconMapping::new().with("dog", "mdi:dog"),
    );
    let snapshot = MappingStore::new(source).snapshot("he");
    let matcher = KeywordMatcher::default();

    let dog = snapshot.match_title(&matcher, "הכלב שלי");
    assert_eq!(dog.external_id.as_deref(), Some("mdi:dog"));

    let cat = snapshot.match_title(&matcher, "חתול רחוב");
    assert_eq!(cat.keyword.as_deref(), Some("cat"));
    assert_eq!(cat.external_id, None);
    assert_eq!(snapshot.coverage().unmapped, vec!["cat"]);
    assert_eq!(snapshot.available_keywords(), vec!["dog", "cat"]);
}

// ============================================================================
// JSON directory source
// ============================================================================

#[test]
fn test_json_directory_source_reads_both_tables() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("keywords_he.json"),
        r#"{"bird": ["ציפור"], "moon": ["ירח"]}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("icons_he.json"), r#"{"bird": "mdi:bird"}"#).unwrap();

    let store = MappingStore::new(JsonDirectorySource::new(dir.path()));
    let snapshot = store.try_load("he").unwrap();

    assert_eq!(snapshot.available_keywords(), vec!["bird", "moon"]);
    assert_eq!(snapshot.icons().get("bird"), Some("mdi:bird"));
}

#[test]
fn test_json_directory_source_missing_and_malformed_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("keywords_he.json"), "{not json").unwrap();

    let source = JsonDirectorySource::new(dir.path());
    assert!(matches!(
        source.load_synonyms("he"),
        Err(MappingError::Parse { .. })
    ));
    assert!(matches!(source.load_icons("he"), Err(MappingError::Read { .. })));

    // Lenient path still yields a usable, empty snapshot
    let snapshot = MappingStore::new(source).snapshot("he");
    assert!(snapshot.synonyms().is_empty());
    assert!(snapshot.icons().is_empty());
}
