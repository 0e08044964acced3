use super::*;

#[test]
fn test_deserialize_preserves_document_order() {
    let json = r#"{"moon": ["ירח", "luna"], "dog": ["כלב"], "bird": []}"#;
    let table: SynonymTable = serde_json::from_str(json).unwrap();

    let keywords: Vec<&str> = table.keywords().collect();
    assert_eq!(keywords, vec!["moon", "dog", "bird"]);
    assert_eq!(table.synonyms("moon").unwrap(), ["ירח", "luna"]);
    assert_eq!(table.synonyms("bird").unwrap().len(), 0);
}

#[test]
fn test_deserialize_rejects_non_list_synonyms() {
    let json = r#"{"moon": "ירח"}"#;
    assert!(serde_json::from_str::<SynonymTable>(json).is_err());
}

#[test]
fn test_serialize_round_trips_order() {
    let table = SynonymTable::new()
        .with("zebra", ["stripes"])
        .with("apple", ["תפוח"]);
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"{"zebra":["stripes"],"apple":["תפוח"]}"#);
}

#[test]
fn test_insert_replaces_existing_keyword_in_place() {
    let mut table = SynonymTable::new().with("a1", ["x"]).with("b2", ["y"]);
    table.insert("a1", ["z"]);

    let keywords: Vec<&str> = table.keywords().collect();
    assert_eq!(keywords, vec!["a1", "b2"]);
    assert_eq!(table.synonyms("a1").unwrap(), ["z"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_overlapping_synonyms_reports_first_owner_first() {
    let table = SynonymTable::new()
        .with("moon", ["night", "ירח"])
        .with("star", ["night", "כוכב"])
        .with("night", ["dark"]);

    let shared = table.overlapping_synonyms();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].synonym, "night");
    assert_eq!(shared[0].keywords, vec!["moon", "star", "night"]);
}

#[test]
fn test_duplicate_synonyms_within_one_keyword_are_not_overlap() {
    let table = SynonymTable::new().with("dog", ["dog", "כלב", "כלב"]);
    assert!(table.overlapping_synonyms().is_empty());
}

#[test]
fn test_icon_mapping_treats_empty_ids_as_unmapped() {
    let icons = IconMapping::new()
        .with("dog", "mdi:dog")
        .with("moon", "")
        .with("star", "   ");

    assert_eq!(icons.get("dog"), Some("mdi:dog"));
    assert!(!icons.is_mapped("moon"));
    assert!(!icons.is_mapped("star"));
    assert!(!icons.is_mapped("cat"));
    assert_eq!(icons.len(), 3);
}

#[test]
fn test_icon_mapping_from_json() {
    let icons: IconMapping = serde_json::from_str(r#"{"dog": "mdi:dog"}"#).unwrap();
    assert_eq!(icons.get("dog"), Some("mdi:dog"));
}

#[test]
fn test_large_document_keeps_order_and_lookups() {
    let body: Vec<String> = (0..5000)
        .map(|i| format!("\"kw{i}\": [\"syn{i}\"]"))
        .collect();
    let json = format!("{{{}, \"kw0\": [\"replaced\"]}}", body.join(", "));

    let table: SynonymTable = serde_json::from_str(&json).unwrap();
    assert_eq!(table.len(), 5000);
    assert_eq!(table.keywords().next(), Some("kw0"));
    assert_eq!(table.keywords().last(), Some("kw4999"));
    assert_eq!(table.synonyms("kw0").unwrap(), ["replaced"]);
    assert_eq!(table.synonyms("kw2500").unwrap(), ["syn2500"]);
    assert!(table.contains_keyword("kw4999"));
    assert!(!table.contains_keyword("kw5000"));
}
