use super::*;

fn hebrew() -> Normalizer {
    Normalizer::new(NormalizerConfig::hebrew())
}

// ============================================================================
// normalize
// ============================================================================

#[test]
fn test_normalize_lowercases_and_strips_punctuation() {
    let n = hebrew();
    assert_eq!(n.normalize("Rock-N-Roll!!"), "rocknroll");
    assert_eq!(n.normalize("The   Cat\tin\nthe Hat"), "the cat in the hat");
    assert_eq!(n.normalize("  (Live) "), "live");
}

#[test]
fn test_normalize_keeps_extended_range() {
    let n = hebrew();
    assert_eq!(n.normalize("שִׁיר, הַכֶּלֶב!"), "שִׁיר הַכֶּלֶב");
    assert_eq!(n.normalize("Moon ירח 2"), "moon ירח 2");
}

#[test]
fn test_latin_preset_keeps_letters_but_skips_morphology() {
    let n = Normalizer::new(NormalizerConfig::latin());
    assert_eq!(n.normalize("ירח!"), "ירח");
    assert_eq!(n.extract_search_terms("הכלב"), vec!["הכלב", "הכלב"]);
}

#[test]
fn test_normalize_empty_and_symbol_only() {
    let n = hebrew();
    assert_eq!(n.normalize(""), "");
    assert_eq!(n.normalize("  \t "), "");
    assert_eq!(n.normalize("?!-..."), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let n = hebrew();
    let samples = [
        "Hello, World!",
        "הציפור ששכחה לעוף",
        "  MiXeD   ירח   CaSe  ",
        "İstanbul Straße",
        "emoji 🐶 dog",
        "",
    ];
    for sample in samples {
        let once = n.normalize(sample);
        assert_eq!(n.normalize(&once), once, "not idempotent for {:?}", sample);
    }
}

// ============================================================================
// tokenize
// ============================================================================

#[test]
fn test_tokenize_drops_single_characters() {
    let n = hebrew();
    assert_eq!(n.tokenize("a dog & a cat"), vec!["dog", "cat"]);
    assert_eq!(n.tokenize("ב בית"), vec!["בית"]);
    assert!(n.tokenize("x y z").is_empty());
}

// ============================================================================
// extract_search_terms
// ============================================================================

#[test]
fn test_extract_terms_full_string_first() {
    let n = hebrew();
    let terms = n.extract_search_terms("Blue Moon");
    assert_eq!(terms, vec!["blue moon", "blue", "moon"]);
}

#[test]
fn test_extract_terms_empty_title() {
    let n = hebrew();
    assert!(n.extract_search_terms("").is_empty());
    assert!(n.extract_search_terms("!!!").is_empty());
}

#[test]
fn test_definite_article_prefix_stripped() {
    let n = hebrew();
    let terms = n.extract_search_terms("הציפור ששכחה לעוף");
    assert_eq!(terms[0], "הציפור ששכחה לעוף");
    assert!(terms.contains(&"הציפור".to_string()));
    assert!(terms.contains(&"ציפור".to_string()));
    assert!(terms.contains(&"ששכחה".to_string()));
    assert!(terms.contains(&"לעוף".to_string()));
}

#[test]
fn test_combined_prefix_yields_all_variants() {
    // וה + כלב: conjunction rule strips ו, combined rule strips וה
    let n = hebrew();
    let terms = n.extract_search_terms("והכלב");
    assert_eq!(terms, vec!["והכלב", "והכלב", "הכלב", "כלב"]);
}

#[test]
fn test_prefix_requires_minimum_remaining_length() {
    let n = hebrew();
    // ה + one letter: too short for the article rule
    let terms = n.extract_search_terms("הב");
    assert_eq!(terms, vec!["הב", "הב"]);

    // וה + two letters: conjunction applies (3 left), combined does not (2 left)
    let terms = n.extract_search_terms("והים");
    assert!(terms.contains(&"הים".to_string()));
    assert!(!terms.contains(&"ים".to_string()));
}

#[test]
fn test_prefix_rules_ignore_latin_tokens() {
    let n = Normalizer::new(NormalizerConfig {
        extended_range: Some(HEBREW_RANGE),
        prefix_rules: vec![PrefixRule::new("h", 2)],
    });
    let terms = n.extract_search_terms("house");
    assert_eq!(terms, vec!["house", "house"]);
}

#[test]
fn test_empty_prefix_rule_never_applies() {
    assert_eq!(PrefixRule::new("", 0).strip("anything"), None);
    assert_eq!(PrefixRule::new("ה", 2).strip("הבית"), Some("בית"));
}

#[test]
fn test_language_presets() {
    assert_eq!(
        NormalizerConfig::for_language("HE"),
        Some(NormalizerConfig::hebrew())
    );
    assert_eq!(
        NormalizerConfig::for_language("en"),
        Some(NormalizerConfig::latin())
    );
    assert_eq!(NormalizerConfig::for_language("fr"), None);
    for code in NormalizerConfig::KNOWN_LANGUAGES {
        assert!(NormalizerConfig::for_language(code).is_some());
    }
}
