use super::*;

#[test]
fn test_batch_of_sixty_one() {
    let tiers = std::iter::repeat_n(Confidence::Exact, 26)
        .chain(std::iter::repeat_n(Confidence::Partial, 32))
        .chain(std::iter::repeat_n(Confidence::None, 3));
    let stats: BatchStats = tiers.collect();

    assert_eq!(stats.total(), 61);
    assert_eq!(stats.semantic, 0);
    assert_eq!(stats.assignable(), 58);
    assert!((stats.percentage(stats.exact) - 100.0 * 26.0 / 61.0).abs() < 1e-9);
    assert!((stats.percentage(stats.assignable()) - 95.08).abs() < 0.01);
    assert!((stats.percentage(stats.none) - 4.92).abs() < 0.01);
}

#[test]
fn test_semantic_counts_as_assignable() {
    let mut stats = BatchStats::default();
    stats.record(Confidence::Semantic);
    stats.record(Confidence::None);

    assert_eq!(stats.count(Confidence::Semantic), 1);
    assert_eq!(stats.assignable(), 1);
    assert_eq!(stats.percentage(stats.semantic), 50.0);
}

#[test]
fn test_empty_batch_percentages_are_zero() {
    let stats = BatchStats::default();
    assert_eq!(stats.total(), 0);
    assert_eq!(stats.percentage(0), 0.0);
}

#[test]
fn test_coverage_lists_unmapped_in_table_order() {
    let synonyms = SynonymTable::new()
        .with("moon", ["ירח"])
        .with("dog", ["כלב"])
        .with("bird", ["ציפור"])
        .with("star", ["כוכב"]);
    let icons = IconMapping::new()
        .with("dog", "mdi:dog")
        .with("star", "")
        .with("orphan", "mdi:help");

    let coverage = CoverageStats::compute(&synonyms, &icons);
    assert_eq!(coverage.total, 4);
    assert_eq!(coverage.mapped, 1);
    assert_eq!(coverage.unmapped, vec!["moon", "bird", "star"]);
    assert_eq!(coverage.percentage_mapped(), 25.0);
}

#[test]
fn test_coverage_of_empty_tables() {
    let coverage = CoverageStats::compute(&SynonymTable::new(), &IconMapping::new());
    assert_eq!(coverage.total, 0);
    assert_eq!(coverage.mapped, 0);
    assert!(coverage.unmapped.is_empty());
    assert_eq!(coverage.percentage_mapped(), 0.0);
}
