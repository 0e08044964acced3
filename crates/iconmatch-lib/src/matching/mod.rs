//! Title → keyword matching
//!
//! Normalization, the exact/fuzzy matcher, suggestion ranking, the mapping
//! store, the semantic fallback hook, and batch statistics.

pub mod batch;
pub mod fallback;
pub mod matcher;
pub mod normalize;
pub mod stats;
pub mod store;
pub mod suggest;
pub mod tables;

// Re-export main types for convenience
pub use batch::{BatchEntry, BatchOutcome, BatchRunner};
pub use fallback::{FallbackError, NoResolver, SemanticResolver, apply_semantic_fallback};
pub use matcher::{Confidence, KeywordMatcher, MatchResult};
pub use normalize::{Normalizer, NormalizerConfig, PrefixRule};
pub use stats::{BatchStats, CoverageStats};
pub use store::{
    InMemorySource, JsonDirectorySource, MappingError, MappingSnapshot, MappingSource, MappingStore,
};
pub use suggest::Suggestion;
pub use tables::{IconMapping, SharedSynonym, SynonymTable};
