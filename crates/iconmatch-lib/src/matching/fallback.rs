//! Semantic fallback tier
//!
//! When neither the exact nor the fuzzy tier finds a keyword, the caller may
//! ask an external collaborator (typically a language model) to pick one from
//! the available keywords. The answer is accepted only if it is one of those
//! keywords and has an icon identifier; anything else, including resolver
//! failures, leaves the title at [`Confidence::None`].

use super::matcher::{Confidence, MatchResult};
use super::store::MappingSnapshot;
use std::future::Future;
use thiserror::Error;
use tracing::{debug, warn};

/// Semantic resolver errors
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed resolver response: {0}")]
    MalformedResponse(String),

    #[error("Resolver unavailable: {0}")]
    Unavailable(String),
}

/// Picks a keyword for a title from a closed list
pub trait SemanticResolver: Send + Sync {
    /// Return one of `available_keywords`, or `None` when nothing fits
    fn resolve(
        &self,
        title: &str,
        available_keywords: &[String],
    ) -> impl Future<Output = Result<Option<String>, FallbackError>> + Send;
}

/// Resolver that never answers; the batch default
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl SemanticResolver for NoResolver {
    async fn resolve(
        &self,
        _title: &str,
        _available_keywords: &[String],
    ) -> Result<Option<String>, FallbackError> {
        Ok(None)
    }
}

/// Validate a resolver answer against the snapshot.
///
/// Surrounding whitespace is ignored; otherwise the answer must equal an
/// available keyword byte for byte and that keyword must have an identifier.
pub fn accept_semantic_answer(
    result: MatchResult,
    answer: Option<&str>,
    snapshot: &MappingSnapshot,
) -> MatchResult {
    let Some(answer) = answer.map(str::trim).filter(|a| !a.is_empty()) else {
        return result;
    };

    if !snapshot.synonyms().contains_keyword(answer) {
        warn!(
            answer,
            "semantic answer is not an available keyword, ignoring"
        );
        return result;
    }

    let Some(external_id) = snapshot.icons().get(answer) else {
        debug!(answer, "semantic answer has no icon mapping, ignoring");
        return result;
    };

    MatchResult {
        keyword: Some(answer.to_string()),
        external_id: Some(external_id.to_string()),
        confidence: Confidence::Semantic,
        search_terms: result.search_terms,
    }
}

/// Ask `resolver` about a title the matcher could not place.
///
/// Results that already carry a keyword are returned untouched, as are
/// results for snapshots without keywords.
pub async fn apply_semantic_fallback<R: SemanticResolver>(
    result: MatchResult,
    title: &str,
    resolver: &R,
    snapshot: &MappingSnapshot,
) -> MatchResult {
    if result.confidence != Confidence::None || snapshot.synonyms().is_empty() {
        return result;
    }

    let available = snapshot.available_keywords();
    match resolver.resolve(title, &available).await {
        Ok(answer) => accept_semantic_answer(result, answer.as_deref(), snapshot),
        Err(e) => {
            warn!(title, error = %e, "semantic fallback failed, treating as no match");
            result
        }
    }
}

/// Canned resolver answers keyed by title
#[cfg(any(test, feature = "test-utils"))]
pub use mock::StaticResolver;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use super::{FallbackError, SemanticResolver};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock resolver for testing
    #[derive(Debug, Default)]
    pub struct StaticResolver {
        answers: HashMap<String, String>,
        failing: bool,
        calls: AtomicUsize,
    }

    impl StaticResolver {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `keyword` when asked about `title`
        pub fn with_answer(mut self, title: &str, keyword: &str) -> Self {
            self.answers.insert(title.to_string(), keyword.to_string());
            self
        }

        /// Fail every call with a network error
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SemanticResolver for StaticResolver {
        async fn resolve(
            &self,
            title: &str,
            _available_keywords: &[String],
        ) -> Result<Option<String>, FallbackError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing {
                return Err(FallbackError::Network("connection refused".to_string()));
            }
            Ok(self.answers.get(title).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    include!("fallback.test.rs");
}
