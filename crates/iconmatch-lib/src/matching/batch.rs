//! Sequential batch matching
//!
//! Titles are processed one at a time. When a semantic resolver is attached,
//! each resolver call is followed by a fixed delay, so at most one external
//! request is in flight and the collaborator's rate limit is respected.
//! Stopping iteration (dropping the future) cancels the batch.

use super::fallback::{NoResolver, SemanticResolver, apply_semantic_fallback};
use super::matcher::{Confidence, KeywordMatcher, MatchResult};
use super::stats::BatchStats;
use super::store::MappingSnapshot;
use indicatif::ProgressStyle;
use serde::Serialize;
use std::time::Duration;
use tracing::{Instrument, debug, info};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const PROGRESS_TEMPLATE: &str = "{spinner:.green} matching [{bar:30}] {pos}/{len}";

/// One processed title
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub title: String,
    pub result: MatchResult,
}

/// Per-title results plus tier counts
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub entries: Vec<BatchEntry>,
    pub stats: BatchStats,
}

impl BatchOutcome {
    /// `(title, external_id)` pairs ready for a playlist update
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| {
            entry
                .result
                .external_id
                .as_deref()
                .map(|id| (entry.title.as_str(), id))
        })
    }

    /// Titles left without a keyword
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.result.confidence == Confidence::None)
            .map(|entry| entry.title.as_str())
    }
}

/// Runs the matching pipeline over many titles
#[derive(Debug, Clone)]
pub struct BatchRunner<R = NoResolver> {
    matcher: KeywordMatcher,
    resolver: Option<R>,
    fallback_delay: Duration,
}

impl BatchRunner<NoResolver> {
    /// Exact and fuzzy tiers only
    pub fn new(matcher: KeywordMatcher) -> Self {
        Self {
            matcher,
            resolver: None,
            fallback_delay: Duration::ZERO,
        }
    }
}

impl<R: SemanticResolver> BatchRunner<R> {
    /// Attach a semantic resolver, waiting `delay` after each call to it
    pub fn with_fallback<R2: SemanticResolver>(
        self,
        resolver: R2,
        delay: Duration,
    ) -> BatchRunner<R2> {
        BatchRunner {
            matcher: self.matcher,
            resolver: Some(resolver),
            fallback_delay: delay,
        }
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn resolver(&self) -> Option<&R> {
        self.resolver.as_ref()
    }

    /// Match, resolve, and if needed consult the resolver for one title
    pub async fn process(&self, title: &str, snapshot: &MappingSnapshot) -> MatchResult {
        let result = snapshot.match_title(&self.matcher, title);
        let unplaced = result.confidence == Confidence::None && !snapshot.synonyms().is_empty();

        match &self.resolver {
            Some(resolver) if unplaced => {
                let result = apply_semantic_fallback(result, title, resolver, snapshot).await;
                if !self.fallback_delay.is_zero() {
                    tokio::time::sleep(self.fallback_delay).await;
                }
                result
            }
            _ => result,
        }
    }

    /// Process every title in order
    pub async fn run<I, T>(&self, titles: I, snapshot: &MappingSnapshot) -> BatchOutcome
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();

        let span = crate::progress_span!("match", total = titles.len());
        span.pb_set_length(titles.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            span.pb_set_style(&style.progress_chars("=> "));
        }

        let outcome = async {
            let mut outcome = BatchOutcome::default();
            for title in titles {
                let result = self.process(&title, snapshot).await;
                debug!(
                    title = %title,
                    keyword = ?result.keyword,
                    confidence = %result.confidence,
                    "title processed"
                );

                outcome.stats.record(result.confidence);
                outcome.entries.push(BatchEntry { title, result });
                span.pb_inc(1);
            }
            outcome
        }
        .instrument(span.clone())
        .await;

        info!(
            language = snapshot.language(),
            total = outcome.stats.total(),
            exact = outcome.stats.exact,
            partial = outcome.stats.partial,
            semantic = outcome.stats.semantic,
            none = outcome.stats.none,
            "batch complete"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    include!("batch.test.rs");
}
