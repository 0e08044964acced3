//! Multi-tier keyword matching for track titles
//!
//! # Algorithm Overview
//!
//! Search terms extracted from the title are compared against every keyword
//! and its synonyms (all normalized):
//!
//! 1. **Exact tier** - a search term equal to a candidate returns that keyword
//!    immediately. Table order decides between keywords sharing a synonym.
//! 2. **Fuzzy tier** - when one string contains the other, the pair scores the
//!    character length of the longer string. The first keyword reaching the
//!    highest score wins.
//! 3. **Semantic tier** - left to the caller (see [`super::fallback`]) when
//!    neither tier produced a keyword.
//!
//! External identifiers are resolved in a separate step so matching stays a
//! pure function of the title and the synonym table.
//!
//! # Examples
//!
//! ```
//! use iconmatch_lib::matching::{Confidence, KeywordMatcher, SynonymTable};
//!
//! let table = SynonymTable::new()
//!     .with("bird", ["ציפור"])
//!     .with("moon", ["ירח"]);
//! let matcher = KeywordMatcher::default();
//!
//! let result = matcher.match_title("הציפור ששכחה לעוף", &table);
//! assert_eq!(result.keyword.as_deref(), Some("bird"));
//! assert_eq!(result.confidence, Confidence::Exact);
//! ```

use super::normalize::{Normalizer, NormalizerConfig};
use super::tables::{IconMapping, SynonymTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Match strength, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// A search term equals the keyword or one of its synonyms
    Exact,
    /// Substring overlap only
    Partial,
    /// Accepted answer from the semantic fallback collaborator
    Semantic,
    /// No keyword
    None,
}

impl Confidence {
    /// Whether a keyword was assigned at this tier
    pub fn is_assignable(&self) -> bool {
        !matches!(self, Confidence::None)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::Exact => "exact",
            Confidence::Partial => "partial",
            Confidence::Semantic => "semantic",
            Confidence::None => "none",
        };
        f.write_str(label)
    }
}

/// Outcome of matching one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub keyword: Option<String>,
    pub external_id: Option<String>,
    pub confidence: Confidence,
    /// Terms extracted from the title, full normalized string first
    pub search_terms: Vec<String>,
}

impl MatchResult {
    /// No keyword for these search terms
    pub fn none(search_terms: Vec<String>) -> Self {
        Self {
            keyword: None,
            external_id: None,
            confidence: Confidence::None,
            search_terms,
        }
    }

    fn matched(keyword: &str, confidence: Confidence, search_terms: Vec<String>) -> Self {
        Self {
            keyword: Some(keyword.to_string()),
            external_id: None,
            confidence,
            search_terms,
        }
    }

    /// Attach the keyword's identifier; unmapped keywords keep `None`
    pub fn with_external_id(mut self, icons: &IconMapping) -> Self {
        self.external_id = self
            .keyword
            .as_deref()
            .and_then(|keyword| icons.get(keyword))
            .map(str::to_string);
        self
    }
}

/// Keyword matcher bound to one language's normalization rules
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    normalizer: Normalizer,
}

impl KeywordMatcher {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalized keyword followed by its normalized synonyms, empties dropped
    pub(crate) fn candidates(&self, keyword: &str, synonyms: &[String]) -> Vec<String> {
        std::iter::once(keyword)
            .chain(synonyms.iter().map(String::as_str))
            .map(|candidate| self.normalizer.normalize(candidate))
            .filter(|candidate| !candidate.is_empty())
            .collect()
    }

    /// Find the keyword a title refers to.
    ///
    /// Never fails: an empty title or an empty table yields
    /// [`Confidence::None`]. The returned `external_id` is always `None`;
    /// see [`MatchResult::with_external_id`].
    pub fn match_title(&self, title: &str, table: &SynonymTable) -> MatchResult {
        let search_terms = self.normalizer.extract_search_terms(title);
        if search_terms.is_empty() {
            return MatchResult::none(search_terms);
        }

        match self.scan(&search_terms, table) {
            Scan::Exact(keyword) => {
                debug!(title, keyword, "exact match");
                MatchResult::matched(keyword, Confidence::Exact, search_terms)
            }
            Scan::Fuzzy(keyword, score) => {
                let normalized_keyword = self.normalizer.normalize(keyword);
                let confidence = if search_terms.contains(&normalized_keyword) {
                    Confidence::Exact
                } else {
                    Confidence::Partial
                };
                debug!(title, keyword, score, %confidence, "fuzzy match");
                MatchResult::matched(keyword, confidence, search_terms)
            }
            Scan::Nothing => {
                debug!(title, "no keyword matched");
                MatchResult::none(search_terms)
            }
        }
    }

    fn scan<'t>(&self, search_terms: &[String], table: &'t SynonymTable) -> Scan<'t> {
        let mut best: Option<(&'t str, usize)> = None;

        for (keyword, synonyms) in table.iter() {
            let candidates = self.candidates(keyword, synonyms);

            for term in search_terms {
                for candidate in &candidates {
                    if term == candidate {
                        return Scan::Exact(keyword);
                    }

                    if term.contains(candidate.as_str()) || candidate.contains(term.as_str()) {
                        let score = term.chars().count().max(candidate.chars().count());
                        // Strictly greater: ties keep the earlier keyword
                        if best.is_none_or(|(_, best_score)| score > best_score) {
                            trace!(keyword, score, "new best fuzzy candidate");
                            best = Some((keyword, score));
                        }
                    }
                }
            }
        }

        match best {
            Some((keyword, score)) => Scan::Fuzzy(keyword, score),
            None => Scan::Nothing,
        }
    }
}

enum Scan<'t> {
    Exact(&'t str),
    Fuzzy(&'t str, usize),
    Nothing,
}

#[cfg(test)]
mod tests {
    include!("matcher.test.rs");
}
