//! Ranked keyword suggestions for titles without a confident match
//!
//! Relevance is the overlap ratio `100 * shorter / longer` of the best
//! containing pair for each keyword. It only orders suggestions for display
//! and is independent of the matcher's raw-length score.

use super::matcher::KeywordMatcher;
use super::tables::{IconMapping, SynonymTable};
use serde::Serialize;

/// A keyword the title may refer to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub keyword: String,
    pub external_id: Option<String>,
    /// Overlap ratio in (0, 100]
    pub relevance: f64,
}

/// `100 * shorter / longer` when one string contains the other
fn overlap_relevance(a: &str, b: &str) -> Option<f64> {
    if !(a.contains(b) || b.contains(a)) {
        return None;
    }
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let longer = a_len.max(b_len);
    if longer == 0 {
        return None;
    }
    Some(100.0 * a_len.min(b_len) as f64 / longer as f64)
}

impl KeywordMatcher {
    /// Up to `limit` keywords ranked by relevance, highest first.
    ///
    /// Keywords without any containing pair are left out; equal relevance
    /// keeps table order.
    pub fn suggest(
        &self,
        title: &str,
        table: &SynonymTable,
        icons: &IconMapping,
        limit: usize,
    ) -> Vec<Suggestion> {
        let search_terms = self.normalizer().extract_search_terms(title);
        if search_terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<Suggestion> = table
            .iter()
            .filter_map(|(keyword, synonyms)| {
                let candidates = self.candidates(keyword, synonyms);
                let relevance = search_terms
                    .iter()
                    .flat_map(|term| {
                        candidates
                            .iter()
                            .filter_map(move |candidate| overlap_relevance(term, candidate))
                    })
                    .fold(0.0_f64, f64::max);

                (relevance > 0.0).then(|| Suggestion {
                    keyword: keyword.to_string(),
                    external_id: icons.get(keyword).map(str::to_string),
                    relevance,
                })
            })
            .collect();

        // Stable sort: ties stay in table order
        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    include!("suggest.test.rs");
}
