//! Script-aware text normalization and search-term extraction
//!
//! Titles arrive as free-form mixed-script text (Latin plus, for example,
//! Hebrew). Normalization keeps alphanumerics, whitespace, and one configurable
//! "extended" code-point block, then lower-cases and collapses whitespace.
//!
//! Morphology is expressed as data: a [`NormalizerConfig`] carries the
//! extended range and an ordered list of [`PrefixRule`]s, so supporting a new
//! script means adding a preset rather than new code.
//!
//! # Examples
//!
//! ```
//! use iconmatch_lib::matching::normalize::{Normalizer, NormalizerConfig};
//!
//! let normalizer = Normalizer::new(NormalizerConfig::hebrew());
//! assert_eq!(normalizer.normalize("  Hello,   World! "), "hello world");
//!
//! let terms = normalizer.extract_search_terms("הציפור ששכחה לעוף");
//! assert!(terms.contains(&"ציפור".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Hebrew block, including points and cantillation marks
pub const HEBREW_RANGE: RangeInclusive<char> = '\u{0590}'..='\u{05FF}';

/// Strip `prefix` from tokens that keep at least `min_remaining` characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub prefix: String,
    pub min_remaining: usize,
}

impl PrefixRule {
    pub fn new(prefix: &str, min_remaining: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            min_remaining,
        }
    }

    /// Token with the prefix removed, if the rule applies
    pub fn strip<'a>(&self, token: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return None;
        }
        token
            .strip_prefix(self.prefix.as_str())
            .filter(|rest| rest.chars().count() >= self.min_remaining)
    }
}

/// Per-language normalization rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Code points kept verbatim even when not alphanumeric
    pub extended_range: Option<RangeInclusive<char>>,
    /// Applied independently to every token containing an extended character
    pub prefix_rules: Vec<PrefixRule>,
}

impl NormalizerConfig {
    /// Language codes with a built-in preset
    pub const KNOWN_LANGUAGES: &'static [&'static str] = &["he", "en"];

    /// Hebrew: definite article `ה`, conjunction `ו`, and their combination `וה`
    pub fn hebrew() -> Self {
        Self {
            extended_range: Some(HEBREW_RANGE),
            prefix_rules: vec![
                PrefixRule::new("ה", 2),
                PrefixRule::new("ו", 2),
                PrefixRule::new("וה", 3),
            ],
        }
    }

    /// Latin-only titles, no morphology
    pub fn latin() -> Self {
        Self {
            extended_range: None,
            prefix_rules: Vec::new(),
        }
    }

    /// Look up the preset for a language code
    pub fn for_language(language: &str) -> Option<Self> {
        match language.trim().to_lowercase().as_str() {
            "he" | "iw" | "heb" | "hebrew" => Some(Self::hebrew()),
            "en" | "eng" | "english" => Some(Self::latin()),
            _ => None,
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::hebrew()
    }
}

/// Stateless normalizer over a [`NormalizerConfig`]
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    fn is_extended(&self, c: char) -> bool {
        self.config
            .extended_range
            .as_ref()
            .is_some_and(|range| range.contains(&c))
    }

    /// Lower-case, drop everything but alphanumerics, whitespace and the
    /// extended range, collapse whitespace runs, trim.
    pub fn normalize(&self, text: &str) -> String {
        let kept: String = text
            .to_lowercase()
            .chars()
            .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || self.is_extended(c))
            .collect();

        kept.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Normalized tokens longer than one character
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        Self::tokens_of(&self.normalize(text))
            .map(str::to_string)
            .collect()
    }

    fn tokens_of(normalized: &str) -> impl Iterator<Item = &str> {
        normalized
            .split(' ')
            .filter(|token| token.chars().count() > 1)
    }

    /// Full normalized string, then each token followed by its prefix-stripped
    /// variants. Duplicates are kept; callers only test membership.
    pub fn extract_search_terms(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut terms = vec![normalized.clone()];
        for token in Self::tokens_of(&normalized) {
            terms.push(token.to_string());

            if !token.chars().any(|c| self.is_extended(c)) {
                continue;
            }
            terms.extend(
                self.config
                    .prefix_rules
                    .iter()
                    .filter_map(|rule| rule.strip(token))
                    .map(str::to_string),
            );
        }

        terms
    }
}

#[cfg(test)]
mod tests {
    include!("normalize.test.rs");
}
