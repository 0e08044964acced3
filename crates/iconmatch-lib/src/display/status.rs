//! Status display for user feedback
//!
//! Semantic status lines and match-result rendering, replacing raw
//! `println!` calls in command handlers.

use super::styling::StyleManager;
use crate::matching::{BatchStats, Confidence, CoverageStats, MatchResult, Suggestion};

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    pub fn emphasis(&self, text: &str) {
        println!("{}", self.styling.style_emphasis(text));
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }

    pub fn list(&self, items: &[&str]) {
        for item in items {
            println!("  {} {}", self.styling.bullet(), item);
        }
    }

    /// One line per title: tier symbol, title, keyword and identifier
    pub fn match_result(&self, title: &str, result: &MatchResult) {
        println!("{}", self.format_match(title, result));
    }

    pub fn suggestions(&self, suggestions: &[Suggestion]) {
        for suggestion in suggestions {
            println!("{}", self.format_suggestion(suggestion));
        }
    }

    pub fn batch_summary(&self, stats: &BatchStats) {
        self.emphasis(&format!("Processed {} titles", stats.total()));
        let rows = [
            ("exact", stats.exact),
            ("partial", stats.partial),
            ("semantic", stats.semantic),
            ("none", stats.none),
            ("assignable", stats.assignable()),
        ];
        for (label, count) in rows {
            println!(
                "  {:<10} {:>5}  ({:5.1}%)",
                label,
                count,
                stats.percentage(count)
            );
        }
    }

    pub fn coverage(&self, language: &str, coverage: &CoverageStats) {
        self.emphasis(&format!(
            "Coverage [{}]: {}/{} keywords mapped ({:.1}%)",
            language,
            coverage.mapped,
            coverage.total,
            coverage.percentage_mapped()
        ));
        if !coverage.unmapped.is_empty() {
            self.subtle("Unmapped keywords:");
            let unmapped: Vec<&str> = coverage.unmapped.iter().map(String::as_str).collect();
            self.list(&unmapped);
        }
    }

    pub(crate) fn format_match(&self, title: &str, result: &MatchResult) -> String {
        let target = match (&result.keyword, &result.external_id) {
            (Some(keyword), Some(id)) => format!("{} → {}", keyword, id),
            (Some(keyword), None) => format!("{} → (unmapped)", keyword),
            _ => "no match".to_string(),
        };
        let line = format!("{}: {} [{}]", title, target, result.confidence);

        match result.confidence {
            Confidence::Exact | Confidence::Semantic => self.styling.format_success(&line),
            Confidence::Partial => self.styling.format_warning(&line),
            Confidence::None => self.styling.format_error(&line),
        }
    }

    pub(crate) fn format_suggestion(&self, suggestion: &Suggestion) -> String {
        let id = suggestion.external_id.as_deref().unwrap_or("(unmapped)");
        format!(
            "  {} {:<20} {:>5.1}  {}",
            self.styling.bullet(),
            suggestion.keyword,
            suggestion.relevance,
            self.styling.style_subtle(id)
        )
    }
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
