//! Batch confidence counts and mapping coverage

use super::matcher::Confidence;
use super::tables::{IconMapping, SynonymTable};
use serde::Serialize;

/// Per-tier counts over a batch of match attempts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub exact: usize,
    pub partial: usize,
    pub semantic: usize,
    pub none: usize,
}

impl BatchStats {
    pub fn record(&mut self, confidence: Confidence) {
        match confidence {
            Confidence::Exact => self.exact += 1,
            Confidence::Partial => self.partial += 1,
            Confidence::Semantic => self.semantic += 1,
            Confidence::None => self.none += 1,
        }
    }

    pub fn count(&self, confidence: Confidence) -> usize {
        match confidence {
            Confidence::Exact => self.exact,
            Confidence::Partial => self.partial,
            Confidence::Semantic => self.semantic,
            Confidence::None => self.none,
        }
    }

    pub fn total(&self) -> usize {
        self.exact + self.partial + self.semantic + self.none
    }

    /// Titles that received a keyword at any tier
    pub fn assignable(&self) -> usize {
        self.exact + self.partial + self.semantic
    }

    /// Share of `count` in the batch total, 0 for an empty batch
    pub fn percentage(&self, count: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * count as f64 / total as f64,
        }
    }
}

impl Extend<Confidence> for BatchStats {
    fn extend<T: IntoIterator<Item = Confidence>>(&mut self, iter: T) {
        for confidence in iter {
            self.record(confidence);
        }
    }
}

impl FromIterator<Confidence> for BatchStats {
    fn from_iter<T: IntoIterator<Item = Confidence>>(iter: T) -> Self {
        let mut stats = Self::default();
        stats.extend(iter);
        stats
    }
}

/// How much of a synonym table has icon identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageStats {
    pub total: usize,
    pub mapped: usize,
    /// Keywords without a non-empty identifier, in table order
    pub unmapped: Vec<String>,
}

impl CoverageStats {
    pub fn compute(synonyms: &SynonymTable, icons: &IconMapping) -> Self {
        let (mapped, unmapped): (Vec<&str>, Vec<&str>) = synonyms
            .keywords()
            .partition(|keyword| icons.is_mapped(keyword));

        Self {
            total: synonyms.len(),
            mapped: mapped.len(),
            unmapped: unmapped.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn percentage_mapped(&self) -> f64 {
        match self.total {
            0 => 0.0,
            total => 100.0 * self.mapped as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("stats.test.rs");
}
