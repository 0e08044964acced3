//! Language-scoped mapping store with read-through snapshots
//!
//! A [`MappingStore`] owns one [`MappingSource`] and caches an immutable
//! [`MappingSnapshot`] per language. Reloading builds a new snapshot and swaps
//! it in; scans holding the previous snapshot keep reading the old tables.
//!
//! Loading never aborts a batch: a missing or malformed document degrades to
//! an empty table (logged at `warn`), which surfaces as `mapped = 0` in the
//! coverage stats. [`MappingStore::try_load`] is the strict variant.

use super::matcher::{KeywordMatcher, MatchResult};
use super::stats::CoverageStats;
use super::suggest::Suggestion;
use super::tables::{IconMapping, SynonymTable};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, warn};

/// Mapping document loading errors
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Failed to read mapping file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse mapping file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No mappings registered for language '{language}'")]
    UnknownLanguage { language: String },
}

/// Supplies the two tables for a language
pub trait MappingSource: Send + Sync {
    fn load_synonyms(&self, language: &str) -> Result<SynonymTable, MappingError>;

    fn load_icons(&self, language: &str) -> Result<IconMapping, MappingError>;
}

/// Reads `keywords_<lang>.json` and `icons_<lang>.json` from one directory
#[derive(Debug, Clone)]
pub struct JsonDirectorySource {
    dir: PathBuf,
}

impl JsonDirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn synonyms_path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("keywords_{}.json", language))
    }

    pub fn icons_path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("icons_{}.json", language))
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MappingError> {
        let data = std::fs::read_to_string(path).map_err(|e| MappingError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&data).map_err(|e| MappingError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl MappingSource for JsonDirectorySource {
    fn load_synonyms(&self, language: &str) -> Result<SynonymTable, MappingError> {
        Self::read_json(&self.synonyms_path(language))
    }

    fn load_icons(&self, language: &str) -> Result<IconMapping, MappingError> {
        Self::read_json(&self.icons_path(language))
    }
}

/// Tables held in memory, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    synonyms: HashMap<String, SynonymTable>,
    icons: HashMap<String, IconMapping>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(
        mut self,
        language: &str,
        synonyms: SynonymTable,
        icons: IconMapping,
    ) -> Self {
        self.synonyms.insert(language.to_string(), synonyms);
        self.icons.insert(language.to_string(), icons);
        self
    }
}

impl MappingSource for InMemorySource {
    fn load_synonyms(&self, language: &str) -> Result<SynonymTable, MappingError> {
        self.synonyms
            .get(language)
            .cloned()
            .ok_or_else(|| MappingError::UnknownLanguage {
                language: language.to_string(),
            })
    }

    fn load_icons(&self, language: &str) -> Result<IconMapping, MappingError> {
        self.icons
            .get(language)
            .cloned()
            .ok_or_else(|| MappingError::UnknownLanguage {
                language: language.to_string(),
            })
    }
}

/// Immutable view of both tables for one language
#[derive(Debug, Clone)]
pub struct MappingSnapshot {
    language: String,
    synonyms: Arc<SynonymTable>,
    icons: Arc<IconMapping>,
}

impl MappingSnapshot {
    pub fn new(language: &str, synonyms: SynonymTable, icons: IconMapping) -> Self {
        Self {
            language: language.to_string(),
            synonyms: Arc::new(synonyms),
            icons: Arc::new(icons),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn icons(&self) -> &IconMapping {
        &self.icons
    }

    /// Keywords offered to the semantic fallback, in table order
    pub fn available_keywords(&self) -> Vec<String> {
        self.synonyms.keywords().map(str::to_string).collect()
    }

    /// Match a title and resolve its identifier
    pub fn match_title(&self, matcher: &KeywordMatcher, title: &str) -> MatchResult {
        matcher
            .match_title(title, &self.synonyms)
            .with_external_id(&self.icons)
    }

    pub fn suggest(&self, matcher: &KeywordMatcher, title: &str, limit: usize) -> Vec<Suggestion> {
        matcher.suggest(title, &self.synonyms, &self.icons, limit)
    }

    pub fn coverage(&self) -> CoverageStats {
        CoverageStats::compute(&self.synonyms, &self.icons)
    }

    /// Same synonyms, new icon table
    fn with_icons(&self, icons: IconMapping) -> Self {
        Self {
            language: self.language.clone(),
            synonyms: Arc::clone(&self.synonyms),
            icons: Arc::new(icons),
        }
    }
}

/// Per-language snapshot cache over a [`MappingSource`]
pub struct MappingStore<S: MappingSource> {
    source: S,
    snapshots: RwLock<HashMap<String, MappingSnapshot>>,
}

impl<S: MappingSource> MappingStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshots: RwLock::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cached snapshot, loading it on first use
    pub fn snapshot(&self, language: &str) -> MappingSnapshot {
        if let Some(snapshot) = self
            .snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(language)
        {
            return snapshot.clone();
        }

        self.reload(language)
    }

    /// Discard the cached snapshot and read both tables again
    pub fn reload(&self, language: &str) -> MappingSnapshot {
        let synonyms = self.source.load_synonyms(language).unwrap_or_else(|e| {
            warn!(language, error = %e, "synonym table unavailable, using empty table");
            SynonymTable::default()
        });
        let icons = self.load_icons_or_empty(language);

        self.install(MappingSnapshot::new(language, synonyms, icons))
    }

    /// Read only the icon table again, keeping the cached synonyms
    pub fn reload_icons(&self, language: &str) -> MappingSnapshot {
        let current = self.snapshot(language);
        let icons = self.load_icons_or_empty(language);
        self.install(current.with_icons(icons))
    }

    /// Strict load: any unreadable table is an error and the cache is untouched
    pub fn try_load(&self, language: &str) -> Result<MappingSnapshot, MappingError> {
        let synonyms = self.source.load_synonyms(language)?;
        let icons = self.source.load_icons(language)?;
        Ok(self.install(MappingSnapshot::new(language, synonyms, icons)))
    }

    fn load_icons_or_empty(&self, language: &str) -> IconMapping {
        self.source.load_icons(language).unwrap_or_else(|e| {
            warn!(language, error = %e, "icon mapping unavailable, using empty mapping");
            IconMapping::default()
        })
    }

    fn install(&self, snapshot: MappingSnapshot) -> MappingSnapshot {
        for shared in snapshot.synonyms().overlapping_synonyms() {
            warn!(
                language = snapshot.language(),
                synonym = %shared.synonym,
                keywords = ?shared.keywords,
                "synonym shared by several keywords; the first one wins exact matches"
            );
        }

        let coverage = snapshot.coverage();
        debug!(
            language = snapshot.language(),
            keywords = coverage.total,
            mapped = coverage.mapped,
            "mapping snapshot installed"
        );

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(snapshot.language.clone(), snapshot.clone());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    include!("store.test.rs");
}
