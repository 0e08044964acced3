//! Mapping directory fixtures
//!
//! Writes `keywords_<lang>.json` and `icons_<lang>.json` into a temporary
//! directory so tests exercise the same files the CLI reads.

use anyhow::{Context, Result};
use iconmatch_lib::application::{AppConfig, CommandSession};
use iconmatch_lib::matching::JsonDirectorySource;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small Hebrew table covering every matching tier.
///
/// Kept as raw JSON text: keyword order decides ties.
pub const HEBREW_KEYWORDS: &str = r#"{
    "bird": ["ציפור", "ציפורים"],
    "dog": ["כלב", "puppy"],
    "moon": ["ירח", "לבנה"],
    "rain": ["גשם"],
    "rainbow": ["קשת"],
    "sun": ["שמש"],
    "flower": ["פרח", "sunflower fields"],
    "night": ["לילה"]
}"#;

/// Icons for most of [`HEBREW_KEYWORDS`]; `dog` and `night` stay unmapped
pub fn hebrew_icons() -> Value {
    json!({
        "bird": "mdi:bird",
        "moon": "mdi:moon-waning-crescent",
        "rain": "mdi:weather-pouring",
        "rainbow": "mdi:looks",
        "sun": "mdi:white-balance-sunny",
        "flower": "mdi:flower",
        "night": ""
    })
}

/// Temporary mappings directory, removed on drop
pub struct MappingDirFixture {
    dir: TempDir,
}

impl MappingDirFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("Failed to create mappings dir")?,
        })
    }

    /// Fixture pre-populated with the Hebrew tables
    pub fn hebrew() -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_keywords("he", HEBREW_KEYWORDS)?;
        fixture.write_icons("he", &hebrew_icons())?;
        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Keyword tables are written verbatim so their key order survives
    pub fn write_keywords(&self, language: &str, table: &str) -> Result<PathBuf> {
        self.write_raw(&format!("keywords_{}.json", language), table)
    }

    pub fn write_icons(&self, language: &str, mapping: &Value) -> Result<PathBuf> {
        self.write(&format!("icons_{}.json", language), mapping)
    }

    /// Write raw text, for malformed-file tests
    pub fn write_raw(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn source(&self) -> JsonDirectorySource {
        JsonDirectorySource::new(self.path())
    }

    /// Validated config pointing at this directory
    pub fn config(&self, language: &str) -> Result<AppConfig> {
        let mut config = AppConfig {
            mappings_dir: Some(self.path().to_path_buf()),
            language: language.to_string(),
            ..AppConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn session(&self, language: &str) -> Result<CommandSession> {
        Ok(CommandSession::new(self.config(language)?)?)
    }

    fn write(&self, name: &str, value: &Value) -> Result<PathBuf> {
        let contents = serde_json::to_string_pretty(value)?;
        self.write_raw(name, &contents)
    }
}
