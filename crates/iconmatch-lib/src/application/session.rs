//! Command session
//!
//! Each command execution creates a session that owns the resolved
//! configuration, the mapping store and the language's matcher.

use crate::application::config::AppConfig;
use crate::matching::{
    BatchRunner, JsonDirectorySource, KeywordMatcher, MappingSnapshot, MappingSource,
    MappingStore, SemanticResolver,
};
use crate::primitives::ConfigError;
use std::path::PathBuf;

pub struct CommandSession<S: MappingSource = JsonDirectorySource> {
    config: AppConfig,
    store: MappingStore<S>,
    matcher: KeywordMatcher,
}

impl CommandSession<JsonDirectorySource> {
    /// Session reading tables from the configured mappings directory
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let dir = config
            .mappings_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_source(config, JsonDirectorySource::new(dir))
    }
}

impl<S: MappingSource> CommandSession<S> {
    pub fn with_source(config: AppConfig, source: S) -> Result<Self, ConfigError> {
        let matcher = KeywordMatcher::new(config.normalizer_config()?);
        Ok(Self {
            config,
            store: MappingStore::new(source),
            matcher,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    /// Tables for the configured language
    pub fn snapshot(&self) -> MappingSnapshot {
        self.store.snapshot(&self.config.language)
    }

    /// Exact and fuzzy tiers only
    pub fn batch_runner(&self) -> BatchRunner {
        BatchRunner::new(self.matcher.clone())
    }

    /// Runner consulting `resolver`, paced by the configured fallback delay
    pub fn batch_runner_with<R: SemanticResolver>(&self, resolver: R) -> BatchRunner<R> {
        self.batch_runner()
            .with_fallback(resolver, self.config.fallback_delay())
    }
}

#[cfg(test)]
mod tests {
    include!("session.test.rs");
}
