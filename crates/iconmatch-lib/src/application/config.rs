//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::matching::NormalizerConfig;
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration values
pub mod defaults {
    pub const LANGUAGE: &str = "he";
    pub const SUGGESTION_LIMIT: &str = "3";
    pub const FALLBACK_DELAY_MS: &str = "1000";
    pub const LOG_LEVEL: &str = "1"; // warnings surface degraded mapping loads
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const TTY_CAPS_DETECT_INTENT: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::defaults;
    use crate::primitives::{LogFormat, LogOutput, TerminalCapsDetectIntent};

    pub fn language() -> String {
        defaults::LANGUAGE.to_string()
    }

    pub fn suggestion_limit() -> usize {
        3
    }

    pub fn fallback_delay_ms() -> u64 {
        1000
    }

    pub fn log_level() -> u8 {
        1
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn tty_caps_detect_intent() -> TerminalCapsDetectIntent {
        TerminalCapsDetectIntent::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Directory holding keywords_<lang>.json and icons_<lang>.json
    #[arg(short = 'd', long, env = "ICONMATCH_MAPPINGS_DIR")]
    #[serde(default)]
    pub mappings_dir: Option<PathBuf>,

    /// Language of the titles and mapping tables
    #[arg(short = 'L', long, env = "ICONMATCH_LANGUAGE", default_value = defaults::LANGUAGE)]
    #[serde(default = "default_fns::language")]
    pub language: String,

    /// Default number of suggestions shown for unmatched titles
    #[arg(long, env = "ICONMATCH_SUGGESTION_LIMIT", default_value = defaults::SUGGESTION_LIMIT)]
    #[serde(default = "default_fns::suggestion_limit")]
    pub suggestion_limit: usize,

    /// Pause after each semantic fallback call, in milliseconds
    #[arg(long, env = "ICONMATCH_FALLBACK_DELAY_MS", default_value = defaults::FALLBACK_DELAY_MS)]
    #[serde(default = "default_fns::fallback_delay_ms")]
    pub fallback_delay_ms: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "ICONMATCH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "ICONMATCH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "ICONMATCH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "ICONMATCH_COLOR", default_value = defaults::TTY_CAPS_DETECT_INTENT)]
    #[serde(default = "default_fns::tty_caps_detect_intent")]
    pub color: TerminalCapsDetectIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mappings_dir: None,
            language: default_fns::language(),
            suggestion_limit: default_fns::suggestion_limit(),
            fallback_delay_ms: default_fns::fallback_delay_ms(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::tty_caps_detect_intent(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from the resolved settings
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color.enables_color(self.log_output),
        }
    }

    /// Normalization preset for the configured language
    pub fn normalizer_config(&self) -> Result<NormalizerConfig, ConfigError> {
        NormalizerConfig::for_language(&self.language).ok_or_else(|| {
            ConfigError::UnsupportedLanguage {
                language: self.language.clone(),
                known: NormalizerConfig::KNOWN_LANGUAGES.join(", "),
            }
        })
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.mappings_dir.is_some() {
            self.mappings_dir = other.mappings_dir;
        }

        if other.language != default_fns::language() {
            self.language = other.language;
        }
        if other.suggestion_limit != default_fns::suggestion_limit() {
            self.suggestion_limit = other.suggestion_limit;
        }
        if other.fallback_delay_ms != default_fns::fallback_delay_ms() {
            self.fallback_delay_ms = other.fallback_delay_ms;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        if other.log_format != default_fns::log_format() {
            self.log_format = other.log_format;
        }
        if other.log_output != default_fns::log_output() {
            self.log_output = other.log_output;
        }
        if other.color != default_fns::tty_caps_detect_intent() {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.language = self.language.trim().to_lowercase();
        self.normalizer_config()?;

        if self.suggestion_limit == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "suggestion limit must be at least 1".to_string(),
            });
        }

        match &self.mappings_dir {
            Some(dir) if !dir.is_dir() => {
                return Err(ConfigError::InvalidMappingsDir {
                    path: dir.display().to_string(),
                });
            }
            Some(_) => {}
            None => {
                self.mappings_dir = Some(std::env::current_dir()?);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
