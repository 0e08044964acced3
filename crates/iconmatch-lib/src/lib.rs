//! # iconmatch Library
//!
//! Matches media track titles to icon keywords through exact, fuzzy and
//! semantic tiers, using per-language synonym tables.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared enums
//! - [`logger`] - Structured logging with progress tracking
//! - [`display`] - User-facing terminal output
//! - [`matching`] - Normalization, matching, suggestions, and mapping tables
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! iconmatch_lib::main().await
//! # }
//! ```

pub mod application;
pub mod display;
pub mod logger;
pub mod matching;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use matching::{
    Confidence, KeywordMatcher, MappingSnapshot, MappingStore, MatchResult, SynonymTable,
};
pub use primitives::{
    ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, TerminalCapsDetectIntent,
};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;
use display::Display;

pub async fn main() -> Result<()> {
    // Dotenv files feed the env-backed CLI options, so load them first
    application::load_env_files()?;

    let cli = CliConfig::load()?;
    let app_config = AppConfig::init_global(AppConfig::resolve(cli.app_config)?)?;

    Logger::init(app_config.to_logger_config())?;
    // User-facing output always goes to stdout
    Display::init(app_config.color.enables_color(LogOutput::Stdout))?;

    execute_command(CliConfig {
        app_config: app_config.clone(),
        command: cli.command,
    })
    .await
}
