use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// iconmatch CLI - match track titles to icon keywords
#[derive(Debug, Clone, Parser)]
#[command(name = "iconmatch")]
#[command(about = "Match media track titles to icon keywords")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// iconmatch commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Available iconmatch commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show version information
    Version,

    /// Match one or more titles against the keyword table
    Match {
        #[arg(required = true, help = "Track titles to match")]
        titles: Vec<String>,

        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },

    /// Rank candidate keywords for a title
    Suggest {
        #[arg(help = "Track title")]
        title: String,

        #[arg(
            short,
            long,
            help = "Maximum number of suggestions (defaults to config)"
        )]
        limit: Option<usize>,

        #[arg(long, help = "Print suggestions as JSON")]
        json: bool,
    },

    /// Match every title in a file, one per line
    Batch {
        #[arg(help = "File with one title per line")]
        file: PathBuf,

        #[arg(long, help = "Print the batch outcome as JSON")]
        json: bool,
    },

    /// Report how many keywords have icon identifiers
    Coverage {
        #[arg(long, help = "Print coverage as JSON")]
        json: bool,
    },
}

impl Commands {
    /// Check if command needs the mapping tables
    pub fn requires_mappings(&self) -> bool {
        !matches!(self, Commands::Version)
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
