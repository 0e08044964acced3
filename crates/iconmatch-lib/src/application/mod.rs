//! Application layer modules
//!
//! CLI interface, configuration management, and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;
pub mod session;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig, Commands};
pub use commands::{execute_command, execute_command_with_session, read_titles};
pub use config::AppConfig;
pub use env::EnvironmentConfig;
pub use loader::*;
pub use session::CommandSession;
