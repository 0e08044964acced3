//! Configuration loading and global state management

use crate::primitives::ConfigError;
use std::sync::OnceLock;

use super::{config::AppConfig, env::EnvironmentConfig};

// Global configuration available throughout the application
static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Dotenv files consulted in order; earlier files win for a given key
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load dotenv files, ignoring the ones that do not exist
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        if let Err(e) = dotenvy::from_filename(env_file) {
            if !e.not_found() {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Resolve the final configuration: defaults -> .env -> env vars -> CLI.
    ///
    /// `cli` is the already-parsed command line; clap has applied the
    /// `ICONMATCH_*` variables to it, so dotenv files must be loaded before
    /// parsing (see [`load_env_files`]).
    pub fn resolve(cli: AppConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        config = config.merge_with(cli);
        config.validate()?;

        Ok(config)
    }

    /// Initialize global configuration (call once in main)
    pub fn init_global(config: AppConfig) -> Result<&'static AppConfig, ConfigError> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        GLOBAL_CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
    }

    /// Global configuration, if initialized
    pub fn global() -> Option<&'static AppConfig> {
        GLOBAL_CONFIG.get()
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
