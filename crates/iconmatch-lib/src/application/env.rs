//! Standard terminal environment variables
//!
//! Folds NO_COLOR, FORCE_COLOR, CLICOLOR and CI into the color intent before
//! CLI arguments are applied.

use crate::primitives::{ConfigError, TerminalCapsDetectIntent};
use serde::Deserialize;

/// Environment variables that affect application behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR (any non-empty value disables color)
    pub no_color: Option<String>,
    /// FORCE_COLOR (0/false disables, 1/2/3/true enables)
    pub force_color: Option<String>,
    /// CLICOLOR (0 disables color)
    pub clicolor: Option<String>,
    /// CI (any value)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load from the current process environment
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    pub fn is_ci(&self) -> bool {
        self.ci.is_some()
    }

    fn forced(&self) -> Option<TerminalCapsDetectIntent> {
        match self.force_color.as_deref()? {
            "0" | "false" => Some(TerminalCapsDetectIntent::Never),
            "1" | "2" | "3" | "true" => Some(TerminalCapsDetectIntent::Always),
            _ => None,
        }
    }

    fn disabled(&self) -> bool {
        self.clicolor.as_deref() == Some("0")
            || self.no_color.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Resolve the color intent.
    ///
    /// CI wins outright; otherwise FORCE_COLOR overrides NO_COLOR and CLICOLOR.
    pub fn apply_color_config(&self, color: TerminalCapsDetectIntent) -> TerminalCapsDetectIntent {
        if self.is_ci() {
            return TerminalCapsDetectIntent::Never;
        }

        if let Some(forced) = self.forced() {
            return forced;
        }

        if self.disabled() {
            TerminalCapsDetectIntent::Never
        } else {
            color
        }
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
