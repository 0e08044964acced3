//! Terminal display system
//!
//! User-facing output, kept apart from tracing logs. Styling follows the
//! color intent resolved by the application config.

use crate::primitives::ConfigError;
use std::sync::OnceLock;

pub mod status;
pub mod styling;

// Global display manager - initialized once from the resolved color intent
static GLOBAL_DISPLAY: OnceLock<Display> = OnceLock::new();

/// Main display manager that coordinates all user-facing communication
#[derive(Debug)]
pub struct Display {
    styling: styling::StyleManager,
}

impl Display {
    /// Initialize the global display
    pub fn init(color: bool) -> Result<&'static Self, ConfigError> {
        let mut created = false;
        let display = GLOBAL_DISPLAY.get_or_init(|| {
            created = true;
            Display {
                styling: styling::StyleManager::new(color),
            }
        });

        if created {
            Ok(display)
        } else {
            Err(ConfigError::AlreadyInitialized)
        }
    }

    /// Global display, plain styling if never initialized
    pub fn global() -> &'static Self {
        GLOBAL_DISPLAY.get_or_init(|| Display {
            styling: styling::StyleManager::new(false),
        })
    }

    /// Status updates with semantic intent
    pub fn status() -> status::StatusDisplay<'static> {
        status::StatusDisplay::new(&Self::global().styling)
    }
}
