//! Shared fixtures for iconmatch end-to-end tests

pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{HEBREW_KEYWORDS, MappingDirFixture, hebrew_icons};
