use super::*;
use crate::primitives::TerminalCapsDetectIntent;
use std::path::PathBuf;

#[test]
fn test_resolve_keeps_cli_values() {
    let dir = tempfile::tempdir().unwrap();
    let cli = AppConfig {
        mappings_dir: Some(dir.path().to_path_buf()),
        language: "en".to_string(),
        suggestion_limit: 7,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli).unwrap();
    assert_eq!(config.mappings_dir, Some(dir.path().to_path_buf()));
    assert_eq!(config.language, "en");
    assert_eq!(config.suggestion_limit, 7);
}

#[test]
fn test_resolve_explicit_color_wins_over_auto() {
    let dir = tempfile::tempdir().unwrap();
    let cli = AppConfig {
        mappings_dir: Some(dir.path().to_path_buf()),
        color: TerminalCapsDetectIntent::Never,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli).unwrap();
    assert_eq!(config.color, TerminalCapsDetectIntent::Never);
}

#[test]
fn test_resolve_validates() {
    let cli = AppConfig {
        mappings_dir: Some(PathBuf::from("/no/such/iconmatch/dir")),
        ..AppConfig::default()
    };
    assert!(matches!(
        AppConfig::resolve(cli),
        Err(ConfigError::InvalidMappingsDir { .. })
    ));
}

#[test]
fn test_global_is_consistent() {
    // Only main initializes the global config
    if let Some(config) = AppConfig::global() {
        assert!(config.suggestion_limit > 0);
    }
}

#[test]
fn test_missing_env_files_are_ignored() {
    // Neither dotenv file exists in the crate directory during tests
    assert!(load_env_files().is_ok());
}
