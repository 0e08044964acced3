use super::*;

#[test]
fn test_defaults_match_default_value_strings() {
    let config = AppConfig::default();
    assert_eq!(config.language, defaults::LANGUAGE);
    assert_eq!(config.suggestion_limit.to_string(), defaults::SUGGESTION_LIMIT);
    assert_eq!(config.fallback_delay_ms.to_string(), defaults::FALLBACK_DELAY_MS);
    assert_eq!(config.log_level.to_string(), defaults::LOG_LEVEL);
    assert_eq!(config.log_format, defaults::LOG_FORMAT.parse::<LogFormat>().unwrap());
    assert_eq!(config.log_output, defaults::LOG_OUTPUT.parse::<LogOutput>().unwrap());
    assert_eq!(config.color, defaults::TTY_CAPS_DETECT_INTENT.parse::<TerminalCapsDetectIntent>().unwrap());
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        mappings_dir: Some(PathBuf::from("/srv/mappings")),
        ..AppConfig::default()
    };
    let overrides = AppConfig {
        language: "en".to_string(),
        suggestion_limit: 5,
        color: TerminalCapsDetectIntent::Never,
        ..AppConfig::default()
    };

    let merged = base.merge_with(overrides);
    assert_eq!(merged.mappings_dir, Some(PathBuf::from("/srv/mappings")));
    assert_eq!(merged.language, "en");
    assert_eq!(merged.suggestion_limit, 5);
    assert_eq!(merged.color, TerminalCapsDetectIntent::Never);
    assert_eq!(merged.fallback_delay_ms, 1000);
}

#[test]
fn test_validate_rejects_unknown_language() {
    let mut config = AppConfig {
        language: "xx".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::UnsupportedLanguage { .. })
    ));
}

#[test]
fn test_validate_normalizes_language_and_fills_dir() {
    let mut config = AppConfig {
        language: " HE ".to_string(),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.language, "he");
    assert_eq!(config.mappings_dir, Some(std::env::current_dir().unwrap()));
}

#[test]
fn test_validate_rejects_missing_mappings_dir() {
    let mut config = AppConfig {
        mappings_dir: Some(PathBuf::from("/definitely/not/here/iconmatch")),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMappingsDir { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_suggestion_limit() {
    let mut config = AppConfig {
        suggestion_limit: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_logger_config_respects_explicit_color() {
    let config = AppConfig {
        log_level: 3,
        color: TerminalCapsDetectIntent::Never,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert!(!logger.color);
}

#[test]
fn test_fallback_delay_duration() {
    let config = AppConfig {
        fallback_delay_ms: 250,
        ..AppConfig::default()
    };
    assert_eq!(config.fallback_delay(), Duration::from_millis(250));
}
