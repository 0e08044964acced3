use iconmatch_lib::application::cli::Cli;
use iconmatch_lib::application::config::AppConfig;
use iconmatch_lib::application::EnvironmentConfig;
use iconmatch_lib::primitives::{ConfigError, LogFormat, TerminalCapsDetectIntent};
use clap::Parser;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.language, "he");
    assert_eq!(config.suggestion_limit, 3);
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
}

#[test]
fn test_cli_options_flow_into_resolved_config() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "iconmatch",
        "--mappings-dir",
        dir_arg.as_str(),
        "--language",
        "EN",
        "--log-format",
        "json",
        "--suggestion-limit",
        "9",
        "coverage",
    ])
    .unwrap();

    let config = AppConfig::resolve(cli.config).unwrap();
    assert_eq!(config.language, "en");
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.suggestion_limit, 9);
    assert_eq!(config.mappings_dir.as_deref(), Some(dir.path()));
}

#[test]
fn test_invalid_enum_values_are_rejected_by_cli() {
    assert!(Cli::try_parse_from(["iconmatch", "--color", "sometimes", "coverage"]).is_err());
    assert!(Cli::try_parse_from(["iconmatch", "--log-output", "file", "coverage"]).is_err());
}

#[test]
fn test_unsupported_language_fails_validation() {
    let mut config = AppConfig {
        language: "klingon".to_string(),
        ..AppConfig::default()
    };

    match config.validate() {
        Err(ConfigError::UnsupportedLanguage { language, known }) => {
            assert_eq!(language, "klingon");
            assert!(known.contains("he"));
        }
        other => panic!("expected UnsupportedLanguage, got {:?}", other),
    }
}

#[test]
fn test_environment_color_rules_compose_with_cli() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let color = env.apply_color_config(TerminalCapsDetectIntent::Auto);

    let cli_color = AppConfig {
        color: TerminalCapsDetectIntent::Always,
        ..AppConfig::default()
    };
    let merged = AppConfig {
        color,
        ..AppConfig::default()
    }
    .merge_with(cli_color);
    assert_eq!(merged.color, TerminalCapsDetectIntent::Always);
}
