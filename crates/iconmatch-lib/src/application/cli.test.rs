use super::*;

#[test]
fn test_parse_match_command() {
    let cli = Cli::try_parse_from(["iconmatch", "match", "Blue Moon", "הציפור", "--json"]).unwrap();
    match cli.command {
        Some(Commands::Match { titles, json }) => {
            assert_eq!(titles, vec!["Blue Moon", "הציפור"]);
            assert!(json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_match_requires_a_title() {
    assert!(Cli::try_parse_from(["iconmatch", "match"]).is_err());
}

#[test]
fn test_parse_suggest_with_limit() {
    let cli = Cli::try_parse_from(["iconmatch", "suggest", "Rain", "-l", "5"]).unwrap();
    match cli.command {
        Some(Commands::Suggest { title, limit, json }) => {
            assert_eq!(title, "Rain");
            assert_eq!(limit, Some(5));
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "iconmatch",
        "--language",
        "en",
        "--mappings-dir",
        "/tmp/mappings",
        "coverage",
    ])
    .unwrap();

    assert_eq!(cli.config.language, "en");
    assert_eq!(
        cli.config.mappings_dir.as_deref(),
        Some(std::path::Path::new("/tmp/mappings"))
    );
    assert!(matches!(cli.command, Some(Commands::Coverage { json: false })));
}

#[test]
fn test_requires_mappings() {
    assert!(!Commands::Version.requires_mappings());
    assert!(Commands::Coverage { json: false }.requires_mappings());
}
