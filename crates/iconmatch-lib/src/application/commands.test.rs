use super::*;
use crate::application::config::AppConfig;
use crate::matching::{IconMapping, InMemorySource, SynonymTable};
use std::io::Write;

fn session() -> CommandSession<InMemorySource> {
    let source = InMemorySource::new().with_language(
        "he",
        SynonymTable::new()
            .with("bird", ["ציפור"])
            .with("moon", ["ירח", "לילה"])
            .with("night", ["לילה"]),
        IconMapping::new()
            .with("bird", "mdi:bird")
            .with("moon", "mdi:moon"),
    );
    CommandSession::with_source(AppConfig::default(), source).unwrap()
}

fn titles_file(lines: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(lines.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_titles_skips_blank_lines() {
    let file = titles_file("הציפור ששכחה לעוף\n\n   \n  שיר ירח  \nLullaby\n");
    let titles = read_titles(file.path()).unwrap();
    assert_eq!(titles, vec!["הציפור ששכחה לעוף", "שיר ירח", "Lullaby"]);
}

#[test]
fn test_read_titles_missing_file() {
    let err = read_titles(Path::new("/no/such/titles.txt")).unwrap_err();
    assert!(err.to_string().contains("/no/such/titles.txt"));
}

#[test]
fn test_session_rejects_unknown_language() {
    let config = AppConfig {
        language: "xx".to_string(),
        ..AppConfig::default()
    };
    assert!(CommandSession::with_source(config, InMemorySource::new()).is_err());
}

#[tokio::test]
async fn test_version_command() {
    assert!(execute_command_with_session(Commands::Version, &session()).await.is_ok());
}

#[tokio::test]
async fn test_match_command_text_and_json() {
    let session = session();
    for json in [false, true] {
        let command = Commands::Match {
            titles: vec!["הציפור ששכחה לעוף".to_string(), "Advanced Calculus".to_string()],
            json,
        };
        assert!(execute_command_with_session(command, &session).await.is_ok());
    }
}

#[tokio::test]
async fn test_suggest_command() {
    let command = Commands::Suggest {
        title: "ציפורים".to_string(),
        limit: Some(2),
        json: true,
    };
    assert!(execute_command_with_session(command, &session()).await.is_ok());
}

#[tokio::test]
async fn test_batch_command() {
    let file = titles_file("הציפור ששכחה לעוף\nשיר ירח\nLullaby\n");
    let command = Commands::Batch {
        file: file.path().to_path_buf(),
        json: false,
    };
    assert!(execute_command_with_session(command, &session()).await.is_ok());
}

#[tokio::test]
async fn test_batch_command_missing_file_fails() {
    let command = Commands::Batch {
        file: "/no/such/titles.txt".into(),
        json: true,
    };
    assert!(execute_command_with_session(command, &session()).await.is_err());
}

#[tokio::test]
async fn test_coverage_command() {
    for json in [false, true] {
        let command = Commands::Coverage { json };
        assert!(execute_command_with_session(command, &session()).await.is_ok());
    }
}

#[tokio::test]
async fn test_commands_tolerate_missing_language_tables() {
    // The store degrades to empty tables instead of failing
    let config = AppConfig {
        language: "en".to_string(),
        ..AppConfig::default()
    };
    let session = CommandSession::with_source(config, InMemorySource::new()).unwrap();
    let command = Commands::Match {
        titles: vec!["anything".to_string()],
        json: false,
    };
    assert!(execute_command_with_session(command, &session).await.is_ok());
}
