//! Command handlers run against a real mappings directory

use anyhow::{Result, anyhow};
use clap::Parser;
use iconmatch_lib::application::cli::{Cli, Commands};
use iconmatch_lib::application::{AppConfig, CommandSession, execute_command_with_session};
use iconmatch_tests::MappingDirFixture;

fn parse(args: &[&str]) -> Result<Commands> {
    let cli = Cli::try_parse_from(std::iter::once("iconmatch").chain(args.iter().copied()))?;
    cli.command.ok_or_else(|| anyhow!("no subcommand in {:?}", args))
}

#[tokio::test]
async fn match_command_runs_against_directory() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let session = fixture.session("he")?;

    let command = parse(&["match", "הציפור ששכחה לעוף", "Advanced Calculus"])?;
    execute_command_with_session(command, &session).await?;

    let command = parse(&["match", "Blue Moon", "--json"])?;
    execute_command_with_session(command, &session).await
}

#[tokio::test]
async fn suggest_and_coverage_commands() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let session = fixture.session("he")?;

    for args in [
        &["suggest", "rainbows", "--limit", "2"][..],
        &["suggest", "Advanced Calculus", "--json"][..],
        &["coverage"][..],
        &["coverage", "--json"][..],
    ] {
        execute_command_with_session(parse(args)?, &session).await?;
    }
    Ok(())
}

#[tokio::test]
async fn batch_command_reads_titles_file() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    let titles = fixture.write_raw("titles.txt", "הציפור ששכחה לעוף\n\nSunflower\n")?;
    let session = fixture.session("he")?;

    let path = titles.to_string_lossy().into_owned();
    execute_command_with_session(parse(&["batch", &path, "--json"])?, &session).await?;

    let missing = fixture.path().join("missing.txt").to_string_lossy().into_owned();
    let result = execute_command_with_session(parse(&["batch", &missing])?, &session).await;
    assert!(result.is_err());
    Ok(())
}

#[test]
fn config_rejects_unsupported_language() -> Result<()> {
    let fixture = MappingDirFixture::hebrew()?;
    assert!(fixture.config("fr").is_err());
    Ok(())
}

#[test]
fn session_uses_configured_language() -> Result<()> {
    let fixture = MappingDirFixture::new()?;
    fixture.write_keywords("en", r#"{"moon": ["lunar"]}"#)?;
    fixture.write_icons("en", &serde_json::json!({"moon": "mdi:moon"}))?;

    let config = AppConfig {
        mappings_dir: Some(fixture.path().to_path_buf()),
        language: "en".to_string(),
        ..AppConfig::default()
    };
    let session = CommandSession::new(config)?;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.language(), "en");

    let result = snapshot.match_title(session.matcher(), "Lunar Eclipse");
    assert_eq!(result.external_id.as_deref(), Some("mdi:moon"));
    Ok(())
}
