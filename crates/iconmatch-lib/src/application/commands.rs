//! Command execution handlers

use crate::application::session::CommandSession;
use crate::application::{CliConfig, Commands};
use crate::display::Display;
use crate::matching::{BatchEntry, CoverageStats, MappingSource, SharedSynonym};
use crate::primitives::LogContext;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Execute the parsed command line with an already-resolved configuration
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            Display::status().message("iconmatch - match track titles to icon keywords");
            Display::status().subtle("Run 'iconmatch --help' for usage information");
            return Ok(());
        }
    };

    if !command.requires_mappings() {
        return handle_version();
    }

    let session = CommandSession::new(config.app_config)?;
    execute_command_with_session(command, &session).await
}

/// Execute a specific command against a provided session (for testing)
pub async fn execute_command_with_session<S: MappingSource>(
    command: Commands,
    session: &CommandSession<S>,
) -> Result<()> {
    match command {
        Commands::Version => handle_version(),
        Commands::Match { titles, json } => handle_match(session, titles, json),
        Commands::Suggest { title, limit, json } => handle_suggest(session, &title, limit, json),
        Commands::Batch { file, json } => handle_batch(session, &file, json).await,
        Commands::Coverage { json } => handle_coverage(session, json),
    }
}

fn handle_version() -> Result<()> {
    Display::status().emphasis(&format!("iconmatch {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn handle_match<S: MappingSource>(
    session: &CommandSession<S>,
    titles: Vec<String>,
    json: bool,
) -> Result<()> {
    let snapshot = session.snapshot();
    let entries: Vec<BatchEntry> = titles
        .into_iter()
        .map(|title| {
            let result = snapshot.match_title(session.matcher(), &title);
            BatchEntry { title, result }
        })
        .collect();

    if json {
        return print_json(&entries);
    }

    let limit = session.config().suggestion_limit;
    for entry in &entries {
        Display::status().match_result(&entry.title, &entry.result);
        if !entry.result.confidence.is_assignable() {
            let suggestions = snapshot.suggest(session.matcher(), &entry.title, limit);
            if !suggestions.is_empty() {
                Display::status().subtle("  closest keywords:");
                Display::status().suggestions(&suggestions);
            }
        }
    }
    Ok(())
}

fn handle_suggest<S: MappingSource>(
    session: &CommandSession<S>,
    title: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let limit = limit.unwrap_or(session.config().suggestion_limit);
    let suggestions = session.snapshot().suggest(session.matcher(), title, limit);

    if json {
        return print_json(&suggestions);
    }

    if suggestions.is_empty() {
        Display::status().info(&format!("No keyword overlaps '{}'", title));
    } else {
        Display::status().emphasis(&format!("Suggestions for '{}':", title));
        Display::status().suggestions(&suggestions);
    }
    Ok(())
}

async fn handle_batch<S: MappingSource>(
    session: &CommandSession<S>,
    file: &Path,
    json: bool,
) -> Result<()> {
    let titles = read_titles(file)?;
    crate::log_info!(
        &format!("matching titles from {}", file.display()),
        LogContext::with_progress("batch", titles.len() as u64)
    );

    let snapshot = session.snapshot();
    let runner = session.batch_runner();
    let outcome = runner.run(titles, &snapshot).await;

    if json {
        return print_json(&outcome);
    }

    for entry in &outcome.entries {
        Display::status().match_result(&entry.title, &entry.result);
    }
    Display::status().message("");
    Display::status().batch_summary(&outcome.stats);
    Ok(())
}

fn handle_coverage<S: MappingSource>(session: &CommandSession<S>, json: bool) -> Result<()> {
    let snapshot = session.snapshot();
    let coverage = snapshot.coverage();
    let shared = snapshot.synonyms().overlapping_synonyms();

    if json {
        #[derive(Serialize)]
        struct CoverageReport<'a> {
            language: &'a str,
            coverage: &'a CoverageStats,
            shared_synonyms: &'a [SharedSynonym],
        }
        return print_json(&CoverageReport {
            language: snapshot.language(),
            coverage: &coverage,
            shared_synonyms: &shared,
        });
    }

    Display::status().coverage(snapshot.language(), &coverage);
    for entry in &shared {
        let Some(winner) = entry.keywords.first() else {
            continue;
        };
        Display::status().warning(&format!(
            "synonym '{}' is shared by {}; '{}' wins exact matches",
            entry.synonym,
            entry.keywords.join(", "),
            winner
        ));
    }
    Ok(())
}

/// One title per line; surrounding whitespace trimmed, blank lines skipped
pub fn read_titles(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read titles from {}", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    Display::status().message(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
