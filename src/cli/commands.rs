//! CLI command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::args::{ConfigCommand, GenerationArgs};
use crate::config::Settings;
use crate::email;
use crate::llm::build_provider;
use crate::storage::{find_by_prefix, JsonFileStore, Summary, SummaryStore};
use crate::transcript::read_transcript;

/// Summarize a transcript file in one shot.
pub async fn summarize_file(
    settings: &Settings,
    file: &Path,
    title: Option<String>,
    generation: &GenerationArgs,
    save: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let text = read_transcript(file)?;
    let prompt_settings = generation.to_settings();

    let provider = build_provider(settings)?;
    let summary = provider.generate(&text, &prompt_settings).await?;

    if let Some(path) = &output {
        std::fs::write(path, &summary)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        println!("Summary written to: {}", path.display());
    } else {
        println!("{}", summary);
    }

    if save {
        let title = title.unwrap_or_else(Summary::default_title);
        let record = Summary::new(title, summary, text);
        let store = JsonFileStore::new(settings);
        store.append(&record)?;
        eprintln!();
        eprintln!("Saved to history: {}", record.id);
    }

    Ok(())
}

/// List saved summaries
pub fn list_summaries(settings: &Settings, limit: usize, search: Option<String>) -> Result<()> {
    let store = JsonFileStore::new(settings);
    let mut summaries = store.load()?;

    if let Some(query) = search {
        let query = query.to_lowercase();
        summaries.retain(|s| s.title.to_lowercase().contains(&query));
    }

    if summaries.is_empty() {
        println!("No summaries found");
        return Ok(());
    }

    println!("{:<15} {:<30} {:<18}", "ID", "Title", "Date");
    println!("{}", "-".repeat(65));

    // Newest first
    for summary in summaries.iter().rev().take(limit) {
        println!(
            "{:<15} {:<30} {:<18}",
            summary.id,
            truncate(&summary.title, 28),
            summary.timestamp.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

/// View a saved summary
pub fn view_summary(settings: &Settings, id: &str) -> Result<()> {
    let store = JsonFileStore::new(settings);
    let summaries = store.load()?;

    let summary = find_by_prefix(&summaries, id).context("Summary not found")?;

    println!("Title: {}", summary.title);
    println!("Date: {}", summary.timestamp.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", summary.content);
    println!();
    println!("--- Original transcript ({} chars) ---", summary.original_text.len());

    Ok(())
}

/// Build (and optionally open) a mailto: link for a saved summary
pub fn email_summary(settings: &Settings, id: &str, open: bool) -> Result<()> {
    let store = JsonFileStore::new(settings);
    let summaries = store.load()?;

    let summary = find_by_prefix(&summaries, id).context("Summary not found")?;

    let uri = email::mailto_uri(&summary.title, &summary.content);
    println!("{}", uri);

    if open {
        email::open_uri(&uri)?;
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
