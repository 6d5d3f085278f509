//! recap - Turn meeting transcripts into AI-powered summaries
//!
//! Entry point for the recap CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recap::cli::{Cli, Commands};
use recap::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            recap::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;
            settings.ensure_dirs()?;

            // Execute command
            match command {
                Commands::Summarize {
                    file,
                    title,
                    generation,
                    save,
                    output,
                } => {
                    recap::cli::commands::summarize_file(
                        &settings,
                        &file,
                        title,
                        &generation,
                        save,
                        output,
                    )
                    .await?;
                }
                Commands::List { limit, search } => {
                    recap::cli::commands::list_summaries(&settings, limit, search)?;
                }
                Commands::View { id } => {
                    recap::cli::commands::view_summary(&settings, &id)?;
                }
                Commands::Email { id, open } => {
                    recap::cli::commands::email_summary(&settings, &id, open)?;
                }
                Commands::Tui { file } => {
                    recap::tui::run(&settings, file).await?;
                }
                Commands::Config(config_cmd) => {
                    recap::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
