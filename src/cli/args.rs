//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::llm::{Language, OutputFormat, SummaryLength, ToneStyle};

/// recap - Turn meeting transcripts into AI-powered summaries
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a transcript file
    Summarize {
        /// Path to a plain-text transcript
        file: PathBuf,

        /// Title for the summary (defaults to "Meeting Summary - <now>")
        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        generation: GenerationArgs,

        /// Save the summary to the history
        #[arg(short, long)]
        save: bool,

        /// Write the summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List saved summaries
    List {
        /// Maximum number of summaries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Search term to filter summaries by title
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View a saved summary
    View {
        /// Summary ID or partial ID
        id: String,
    },

    /// Build a mailto: link for a saved summary
    Email {
        /// Summary ID or partial ID
        id: String,

        /// Open the link with the platform mail handler
        #[arg(long)]
        open: bool,
    },

    /// Launch the interactive TUI
    Tui {
        /// Transcript to load on the upload screen
        file: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Generation settings shared by summarize and tui
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// Tone of the summary
    #[arg(long, value_enum, default_value = "professional")]
    pub tone: ToneStyle,

    /// Layout of the summary
    #[arg(long, value_enum, default_value = "paragraphs")]
    pub format: OutputFormat,

    /// Language of the final output
    #[arg(long, value_enum, default_value = "english")]
    pub language: Language,

    /// Length of the summary
    #[arg(long, value_enum, default_value = "medium")]
    pub length: SummaryLength,

    /// Output randomness, 0.0 - 1.0
    #[arg(long, default_value = "0.7")]
    pub temperature: f32,

    /// Cap on generated output tokens
    #[arg(long, default_value = "1000")]
    pub max_tokens: u32,

    /// Custom instruction for the Summary section
    #[arg(long)]
    pub prompt: Option<String>,

    /// Skip the Action Items section
    #[arg(long)]
    pub no_action_items: bool,

    /// Skip the meeting datetime line
    #[arg(long)]
    pub no_datetime: bool,

    /// Skip the Participants section
    #[arg(long)]
    pub no_participants: bool,
}

impl GenerationArgs {
    pub fn to_settings(&self) -> crate::llm::PromptSettings {
        crate::llm::PromptSettings {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            custom_prompt: self.prompt.clone(),
            tone_style: self.tone,
            output_format: self.format,
            language: self.language,
            summary_length: self.length,
            include_action_items: !self.no_action_items,
            include_datetime: !self.no_datetime,
            include_participants: !self.no_participants,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
