//! recap - A lightweight CLI tool for turning meeting transcripts into AI-powered summaries
//!
//! Upload a plain-text transcript, tune the generation settings, and let an
//! OpenAI-compatible provider write the summary.

pub mod cli;
pub mod config;
pub mod email;
pub mod generate;
pub mod llm;
pub mod storage;
pub mod transcript;
pub mod tui;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read transcript '{path}': {reason}")]
    FileRead { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
