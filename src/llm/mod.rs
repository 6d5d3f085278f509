//! LLM module for recap
//!
//! Prompt construction, response cleanup, and the provider-facing
//! summary client.

mod client;
mod openai;
mod prompt;
mod sanitize;
mod settings;

pub use client::{build_provider, LlmError, SummaryProvider};
pub use openai::OpenAiCompatibleClient;
pub use prompt::build_prompt;
pub use sanitize::sanitize;
pub use settings::{Language, OutputFormat, PromptSettings, SummaryLength, ToneStyle};
