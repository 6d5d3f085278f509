//! Provider abstraction for summary generation

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::openai::OpenAiCompatibleClient;
use crate::llm::settings::PromptSettings;

/// Errors raised by summary generation.
///
/// All are terminal for the triggering call; nothing is retried.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No transcript text was provided; no network call is made.
    #[error("No text provided for summarization")]
    Validation,

    /// The provider credential is not configured; no network call is made.
    #[error("API key not found. Set llm.api_key in config or RECAP_GROQ_API_KEY.")]
    Configuration,

    /// Non-success HTTP status or malformed response body. Carries the
    /// provider's own message when present, else the HTTP status.
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Transport-level failure of the single HTTP attempt.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Generate a sanitized summary for the transcript text.
    async fn generate(&self, text: &str, settings: &PromptSettings) -> Result<String, LlmError>;
}

/// Build a summary provider from runtime settings.
pub fn build_provider(settings: &Settings) -> crate::Result<Box<dyn SummaryProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" | "openai-compatible" => {
            let client = OpenAiCompatibleClient::from_settings(settings)
                .map_err(|e| crate::RecapError::Config(e.to_string()))?;
            Ok(Box::new(client))
        }
        other => Err(crate::RecapError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: groq, openai-compatible",
            other
        ))),
    }
}
