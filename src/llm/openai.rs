//! OpenAI-compatible chat-completions provider (Groq by default)

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{LlmError, SummaryProvider};
use crate::llm::prompt::build_prompt;
use crate::llm::sanitize::sanitize;
use crate::llm::settings::PromptSettings;

const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "qwen/qwen3-32b";

/// Fixed system instruction forbidding meta-commentary in the output.
const SYSTEM_INSTRUCTION: &str = "You are a meeting summary generator that ONLY outputs the \
final formatted summary. Never include phrases like 'let me think', 'here's the summary', or \
any other meta-commentary. Never explain what you're doing. Output should start directly with \
the summary content using proper markdown formatting.";

pub struct OpenAiCompatibleClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiCompatibleClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build HTTP client")?,
            api_key: settings.llm.api_key.trim().to_string(),
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl SummaryProvider for OpenAiCompatibleClient {
    async fn generate(&self, text: &str, settings: &PromptSettings) -> Result<String, LlmError> {
        if text.trim().is_empty() {
            return Err(LlmError::Validation);
        }

        if self.api_key.is_empty() {
            return Err(LlmError::Configuration);
        }

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            "requesting summary from provider"
        );

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(text, settings),
                },
            ],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the provider's own error message over the bare status.
            let message = response
                .json::<ChatCompletionErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error.map(|e| e.message))
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(LlmError::Provider { message });
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|_| {
            LlmError::Provider {
                message: "Invalid response format from API".to_string(),
            }
        })?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| LlmError::Provider {
                message: "Invalid response format from API".to_string(),
            })?;

        Ok(sanitize(&content))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionErrorResponse {
    error: Option<ChatCompletionError>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionError {
    message: String,
}
