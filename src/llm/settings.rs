//! Generation settings for summary prompts

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tone of the generated summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    Professional,
    Casual,
    Technical,
}

/// Layout of the generated summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Paragraphs,
    Bullets,
    Numbered,
}

/// Target language for the final output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::German => "german",
        }
    }
}

/// How long the generated summary should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

/// User-configurable generation parameters.
///
/// Recreated fresh per session; there is no persisted identity. Every
/// mutation is a candidate trigger for regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Output randomness, 0.0 - 1.0
    pub temperature: f32,

    /// Cap on generated output length
    pub max_tokens: u32,

    /// Overrides the default instruction body of the Summary section
    pub custom_prompt: Option<String>,

    pub tone_style: ToneStyle,
    pub output_format: OutputFormat,
    pub language: Language,
    pub summary_length: SummaryLength,

    pub include_action_items: bool,
    pub include_datetime: bool,
    pub include_participants: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1000,
            custom_prompt: None,
            tone_style: ToneStyle::Professional,
            output_format: OutputFormat::Paragraphs,
            language: Language::English,
            summary_length: SummaryLength::Medium,
            include_action_items: true,
            include_datetime: true,
            include_participants: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_defaults() {
        let settings = PromptSettings::default();
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.max_tokens, 1000);
        assert_eq!(settings.tone_style, ToneStyle::Professional);
        assert_eq!(settings.output_format, OutputFormat::Paragraphs);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.summary_length, SummaryLength::Medium);
        assert!(settings.include_action_items);
        assert!(settings.include_datetime);
        assert!(settings.include_participants);
        assert!(settings.custom_prompt.is_none());
    }
}
