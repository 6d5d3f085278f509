//! Deterministic prompt construction for meeting summaries

use crate::llm::settings::{Language, OutputFormat, PromptSettings, SummaryLength, ToneStyle};

const DEFAULT_SUMMARY_INSTRUCTION: &str = "Summarize the key points from this meeting:";

fn format_instructions(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Bullets => {
            "* Use bullet points for the summary\n* Each point should start with an asterisk"
        }
        OutputFormat::Numbered => {
            "1. Use numbered list\n2. Each point should be numbered sequentially"
        }
        OutputFormat::Paragraphs => "Use clear paragraphs separated by blank lines",
    }
}

fn length_instructions(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Short => "Maximum 3-4 key points or 2 paragraphs",
        SummaryLength::Medium => "Maximum 6-7 key points or 3-4 paragraphs",
        SummaryLength::Long => "Maximum 10-12 key points or 5-6 paragraphs",
    }
}

fn tone_instructions(tone: ToneStyle) -> &'static str {
    match tone {
        ToneStyle::Professional => "formal business language",
        ToneStyle::Casual => "conversational tone",
        ToneStyle::Technical => "precise technical terminology",
    }
}

/// Build the full instruction prompt for the provider.
///
/// The relative order of the blocks matters for output fidelity with the
/// downstream model: numbered constraints first, optional datetime and
/// participants lines, the Summary section body, optional action items,
/// the verbatim transcript, optional translation, closing reminder.
pub fn build_prompt(text: &str, settings: &PromptSettings) -> String {
    let mut prompt = String::from("Generate a meeting summary with these exact requirements:\n");
    prompt.push_str("1. NO introductory phrases\n");
    prompt.push_str("2. NO explanations\n");
    prompt.push_str("3. NO meta-commentary like 'here's the summary' or 'let me help'\n");
    prompt.push_str(&format!("4. Use {}\n", tone_instructions(settings.tone_style)));
    prompt.push_str(&format!(
        "5. Length: {}\n",
        length_instructions(settings.summary_length)
    ));
    prompt.push_str(&format!(
        "6. Format: {}\n\n",
        format_instructions(settings.output_format)
    ));

    if settings.include_datetime {
        prompt.push_str("Start with meeting datetime in **bold** if mentioned.\n");
    }

    if settings.include_participants {
        prompt.push_str("Include ### Participants section if mentioned.\n");
    }

    let summary_instruction = settings
        .custom_prompt
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(DEFAULT_SUMMARY_INSTRUCTION);
    prompt.push_str(&format!("### Summary\n{}\n\n", summary_instruction));

    if settings.include_action_items {
        prompt.push_str("End with ### Action Items section listing next steps.\n");
    }

    prompt.push_str(&format!(
        "\nTransform this meeting transcript into the requested format:\n\n{}",
        text
    ));

    if settings.language != Language::English {
        prompt.push_str(&format!(
            "\n\nTranslate the final output to {}.",
            settings.language.as_str()
        ));
    }

    prompt.push_str(
        "\n\nRemember to use proper markdown formatting and provide ONLY the final summary \
         without any additional text or explanations.",
    );

    prompt
}
