//! Post-processing of raw model output
//!
//! Models occasionally prepend meta-commentary despite the system
//! instruction; this strips the common patterns.

/// Lead-in phrases stripped from the start of the response, first match
/// in list order wins and is applied once.
const META_PHRASES: &[&str] = &[
    "here's the summary:",
    "here is the summary:",
    "summary:",
    "here's a summary",
    "let me summarize",
    "i'll summarize",
    "let me help you",
    "i'll help you",
    "sure,",
    "okay,",
    "alright,",
    "certainly,",
];

/// Substrings that mark a whole line as meta-commentary. This filter is
/// deliberately coarse and can drop legitimate content lines containing
/// these phrases; callers should treat that as a known sharp edge.
const META_LINE_MARKERS: &[&str] = &["here's", "let me", "i'll", "i will", "i can"];

/// Clean raw model output: strip a leading boilerplate phrase, then drop
/// any remaining meta-commentary lines.
pub fn sanitize(raw: &str) -> String {
    let mut content = raw.trim().to_string();

    let lower = content.to_lowercase();
    for phrase in META_PHRASES {
        if lower.starts_with(phrase) {
            // Matched phrases are ASCII, so the byte offset is safe in the
            // original-cased text for any input that matched.
            content = content.get(phrase.len()..).unwrap_or("").trim().to_string();
            break;
        }
    }

    content
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            !META_LINE_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_boilerplate_phrase() {
        assert_eq!(sanitize("Here's the summary: Hello world"), "Hello world");
    }

    #[test]
    fn strips_prefix_and_meta_lines() {
        let raw = "Sure, the team discussed X.\nLet me know if needed.";
        assert_eq!(sanitize(raw), "the team discussed X.");
    }

    #[test]
    fn trims_plain_content() {
        assert_eq!(sanitize("  Plain content.  "), "Plain content.");
    }

    #[test]
    fn preserves_original_casing_after_prefix_strip() {
        assert_eq!(sanitize("SUMMARY: Key Points Follow"), "Key Points Follow");
    }

    #[test]
    fn only_first_matching_phrase_is_stripped() {
        // After "sure," is removed the remainder still starts with "okay,"
        // but only one pass is applied.
        assert_eq!(sanitize("Sure, okay, details"), "okay, details");
    }

    #[test]
    fn drops_lines_containing_meta_markers_anywhere() {
        let raw = "Point one.\nI will follow up on budget.\nPoint two.";
        assert_eq!(sanitize(raw), "Point one.\nPoint two.");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "Here's the summary: Hello world",
            "Sure, the team discussed X.\nLet me know if needed.",
            "  Plain content.  ",
            "**Roadmap reviewed.**",
        ] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n  "), "");
    }
}
