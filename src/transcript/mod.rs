//! Transcript file input boundary
//!
//! Reads a plain-text transcript from disk. Nothing is ever uploaded
//! anywhere except as part of the summarization prompt.

use std::path::Path;

use crate::{RecapError, Result};

/// Read a transcript file as UTF-8 text.
///
/// Non-`.txt` extensions are accepted but logged, matching the lenient
/// drop-target behaviour of the upload flow.
pub fn read_transcript(path: &Path) -> Result<String> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        tracing::warn!(path = %path.display(), "transcript does not have a .txt extension");
    }

    let bytes = std::fs::read(path).map_err(|e| RecapError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|_| RecapError::FileRead {
        path: path.display().to_string(),
        reason: "file is not valid UTF-8 text".to_string(),
    })
}
