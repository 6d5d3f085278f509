//! Data models for storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved summary record.
///
/// Created only on explicit save and never mutated afterwards; the history
/// list is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Opaque unique identifier, derived from the creation time
    pub id: String,

    /// User-provided or auto-generated title
    pub title: String,

    /// The (possibly edited) summary text
    pub content: String,

    /// Creation timestamp, ISO-8601 on the wire
    pub timestamp: DateTime<Utc>,

    /// The transcript the summary was generated from
    pub original_text: String,
}

impl Summary {
    /// Create a new summary record stamped with the current time.
    pub fn new(title: String, content: String, original_text: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            title,
            content,
            timestamp: now,
            original_text,
        }
    }

    /// Default title shape when the user does not provide one.
    pub fn default_title() -> String {
        format!(
            "Meeting Summary - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M")
        )
    }
}
