//! Summary history persistence
//!
//! A single named slot holding a JSON-encoded array of summaries,
//! behind an explicit storage port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Settings;
use crate::storage::Summary;

/// Storage port for the saved-summaries list.
pub trait SummaryStore: Send + Sync {
    /// Load the full list, newest last. A missing slot reads as empty.
    fn load(&self) -> Result<Vec<Summary>>;

    /// Append one record. Read-modify-append-write; existing records are
    /// never touched.
    fn append(&self, summary: &Summary) -> Result<()>;
}

/// JSON file implementation of the storage slot.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(settings: &Settings) -> Self {
        Self {
            path: settings.summaries_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SummaryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Summary>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read summaries: {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse summaries: {}", self.path.display()))
    }

    fn append(&self, summary: &Summary) -> Result<()> {
        let mut summaries = self.load()?;
        summaries.push(summary.clone());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&summaries)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write summaries: {}", self.path.display()))?;

        Ok(())
    }
}

/// Find a summary by id prefix, preferring an exact match.
pub fn find_by_prefix<'a>(summaries: &'a [Summary], prefix: &str) -> Option<&'a Summary> {
    summaries
        .iter()
        .find(|s| s.id == prefix)
        .or_else(|| summaries.iter().find(|s| s.id.starts_with(prefix)))
}
