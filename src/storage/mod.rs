//! Storage module for recap
//!
//! Persists the saved-summaries history as a JSON-encoded list in a
//! single file slot.

mod models;
mod store;

pub use models::Summary;
pub use store::{find_by_prefix, JsonFileStore, SummaryStore};
