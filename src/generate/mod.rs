//! Debounced request coordination
//!
//! The generic coordinator coalesces rapid triggers into a single call;
//! the summary generator specializes it for the LLM provider.

mod debounce;
mod summary;

pub use debounce::{DebounceCoordinator, DebounceOptions, OpFuture, DEFAULT_DELAY};
pub use summary::{SummaryGenerator, SummaryGeneratorOptions, DEFAULT_GENERATION_DELAY};
