//! Summary generation coordinator
//!
//! Specializes the generic debounce coordinator to the
//! (transcript, settings) -> summary shape used by the views.

use std::sync::Arc;
use std::time::Duration;

use crate::generate::debounce::{DebounceCoordinator, DebounceOptions, OpFuture};
use crate::llm::{LlmError, PromptSettings, SummaryProvider};

/// Default debounce window for regeneration; settings edits arrive in
/// bursts, so this is wider than the generic default.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(1000);

pub struct SummaryGeneratorOptions {
    pub delay: Duration,
    pub on_success: Option<Box<dyn Fn(&String) + Send + Sync>>,
    pub on_error: Option<Box<dyn Fn(&LlmError) + Send + Sync>>,
}

impl Default for SummaryGeneratorOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_GENERATION_DELAY,
            on_success: None,
            on_error: None,
        }
    }
}

/// Debounced, cancelable wrapper around a [`SummaryProvider`].
pub struct SummaryGenerator {
    inner: DebounceCoordinator<(String, PromptSettings), String>,
}

impl SummaryGenerator {
    pub fn new(provider: Arc<dyn SummaryProvider>) -> Self {
        Self::with_options(provider, SummaryGeneratorOptions::default())
    }

    pub fn with_options(
        provider: Arc<dyn SummaryProvider>,
        options: SummaryGeneratorOptions,
    ) -> Self {
        let inner = DebounceCoordinator::new(
            move |(text, settings): (String, PromptSettings)| {
                let provider = Arc::clone(&provider);
                Box::pin(async move { provider.generate(&text, &settings).await })
                    as OpFuture<String, LlmError>
            },
            DebounceOptions {
                delay: options.delay,
                enabled: true,
                on_success: options.on_success,
                on_error: options.on_error,
            },
        );

        Self { inner }
    }

    /// Queue a (re)generation with the current transcript and settings.
    pub fn trigger(&self, text: String, settings: PromptSettings) {
        self.inner.trigger((text, settings));
    }

    pub fn reset(&self) {
        self.inner.reset();
    }

    pub fn dispose(&self) {
        self.inner.dispose();
    }

    pub fn summary(&self) -> Option<String> {
        self.inner.result()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    pub fn error_message(&self) -> Option<String> {
        self.inner.error_message()
    }
}
