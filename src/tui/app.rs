//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::{build_provider, SummaryProvider};
use crate::storage::{JsonFileStore, SummaryStore};
use crate::tui::screens::{GenerateScreen, HistoryScreen, UploadScreen};
use crate::tui::widgets::HelpPopup;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Upload,
    Generate,
    History,
}

/// Main application state
pub struct App {
    settings: Settings,
    provider: Arc<dyn SummaryProvider>,
    current_screen: AppScreen,
    previous_screen: Option<AppScreen>,
    show_help: bool,

    // Screen states
    upload: UploadScreen,
    generate: GenerateScreen,
    history: HistoryScreen,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: Settings, file: Option<PathBuf>) -> Result<Self> {
        let provider: Arc<dyn SummaryProvider> = Arc::from(build_provider(&settings)?);

        let store = JsonFileStore::new(&settings);
        let summaries = store.load()?;
        let settings_recent = settings.tui.recent_count;

        let mut app = Self {
            settings,
            provider,
            current_screen: AppScreen::Upload,
            previous_screen: None,
            show_help: false,
            upload: UploadScreen::new(file),
            generate: GenerateScreen::new(),
            history: HistoryScreen::new(summaries, settings_recent),
        };

        // A transcript passed on the command line skips the upload screen.
        app.try_load_transcript();
        Ok(app)
    }

    fn try_load_transcript(&mut self) {
        if let Some(text) = self.upload.take_loaded_text() {
            self.generate
                .set_transcript(text, Arc::clone(&self.provider));
            self.switch_screen(AppScreen::Generate);
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        match self.current_screen {
            AppScreen::Upload => {
                self.upload.draw(frame, area);
            }
            AppScreen::Generate => {
                self.generate.draw(frame, area);
            }
            AppScreen::History => {
                self.history.draw(frame, area);
            }
        }

        // Draw help popup if active
        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    /// Whether the active screen consumes raw text input
    pub fn capturing_input(&self) -> bool {
        self.current_screen == AppScreen::Upload && self.upload.editing()
    }

    pub fn help_open(&self) -> bool {
        self.show_help
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        match self.current_screen {
            AppScreen::Upload => {
                self.upload.handle_key(key);
                self.try_load_transcript();
            }
            AppScreen::Generate => {
                self.handle_generate_key(key)?;
            }
            AppScreen::History => {
                self.handle_history_key(key)?;
            }
        }

        Ok(())
    }

    fn handle_generate_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('s') => {
                if let Some(record) = self.generate.save_summary()? {
                    let store = JsonFileStore::new(&self.settings);
                    store.append(&record)?;
                    self.history.push(record);
                    self.generate.set_status("Saved to history");
                }
            }
            KeyCode::Char('m') => {
                self.generate.email_summary();
            }
            KeyCode::Char('h') | KeyCode::Tab => {
                self.switch_screen(AppScreen::History);
            }
            other => {
                self.generate.handle_key(other);
            }
        }
        Ok(())
    }

    fn handle_history_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('m') => {
                if let Err(err) = self.history.email_selected() {
                    tracing::warn!("email hand-off failed: {err}");
                }
            }
            other => {
                self.history.handle_key(other);
            }
        }
        Ok(())
    }

    /// Switch to a different screen
    fn switch_screen(&mut self, screen: AppScreen) {
        self.previous_screen = Some(self.current_screen);
        self.current_screen = screen;
    }

    /// Handle back navigation
    pub fn handle_back(&mut self) {
        if let Some(prev) = self.previous_screen.take() {
            // Leaving the generate flow for a new upload unmounts the
            // generator; late resolutions must not surface afterwards.
            if self.current_screen == AppScreen::Generate && prev == AppScreen::Upload {
                self.generate.dispose();
            }
            self.current_screen = prev;
        } else if self.current_screen != AppScreen::Upload {
            self.current_screen = AppScreen::Upload;
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.current_screen == AppScreen::Upload
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Dispose of background work before terminal teardown
    pub fn shutdown(&mut self) {
        self.generate.dispose();
    }
}
