//! TUI module for recap
//!
//! Interactive terminal user interface using ratatui: upload a transcript,
//! tune settings with live debounced regeneration, browse saved summaries.

mod app;
pub mod screens;
pub mod widgets;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;
pub use app::{App, AppScreen};

/// Run the TUI application
pub async fn run(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(settings.clone(), file)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Tear down the generator before the terminal so no late resolution
    // touches state during shutdown.
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| app.draw(f))?;

        // Handle events with timeout so the summary pane refreshes while
        // a generation is in flight.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && route_key(app, key.code)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Route one key press. Returns true when the app should exit.
fn route_key(app: &mut App, code: KeyCode) -> Result<bool> {
    // Any key closes the help popup, Esc and 'q' included.
    if app.help_open() {
        app.toggle_help();
        return Ok(false);
    }

    // Text-entry screens get every key, including 'q'; Esc and '?' stay
    // global so quitting and help always work.
    if app.capturing_input() && code != KeyCode::Esc && code != KeyCode::Char('?') {
        app.handle_key(code)?;
        return Ok(false);
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.should_quit() {
                return Ok(true);
            }
            app.handle_back();
        }
        KeyCode::Char('?') => {
            app.toggle_help();
        }
        _ => {
            app.handle_key(code)?;
        }
    }

    Ok(false)
}
