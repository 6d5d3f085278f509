//! Upload screen - pick a transcript file

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::path::{Path, PathBuf};

use crate::transcript::read_transcript;

/// Upload screen state
pub struct UploadScreen {
    input: String,
    error: Option<String>,
    loaded: Option<String>,
}

impl UploadScreen {
    pub fn new(file: Option<PathBuf>) -> Self {
        let mut screen = Self {
            input: String::new(),
            error: None,
            loaded: None,
        };

        if let Some(path) = file {
            screen.input = path.display().to_string();
            screen.load(&path);
        }

        screen
    }

    /// The upload screen is always in path-entry mode.
    pub fn editing(&self) -> bool {
        true
    }

    /// Take the transcript text once a file loads.
    pub fn take_loaded_text(&mut self) -> Option<String> {
        self.loaded.take()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => {
                let path = PathBuf::from(self.input.trim());
                self.load(&path);
            }
            _ => {}
        }
    }

    fn load(&mut self, path: &Path) {
        match read_transcript(path) {
            Ok(text) => {
                self.loaded = Some(text);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Path input
                Constraint::Length(3), // Error
                Constraint::Min(3),    // Hint
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new("recap - meeting transcript summarizer")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Transcript path (.txt) "),
            );
        frame.render_widget(input, chunks[1]);

        if let Some(error) = &self.error {
            let error = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Error "));
            frame.render_widget(error, chunks[2]);
        }

        let hint = Paragraph::new(
            "Type the path to a plain-text transcript and press Enter.\n\
             The file is read locally; only the summarization prompt leaves this machine.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Load  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }
}
