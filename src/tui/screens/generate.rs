//! Generate screen - settings editor with live debounced regeneration

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::sync::Arc;

use crate::email;
use crate::generate::SummaryGenerator;
use crate::llm::{Language, OutputFormat, PromptSettings, SummaryLength, SummaryProvider, ToneStyle};
use crate::storage::Summary;

const SETTING_ROWS: usize = 9;

/// Generate screen state
pub struct GenerateScreen {
    text: String,
    settings: PromptSettings,
    generator: Option<SummaryGenerator>,
    list_state: ListState,
    status: Option<String>,
}

impl GenerateScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            text: String::new(),
            settings: PromptSettings::default(),
            generator: None,
            list_state,
            status: None,
        }
    }

    /// Load a transcript and auto-trigger the first generation with
    /// fresh default settings.
    pub fn set_transcript(&mut self, text: String, provider: Arc<dyn SummaryProvider>) {
        self.dispose();

        self.text = text;
        self.settings = PromptSettings::default();
        self.status = None;

        let generator = SummaryGenerator::new(provider);
        generator.trigger(self.text.clone(), self.settings.clone());
        self.generator = Some(generator);
    }

    /// Tear down the generator; any in-flight generation is discarded.
    pub fn dispose(&mut self) {
        if let Some(generator) = self.generator.take() {
            generator.dispose();
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = Some(status.to_string());
    }

    /// Current summary if one has been generated.
    fn summary(&self) -> Option<String> {
        self.generator.as_ref().and_then(|g| g.summary())
    }

    /// Save the displayed summary; returns the record for the history list.
    pub fn save_summary(&mut self) -> Result<Option<Summary>> {
        let Some(content) = self.summary() else {
            self.status = Some("Nothing to save yet".to_string());
            return Ok(None);
        };

        let record = Summary::new(Summary::default_title(), content, self.text.clone());
        Ok(Some(record))
    }

    /// Hand the displayed summary to the mail client.
    pub fn email_summary(&mut self) {
        let Some(content) = self.summary() else {
            self.status = Some("Nothing to email yet".to_string());
            return;
        };

        let uri = email::mailto_uri(&Summary::default_title(), &content);
        match email::open_uri(&uri) {
            Ok(()) => self.status = Some("Opened mail client".to_string()),
            Err(err) => self.status = Some(format!("Email failed: {err}")),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state
                    .select(Some(if i == 0 { SETTING_ROWS - 1 } else { i - 1 }));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some((i + 1) % SETTING_ROWS));
            }
            KeyCode::Left => {
                self.adjust_selected(false);
            }
            KeyCode::Right | KeyCode::Enter => {
                self.adjust_selected(true);
            }
            KeyCode::Char('r') => {
                // Manual retrigger, e.g. after a transient provider error.
                self.retrigger();
            }
            _ => {}
        }
    }

    /// Mutate the selected setting and queue a debounced regeneration.
    fn adjust_selected(&mut self, forward: bool) {
        let Some(i) = self.list_state.selected() else {
            return;
        };

        match i {
            0 => {
                self.settings.tone_style = match self.settings.tone_style {
                    ToneStyle::Professional => ToneStyle::Casual,
                    ToneStyle::Casual => ToneStyle::Technical,
                    ToneStyle::Technical => ToneStyle::Professional,
                };
            }
            1 => {
                self.settings.output_format = match self.settings.output_format {
                    OutputFormat::Paragraphs => OutputFormat::Bullets,
                    OutputFormat::Bullets => OutputFormat::Numbered,
                    OutputFormat::Numbered => OutputFormat::Paragraphs,
                };
            }
            2 => {
                self.settings.language = match self.settings.language {
                    Language::English => Language::Spanish,
                    Language::Spanish => Language::French,
                    Language::French => Language::German,
                    Language::German => Language::English,
                };
            }
            3 => {
                self.settings.summary_length = match self.settings.summary_length {
                    SummaryLength::Short => SummaryLength::Medium,
                    SummaryLength::Medium => SummaryLength::Long,
                    SummaryLength::Long => SummaryLength::Short,
                };
            }
            4 => self.settings.include_action_items = !self.settings.include_action_items,
            5 => self.settings.include_datetime = !self.settings.include_datetime,
            6 => self.settings.include_participants = !self.settings.include_participants,
            7 => {
                let step = if forward { 0.1 } else { -0.1 };
                self.settings.temperature = (self.settings.temperature + step).clamp(0.0, 1.0);
            }
            8 => {
                let step: i64 = if forward { 100 } else { -100 };
                self.settings.max_tokens =
                    (self.settings.max_tokens as i64 + step).clamp(100, 4000) as u32;
            }
            _ => return,
        }

        self.retrigger();
    }

    fn retrigger(&mut self) {
        self.status = None;
        if let Some(generator) = &self.generator {
            generator.trigger(self.text.clone(), self.settings.clone());
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(30)])
            .split(chunks[0]);

        self.draw_settings(frame, panes[0]);
        self.draw_summary(frame, panes[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Select  "),
            Span::styled(" ←/→ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Change  "),
            Span::styled(" s ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Save  "),
            Span::styled(" m ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Email  "),
            Span::styled(" h ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" History  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[1]);
    }

    fn draw_settings(&mut self, frame: &mut Frame, area: Rect) {
        let rows = [
            ("Tone", format!("{:?}", self.settings.tone_style)),
            ("Format", format!("{:?}", self.settings.output_format)),
            ("Language", format!("{:?}", self.settings.language)),
            ("Length", format!("{:?}", self.settings.summary_length)),
            (
                "Action items",
                on_off(self.settings.include_action_items).to_string(),
            ),
            (
                "Datetime",
                on_off(self.settings.include_datetime).to_string(),
            ),
            (
                "Participants",
                on_off(self.settings.include_participants).to_string(),
            ),
            ("Temperature", format!("{:.1}", self.settings.temperature)),
            ("Max tokens", self.settings.max_tokens.to_string()),
        ];

        let items: Vec<ListItem> = rows
            .iter()
            .map(|(name, value)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<14}", name), Style::default().fg(Color::White)),
                    Span::styled(value.clone(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Settings ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_summary(&self, frame: &mut Frame, area: Rect) {
        let is_loading = self.generator.as_ref().map_or(false, |g| g.is_loading());
        let error = self.generator.as_ref().and_then(|g| g.error_message());

        let (title, border_color) = if is_loading {
            (" Summary (generating…) ", Color::Yellow)
        } else if error.is_some() {
            (" Summary (error) ", Color::Red)
        } else {
            (" Summary ", Color::Blue)
        };

        let mut lines: Vec<Line> = Vec::new();

        if let Some(message) = &self.status {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(""));
        }

        if let Some(message) = &error {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }

        // A stale summary stays visible while the next one loads.
        match self.summary() {
            Some(summary) => {
                for line in summary.lines() {
                    lines.push(Line::from(line.to_string()));
                }
            }
            None if !is_loading && error.is_none() => {
                lines.push(Line::from(Span::styled(
                    "Waiting for the first summary…",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            None => {}
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(paragraph, area);
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
