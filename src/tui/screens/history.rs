//! History screen - browse saved summaries

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::email;
use crate::storage::Summary;

/// History screen state
pub struct HistoryScreen {
    summaries: Vec<Summary>,
    recent_count: usize,
    state: ListState,
}

impl HistoryScreen {
    /// Shows at most the `recent_count` newest records.
    pub fn new(mut summaries: Vec<Summary>, recent_count: usize) -> Self {
        // Newest first
        summaries.reverse();
        summaries.truncate(recent_count);

        let mut state = ListState::default();
        if !summaries.is_empty() {
            state.select(Some(0));
        }

        Self {
            summaries,
            recent_count,
            state,
        }
    }

    /// Add a freshly saved record at the top, dropping the oldest shown
    /// entry once the recent window is full.
    pub fn push(&mut self, summary: Summary) {
        self.summaries.insert(0, summary);
        self.summaries.truncate(self.recent_count);
        match self.state.selected() {
            None => self.state.select(Some(0)),
            Some(i) if i >= self.summaries.len() => {
                self.state.select(Some(self.summaries.len().saturating_sub(1)));
            }
            Some(_) => {}
        }
    }

    fn selected(&self) -> Option<&Summary> {
        self.state.selected().and_then(|i| self.summaries.get(i))
    }

    pub fn email_selected(&self) -> Result<()> {
        if let Some(summary) = self.selected() {
            let uri = email::mailto_uri(&summary.title, &summary.content);
            email::open_uri(&uri)?;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            _ => {}
        }
    }

    fn next(&mut self) {
        if self.summaries.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i >= self.summaries.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.summaries.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => self.summaries.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[0]);

        let items: Vec<ListItem> = self
            .summaries
            .iter()
            .map(|summary| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        truncate(&summary.title, 24),
                        Style::default().fg(Color::White),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        summary.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" History ({}) ", self.summaries.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, panes[0], &mut self.state);

        let preview = match self.selected() {
            Some(summary) => summary.content.clone(),
            None => "No saved summaries yet. Save one from the generate screen with [s]."
                .to_string(),
        };

        let preview = Paragraph::new(preview)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Preview ").borders(Borders::ALL));
        frame.render_widget(preview, panes[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Navigate  "),
            Span::styled(" m ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Email  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[1]);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> Summary {
        Summary::new(title.to_string(), "content".to_string(), "text".to_string())
    }

    #[test]
    fn caps_list_to_recent_count_newest_first() {
        let summaries: Vec<Summary> = (0..25).map(|i| record(&format!("s{i}"))).collect();
        let screen = HistoryScreen::new(summaries, 20);

        assert_eq!(screen.summaries.len(), 20);
        assert_eq!(screen.summaries[0].title, "s24");
        assert_eq!(screen.summaries[19].title, "s5");
    }

    #[test]
    fn push_evicts_oldest_once_window_is_full() {
        let summaries: Vec<Summary> = (0..3).map(|i| record(&format!("s{i}"))).collect();
        let mut screen = HistoryScreen::new(summaries, 3);

        screen.push(record("fresh"));

        assert_eq!(screen.summaries.len(), 3);
        assert_eq!(screen.summaries[0].title, "fresh");
        assert_eq!(screen.summaries[2].title, "s1");
    }
}
