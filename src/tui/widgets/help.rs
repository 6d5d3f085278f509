//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::AppScreen;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, screen: AppScreen) {
        // Calculate popup area (centered, 60% width, 70% height)
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_x = (area.width - popup_width) / 2;
        let popup_y = (area.height - popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help_text = match screen {
            AppScreen::Upload => vec![
                Line::from(Span::styled(
                    "Upload Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Enter", Style::default().fg(Color::Yellow)),
                    Span::raw("   Load the transcript file"),
                ]),
                Line::from(vec![
                    Span::styled("Esc", Style::default().fg(Color::Yellow)),
                    Span::raw("     Quit application"),
                ]),
            ],
            AppScreen::Generate => vec![
                Line::from(Span::styled(
                    "Generate Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
                    Span::raw("     Select setting"),
                ]),
                Line::from(vec![
                    Span::styled("←/→", Style::default().fg(Color::Yellow)),
                    Span::raw("     Change value (regenerates)"),
                ]),
                Line::from(vec![
                    Span::styled("r", Style::default().fg(Color::Yellow)),
                    Span::raw("       Regenerate now"),
                ]),
                Line::from(vec![
                    Span::styled("s", Style::default().fg(Color::Yellow)),
                    Span::raw("       Save summary to history"),
                ]),
                Line::from(vec![
                    Span::styled("m", Style::default().fg(Color::Yellow)),
                    Span::raw("       Email summary"),
                ]),
                Line::from(vec![
                    Span::styled("h/Tab", Style::default().fg(Color::Yellow)),
                    Span::raw("   Open history"),
                ]),
                Line::from(vec![
                    Span::styled("Esc", Style::default().fg(Color::Yellow)),
                    Span::raw("     Back to upload"),
                ]),
            ],
            AppScreen::History => vec![
                Line::from(Span::styled(
                    "History Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
                    Span::raw("     Navigate summaries"),
                ]),
                Line::from(vec![
                    Span::styled("m", Style::default().fg(Color::Yellow)),
                    Span::raw("       Email selected summary"),
                ]),
                Line::from(vec![
                    Span::styled("Esc", Style::default().fg(Color::Yellow)),
                    Span::raw("     Back"),
                ]),
            ],
        };

        let help = Paragraph::new(help_text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Help (any key to close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(help, popup_area);
    }
}
