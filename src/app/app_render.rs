use std::time::Instant;

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::presenter::ToastExt;

const KEY_HELP: [(&str, &str); 9] = [
    ("d", "debug"),
    ("e", "error"),
    ("i", "info"),
    ("n", "notice"),
    ("s", "success"),
    ("w", "warning"),
    ("u", "update available"),
    ("x", "dismiss"),
    ("q", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let mut lines: Vec<Line> = vec![Line::default(); 4];
        lines.extend(KEY_HELP.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:>3}  ", key),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  Dismissed: {}", self.dismissed_count()),
            Style::default().fg(Color::DarkGray),
        )));

        let body = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" toast demo ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        let area = frame.area();
        frame.render_widget(body.with_toast_at(&mut self.presenter, now), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
