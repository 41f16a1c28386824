use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::clock::Clock;
use crate::toast::render_toasts;

const KEY_HELP: [(&str, &str); 10] = [
    ("s", "success toast"),
    ("e", "error toast"),
    ("w", "warning toast"),
    ("i", "info toast"),
    ("n", "plain toast"),
    ("p", "start persistent \"Saving...\""),
    ("u", "update it to \"Saved!\""),
    ("d", "dismiss newest toast"),
    ("c", "clear all toasts"),
    ("q", "quit"),
];

impl<C: Clock> App<C> {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render_background(frame, area);

        let now = self.now();
        self.toast_layout = render_toasts(frame, area, self.toasts.toasts(), now);
    }

    fn render_background(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" toastr ")
            .border_style(Style::default().fg(Color::DarkGray));

        let mut lines: Vec<Line> = KEY_HELP
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>3} ", key),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*action),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                " Hover a toast to pause it. Active: {}",
                self.toasts.len()
            ),
            Style::default().fg(Color::Gray),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
