//! Status Bar View Component
//!
//! Renders the bottom status line and the key reference.

use mklookup_engine::StatusLine;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::severity_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusLine,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusLine) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = severity_to_color(self.model.severity);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("{} ", self.model.icon())),
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[Tab]", key),
            Span::raw("focus "),
            Span::styled("[^G]", key),
            Span::raw("generate "),
            Span::styled("[^R]", key),
            Span::raw("raw "),
            Span::styled("[Esc]", key),
            Span::raw("quit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
