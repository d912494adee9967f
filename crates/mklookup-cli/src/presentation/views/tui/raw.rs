use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Pretty-printed `customer_data`.
pub struct RawPanelView<'a> {
    json: &'a str,
}

impl<'a> RawPanelView<'a> {
    pub fn new(json: &'a str) -> Self {
        Self { json }
    }
}

impl<'a> Widget for RawPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.json)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title("Raw JSON Data")
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
