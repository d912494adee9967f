use mklookup_engine::ConfirmDialog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::ButtonView;
use crate::presentation::renderers::layout::{DIALOG_NO, DIALOG_YES, DialogLayout};

/// Modal confirmation before a SAP code is generated.
pub struct ConfirmDialogView<'a> {
    dialog: &'a ConfirmDialog,
    layout: DialogLayout,
}

impl<'a> ConfirmDialogView<'a> {
    pub fn new(dialog: &'a ConfirmDialog, layout: DialogLayout) -> Self {
        Self { dialog, layout }
    }
}

impl<'a> Widget for ConfirmDialogView<'a> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let area = self.layout.area;
        Clear.render(area, buf);

        let block = Block::default()
            .title("Confirm")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(vec![
            Line::styled(
                self.dialog.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(self.dialog.body()),
        ])
        .wrap(Wrap { trim: true })
        .render(text_area, buf);

        ButtonView::new(DIALOG_YES).focused(true).render(self.layout.yes, buf);
        ButtonView::new(DIALOG_NO).render(self.layout.no, buf);
    }
}
