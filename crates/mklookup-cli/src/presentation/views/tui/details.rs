//! Results panel: SAP badge and the reorderable detail rows.

use mklookup_engine::render::NO_DATA;
use mklookup_engine::{DragSession, RenderedRow, SapBadge};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::severity_to_color;
use crate::presentation::renderers::layout::BADGE_LABEL;

pub struct BadgeView<'a> {
    badge: &'a SapBadge,
}

impl<'a> BadgeView<'a> {
    pub fn new(badge: &'a SapBadge) -> Self {
        Self { badge }
    }
}

impl<'a> Widget for BadgeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let color = severity_to_color(self.badge.level);
        let line = Line::from(vec![
            Span::raw(BADGE_LABEL),
            Span::styled(
                self.badge.text.as_str(),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// One line per row, starting at `scroll`.
pub struct DetailsView<'a> {
    rows: &'a [RenderedRow],
    scroll: usize,
    selected: Option<usize>,
    drag: Option<DragSession>,
}

impl<'a> DetailsView<'a> {
    pub fn new(rows: &'a [RenderedRow], scroll: usize) -> Self {
        Self {
            rows,
            scroll,
            selected: None,
            drag: None,
        }
    }

    /// Row cursor, shown only while the panel has focus.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn drag(mut self, drag: Option<DragSession>) -> Self {
        self.drag = drag;
        self
    }
}

impl<'a> Widget for DetailsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if self.rows.is_empty() {
            let line = Line::from(Span::styled(
                NO_DATA,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        let visible = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(usize::from(area.height));

        for (line_no, (index, row)) in visible.enumerate() {
            let y = area.y + line_no as u16;
            let dragging = self.drag.is_some_and(|d| d.dragged == index);
            let hovered = self.drag.is_some_and(|d| d.hover == Some(index));

            let handle = if dragging { "≡ " } else { "  " };
            let marker = if row.highlighted { "* " } else { "  " };
            let label_style = if row.highlighted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            let line = Line::from(vec![
                Span::styled(handle, Style::default().fg(Color::Magenta)),
                Span::raw(marker),
                Span::styled(
                    format!("{:<width$}", row.label, width = label_width),
                    label_style,
                ),
                Span::raw("  "),
                Span::raw(row.value.as_str()),
            ]);

            let mut row_style = Style::default();
            if self.selected == Some(index) {
                row_style = row_style.add_modifier(Modifier::REVERSED);
            }
            if dragging {
                row_style = row_style.bg(Color::DarkGray);
            }
            if hovered {
                row_style = row_style.add_modifier(Modifier::UNDERLINED);
            }

            let row_area = Rect::new(area.x, y, area.width, 1);
            buf.set_style(row_area, row_style);
            buf.set_line(area.x, y, &line.patch_style(row_style), area.width);
        }
    }
}
