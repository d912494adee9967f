use std::time::Instant;

use mklookup_engine::{ToastPhase, ToastStack};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::severity_to_color;
use crate::presentation::renderers::layout::TOAST_HEIGHT;

/// Stacked toasts, oldest on top. Exiting toasts are drawn dimmed.
pub struct ToastsView<'a> {
    toasts: &'a ToastStack,
    now: Instant,
}

impl<'a> ToastsView<'a> {
    pub fn new(toasts: &'a ToastStack, now: Instant) -> Self {
        Self { toasts, now }
    }
}

impl<'a> Widget for ToastsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for toast in self.toasts.iter() {
            if y.saturating_add(TOAST_HEIGHT) > area.bottom() {
                break;
            }

            let mut style = Style::default().fg(severity_to_color(toast.severity));
            match toast.phase(self.now) {
                ToastPhase::Visible => {}
                ToastPhase::Exiting => style = style.add_modifier(Modifier::DIM),
                ToastPhase::Expired => continue,
            }

            let rect = Rect::new(area.x, y, area.width, TOAST_HEIGHT);
            Clear.render(rect, buf);
            Paragraph::new(Line::from(vec![
                Span::raw(format!("{} ", toast.severity.icon())),
                Span::styled(toast.message.as_str(), style),
            ]))
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(rect, buf);

            y += TOAST_HEIGHT;
        }
    }
}
