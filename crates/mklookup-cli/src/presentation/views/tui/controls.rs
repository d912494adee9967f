//! Form controls: text input, checkbox and buttons.

use mklookup_engine::InputField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::presentation::renderers::layout::CORPORATE_LABEL;

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// `[ label ]`
pub struct ButtonView<'a> {
    label: &'a str,
    focused: bool,
    enabled: bool,
}

impl<'a> ButtonView<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            enabled: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl<'a> Widget for ButtonView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = if !self.enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let line = Line::from(Span::styled(format!("[ {} ]", self.label), style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// `[x] Corporate`
pub struct CheckboxView {
    checked: bool,
    focused: bool,
}

impl CheckboxView {
    pub fn new(checked: bool, focused: bool) -> Self {
        Self { checked, focused }
    }
}

impl Widget for CheckboxView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mark = if self.checked { "x" } else { " " };
        let line = Line::from(Span::styled(
            format!("[{}] {}", mark, CORPORATE_LABEL),
            focus_style(self.focused),
        ));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Bracketed single-line input. The cursor cell is drawn reversed while
/// focused; text scrolls horizontally to keep it visible.
pub struct InputView<'a> {
    field: &'a InputField,
    focused: bool,
}

impl<'a> InputView<'a> {
    pub fn new(field: &'a InputField, focused: bool) -> Self {
        Self { field, focused }
    }
}

impl<'a> Widget for InputView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let inner_width = usize::from(area.width - 2);
        let chars: Vec<char> = self.field.text().chars().collect();
        let cursor = self.field.cursor();
        let offset = (cursor + 1).saturating_sub(inner_width);

        let bracket = focus_style(self.focused);
        buf.set_string(area.x, area.y, "[", bracket);
        buf.set_string(area.right() - 1, area.y, "]", bracket);

        for i in 0..inner_width {
            let index = offset + i;
            let c = chars.get(index).copied().unwrap_or(' ');
            let mut style = Style::default().add_modifier(Modifier::UNDERLINED);
            if self.focused && index == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let x = area.x + 1 + i as u16;
            buf.set_string(x, area.y, c.to_string(), style);
        }
    }
}
