//! Whole-screen composition.

use std::time::Instant;

use mklookup_engine::{Focus, UiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{
    BadgeView, ButtonView, CheckboxView, ConfirmDialogView, DetailsView, InputView, RawPanelView,
    StatusBarView, ToastsView,
};
use crate::presentation::renderers::layout::{INPUT_LABEL, ScreenLayout};

pub struct ScreenView<'a> {
    state: &'a UiState,
    layout: &'a ScreenLayout,
    now: Instant,
}

impl<'a> ScreenView<'a> {
    pub fn new(state: &'a UiState, layout: &'a ScreenLayout, now: Instant) -> Self {
        Self { state, layout, now }
    }

    fn render_form(&self, buf: &mut Buffer) {
        let state = self.state;
        let layout = self.layout;

        Block::default()
            .title("Customer MK Lookup")
            .borders(Borders::ALL)
            .render(layout.form, buf);

        if layout.input.height > 0 && layout.input.x > layout.form.x {
            let label_x = layout.input.x.saturating_sub(INPUT_LABEL.len() as u16);
            buf.set_string(label_x, layout.input.y, INPUT_LABEL, Style::default());
        }
        InputView::new(&state.input, state.focus == Focus::Input).render(layout.input, buf);
        CheckboxView::new(state.corporate, state.focus == Focus::Corporate)
            .render(layout.corporate, buf);
        ButtonView::new(state.search_label())
            .focused(state.focus == Focus::Search)
            .enabled(!state.search_loading)
            .render(layout.search, buf);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let layout = self.layout;
        let Some(results) = &state.results else {
            return;
        };

        Block::default()
            .title("Customer Details")
            .borders(Borders::ALL)
            .render(area, buf);

        BadgeView::new(&results.badge).render(layout.badge, buf);

        if let Some(generate) = layout.generate {
            ButtonView::new(state.generate_label())
                .focused(state.focus == Focus::Generate)
                .enabled(!state.generate_loading)
                .render(generate, buf);
        }

        if let (Some(rect), Some(warning)) = (layout.warning, &results.session_warning) {
            Paragraph::new(Line::from(vec![
                Span::raw("⚠️ "),
                Span::styled(warning.as_str(), Style::default().fg(Color::Yellow)),
            ]))
            .wrap(Wrap { trim: true })
            .render(rect, buf);
        }

        let selected = (state.focus == Focus::Details).then_some(state.selected_row);
        DetailsView::new(results.rows(), state.details_scroll)
            .selected(selected)
            .drag(state.drag)
            .render(layout.details, buf);

        if let Some(toggle) = layout.raw_toggle {
            ButtonView::new(state.raw_toggle_label())
                .focused(state.focus == Focus::RawToggle)
                .render(toggle, buf);
        }

        if let Some(raw) = layout.raw {
            RawPanelView::new(&state.raw_json).render(raw, buf);
        }
    }
}

impl<'a> Widget for ScreenView<'a> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        self.render_form(buf);

        if let Some(results) = self.layout.results {
            self.render_results(results, buf);
        }

        StatusBarView::new(&self.state.status).render(self.layout.status, buf);
        ToastsView::new(&self.state.toasts, self.now).render(self.layout.toasts, buf);

        if let (Some(dialog), Some(layout)) = (&self.state.confirm, self.layout.dialog) {
            ConfirmDialogView::new(dialog, layout).render(layout.area, buf);
        }
    }
}
