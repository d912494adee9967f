//! Screen geometry for the terminal UI.
//!
//! Computed once per frame from the current [`UiState`]; the same rectangles
//! are used to draw the widgets and to hit-test mouse clicks, so what is
//! clicked is always what is on screen.

use mklookup_engine::{Focus, UiState};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

pub const INPUT_LABEL: &str = "Customer MK: ";
/// Visible text cells of the input, excluding the brackets.
pub const INPUT_WIDTH: u16 = 24;
pub const CORPORATE_LABEL: &str = "Corporate";
pub const BADGE_LABEL: &str = "SAP Customer Code: ";
pub const DIALOG_YES: &str = "Yes (y)";
pub const DIALOG_NO: &str = "No (n)";

const GAP: u16 = 2;
const TOAST_WIDTH: u16 = 50;
/// Rows taken by one toast, borders included.
pub const TOAST_HEIGHT: u16 = 3;
const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 8;

/// Width of a `[ label ]` button.
pub fn button_width(label: &str) -> u16 {
    text_width(label).saturating_add(4)
}

/// Width of the `[x] Corporate` checkbox.
pub fn checkbox_width() -> u16 {
    text_width(CORPORATE_LABEL).saturating_add(4)
}

pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// What a screen position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Control(Focus),
    Details,
    DialogYes,
    DialogNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    pub yes: Rect,
    pub no: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub form: Rect,
    pub input: Rect,
    pub corporate: Rect,
    pub search: Rect,

    /// Results block, present once a search has succeeded.
    pub results: Option<Rect>,
    pub badge: Rect,
    pub generate: Option<Rect>,
    pub warning: Option<Rect>,
    pub details: Rect,

    pub raw_toggle: Option<Rect>,
    pub raw: Option<Rect>,

    pub status: Rect,
    pub toasts: Rect,
    pub dialog: Option<DialogLayout>,
}

impl ScreenLayout {
    pub fn compute(area: Rect, state: &UiState) -> Self {
        let mut layout = Self::default();
        let show_results = state.results_visible && state.results.is_some();

        let mut constraints = vec![Constraint::Length(3)];
        if show_results {
            constraints.push(Constraint::Min(6));
            constraints.push(Constraint::Length(1));
            if state.raw_visible {
                constraints.push(Constraint::Percentage(40));
            }
        } else {
            constraints.push(Constraint::Min(0));
        }
        constraints.push(Constraint::Length(3));
        let chunks = Layout::vertical(constraints).split(area);

        layout.form = chunks[0];
        layout.status = chunks[chunks.len() - 1];
        layout.place_form(state);

        if show_results {
            layout.results = Some(chunks[1]);
            layout.place_results(chunks[1], state);

            let toggle_row = chunks[2];
            let mut x = toggle_row.x.saturating_add(1);
            layout.raw_toggle = Some(take(
                &mut x,
                toggle_row,
                button_width(state.raw_toggle_label()),
            ));
            if state.raw_visible {
                layout.raw = Some(chunks[3]);
            }
        }

        layout.toasts = toast_area(area, state.toasts.len());
        if state.confirm.is_some() {
            layout.dialog = Some(dialog_layout(area));
        }
        layout
    }

    fn place_form(&mut self, state: &UiState) {
        let inner = Block::default().borders(Borders::ALL).inner(self.form);
        let row = Rect { height: inner.height.min(1), ..inner };

        let mut x = row.x;
        take(&mut x, row, text_width(INPUT_LABEL));
        self.input = take(&mut x, row, INPUT_WIDTH + 2);
        x = x.saturating_add(GAP);
        self.corporate = take(&mut x, row, checkbox_width());
        x = x.saturating_add(GAP);
        self.search = take(&mut x, row, button_width(state.search_label()));
    }

    fn place_results(&mut self, area: Rect, state: &UiState) {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let bottom = inner.bottom();
        let mut y = inner.y;

        self.badge = Rect { height: inner.height.min(1), ..inner };
        y = y.saturating_add(1).min(bottom);

        let Some(results) = &state.results else {
            return;
        };

        if state.generate_visible() {
            let mut x = inner
                .x
                .saturating_add(text_width(BADGE_LABEL))
                .saturating_add(text_width(&results.badge.text))
                .saturating_add(GAP + 1);
            self.generate = Some(take(
                &mut x,
                self.badge,
                button_width(state.generate_label()),
            ));
        }

        if results.session_warning.is_some() {
            let height = 2.min(bottom - y);
            self.warning = Some(Rect::new(inner.x, y, inner.width, height));
            y += height;
        }

        // One blank line between the header and the rows.
        y = y.saturating_add(1).min(bottom);
        self.details = Rect::new(inner.x, y, inner.width, bottom - y);
    }

    /// Resolves a click position. While the dialog is open only its buttons
    /// respond.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        let pos = Position::new(x, y);

        if let Some(dialog) = &self.dialog {
            if dialog.yes.contains(pos) {
                return Some(Hit::DialogYes);
            }
            if dialog.no.contains(pos) {
                return Some(Hit::DialogNo);
            }
            return None;
        }

        let controls = [
            (Some(self.input), Focus::Input),
            (Some(self.corporate), Focus::Corporate),
            (Some(self.search), Focus::Search),
            (self.generate, Focus::Generate),
            (self.raw_toggle, Focus::RawToggle),
        ];
        for (rect, focus) in controls {
            if rect.is_some_and(|r| r.contains(pos)) {
                return Some(Hit::Control(focus));
            }
        }

        if self.results.is_some() && self.details.contains(pos) {
            return Some(Hit::Details);
        }
        None
    }

    pub fn in_details(&self, x: u16, y: u16) -> bool {
        self.results.is_some() && self.details.contains(Position::new(x, y))
    }
}

/// Takes `width` cells of `row` starting at `x`, clamped to the row.
fn take(x: &mut u16, row: Rect, width: u16) -> Rect {
    let right = row.right();
    let start = (*x).clamp(row.x, right);
    let width = width.min(right - start);
    *x = start + width;
    Rect::new(start, row.y, width, row.height)
}

fn toast_area(area: Rect, count: usize) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let wanted = u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(TOAST_HEIGHT);
    let height = wanted.min(area.height);
    Rect::new(area.right() - width, area.y, width, height)
}

fn dialog_layout(area: Rect) -> DialogLayout {
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let inner = Block::default().borders(Borders::ALL).inner(dialog);
    let row = Rect::new(
        inner.x,
        inner.bottom().saturating_sub(1).max(inner.y),
        inner.width,
        inner.height.min(1),
    );
    let mut x = row.x.saturating_add(GAP);
    let yes = take(&mut x, row, button_width(DIALOG_YES));
    x = x.saturating_add(GAP);
    let no = take(&mut x, row, button_width(DIALOG_NO));

    DialogLayout {
        area: dialog,
        yes,
        no,
    }
}
