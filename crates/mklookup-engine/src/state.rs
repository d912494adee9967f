//! UI state owned by the controller.

use std::time::Instant;

use crate::drag::{DragSession, RowBox, Viewport, layout_rows};
use crate::render::ResultsView;
use crate::status::{StatusLine, ToastStack};

pub const SHOW_RAW_LABEL: &str = "Show Raw JSON Data";
pub const HIDE_RAW_LABEL: &str = "Hide Raw JSON Data";
pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const GENERATE_LABEL: &str = "Generate SAP Code";
pub const GENERATING_LABEL: &str = "Generating...";

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Corporate,
    Search,
    Generate,
    RawToggle,
    Details,
}

const TAB_ORDER: [Focus; 6] = [
    Focus::Input,
    Focus::Corporate,
    Focus::Search,
    Focus::Generate,
    Focus::RawToggle,
    Focus::Details,
];

/// Single-line text input with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn set(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Pending confirmation before a SAP code is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub identifier: String,
}

impl ConfirmDialog {
    pub fn title(&self) -> String {
        format!("Generate SAP Customer Code for Customer MK: {}?", self.identifier)
    }

    pub fn body(&self) -> &'static str {
        "This will create the customer in SAP under the Mercedes-Benz schema for both Sales and After-Sales."
    }
}

#[derive(Debug)]
pub struct UiState {
    pub input: InputField,
    pub corporate: bool,
    pub focus: Focus,

    pub search_loading: bool,
    pub generate_loading: bool,

    pub results_visible: bool,
    pub results: Option<ResultsView>,
    pub raw_visible: bool,
    pub raw_json: String,

    /// Row cursor in the details panel.
    pub selected_row: usize,
    pub details_scroll: usize,
    pub details_viewport: Viewport,
    pub drag: Option<DragSession>,
    /// When set, the results are scrolled into view once this passes.
    pub scroll_due: Option<Instant>,

    pub confirm: Option<ConfirmDialog>,
    pub status: StatusLine,
    pub toasts: ToastStack,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input: InputField::default(),
            corporate: false,
            focus: Focus::Input,
            search_loading: false,
            generate_loading: false,
            results_visible: false,
            results: None,
            raw_visible: false,
            raw_json: String::new(),
            selected_row: 0,
            details_scroll: 0,
            details_viewport: Viewport::default(),
            drag: None,
            scroll_due: None,
            confirm: None,
            status: StatusLine::ready(),
            toasts: ToastStack::new(),
            should_quit: false,
        }
    }

    pub fn search_label(&self) -> &'static str {
        if self.search_loading {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        }
    }

    pub fn generate_label(&self) -> &'static str {
        if self.generate_loading {
            GENERATING_LABEL
        } else {
            GENERATE_LABEL
        }
    }

    pub fn raw_toggle_label(&self) -> &'static str {
        if self.raw_visible {
            HIDE_RAW_LABEL
        } else {
            SHOW_RAW_LABEL
        }
    }

    pub fn generate_visible(&self) -> bool {
        self.results_visible
            && self
                .results
                .as_ref()
                .is_some_and(|results| results.generate_visible)
    }

    pub fn row_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.rows().len())
    }

    /// Geometry of the rendered rows, recomputed from the current order.
    pub fn row_boxes(&self) -> Vec<RowBox> {
        layout_rows(
            std::iter::repeat_n(1, self.row_count()),
            self.details_viewport,
            self.details_scroll,
        )
    }

    /// Clears everything a previous search left on screen.
    pub fn reset_results(&mut self) {
        self.results_visible = false;
        self.results = None;
        self.raw_visible = false;
        self.raw_json.clear();
        self.selected_row = 0;
        self.details_scroll = 0;
        self.drag = None;
        self.scroll_due = None;
        if matches!(self.focus, Focus::Generate | Focus::RawToggle | Focus::Details) {
            self.focus = Focus::Input;
        }
    }

    pub fn is_focusable(&self, focus: Focus) -> bool {
        match focus {
            Focus::Input | Focus::Corporate | Focus::Search => true,
            Focus::Generate => self.generate_visible(),
            Focus::RawToggle | Focus::Details => self.results_visible,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.cycle_focus(TAB_ORDER.len() - 1);
    }

    fn cycle_focus(&self, step: usize) -> Focus {
        let start = TAB_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        (1..=TAB_ORDER.len())
            .map(|i| TAB_ORDER[(start + i * step) % TAB_ORDER.len()])
            .find(|f| self.is_focusable(*f))
            .unwrap_or(Focus::Input)
    }

    /// Keeps the selected row inside the visible part of the details panel.
    pub fn ensure_selected_visible(&mut self) {
        let height = usize::from(self.details_viewport.height);
        if height == 0 {
            return;
        }
        if self.selected_row < self.details_scroll {
            self.details_scroll = self.selected_row;
        } else if self.selected_row >= self.details_scroll + height {
            self.details_scroll = self.selected_row + 1 - height;
        }
    }
}
