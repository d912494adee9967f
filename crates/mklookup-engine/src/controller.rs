//! Lookup controller.
//!
//! Owns the [`UiState`] and turns [`UiEvent`]s into state changes plus
//! [`Command`]s. Request completions are applied whenever they arrive, even
//! if a newer action has started in the meantime.
//!
//! In-flight policy:
//! - a search submitted while a search is in flight is ignored
//! - a generate requested while a generate is in flight is ignored
//! - a search and a generate may run at the same time

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use mklookup_types::{
    Error, GenerateRequest, GenerateResponse, Result, SearchQuery, SearchResponse,
};

use crate::drag::move_item;
use crate::event::{Command, UiEvent};
use crate::render::{RenderedRow, ResultsView};
use crate::state::{ConfirmDialog, Focus, UiState};
use crate::status::{Severity, StatusLine};

/// Delay before freshly rendered results are scrolled into view.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

pub const MSG_SEARCHING: &str = "Searching for customer...";
pub const MSG_SEARCH_DONE: &str = "Customer lookup completed successfully";
pub const MSG_SEARCH_TOAST: &str = "Customer data retrieved successfully!";
pub const MSG_GENERATING: &str = "Generating SAP Customer Code...";
pub const MSG_GENERATE_DEFAULT: &str = "SAP code generation initiated successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Ask before generating a SAP code.
    pub confirm_generate: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            confirm_generate: true,
        }
    }
}

pub struct LookupController {
    state: UiState,
    options: ControllerOptions,
    next_seq: u64,
}

impl LookupController {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            state: UiState::new(),
            options,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    /// Applies one event. Runs to completion; never blocks.
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> Vec<Command> {
        match event {
            UiEvent::InputChar(c) => self.state.input.insert(c),
            UiEvent::InputBackspace => self.state.input.backspace(),
            UiEvent::InputDelete => self.state.input.delete(),
            UiEvent::CursorLeft => self.state.input.left(),
            UiEvent::CursorRight => self.state.input.right(),
            UiEvent::CursorHome => self.state.input.home(),
            UiEvent::CursorEnd => self.state.input.end(),
            UiEvent::SetInput(text) => self.state.input.set(text),

            UiEvent::ToggleCorporate => self.state.corporate = !self.state.corporate,
            UiEvent::FocusNext => self.state.focus_next(),
            UiEvent::FocusPrev => self.state.focus_prev(),
            UiEvent::Focus(focus) => {
                if self.state.is_focusable(focus) {
                    self.state.focus = focus;
                }
            }
            UiEvent::Activate => return self.activate(now),

            UiEvent::SubmitSearch => return self.submit_search(now),
            UiEvent::RequestGenerate => return self.request_generate(now),
            UiEvent::ConfirmGenerate => return self.confirm_generate(),
            UiEvent::CancelGenerate => self.state.confirm = None,
            UiEvent::ToggleRawData => self.toggle_raw_data(),

            UiEvent::SelectNextRow => self.select_row(1),
            UiEvent::SelectPrevRow => self.select_row(-1),
            UiEvent::MoveRowUp => self.shift_selected_row(-1),
            UiEvent::MoveRowDown => self.shift_selected_row(1),
            UiEvent::ScrollDetails(delta) => self.scroll_details(delta),

            UiEvent::DetailsLaidOut(viewport) => self.state.details_viewport = viewport,
            UiEvent::DragStart { y } => self.drag_start(y),
            UiEvent::DragMove { y } => self.drag_move(y),
            UiEvent::DragEnd => self.state.drag = None,

            UiEvent::Tick => self.tick(now),
            UiEvent::Quit => {
                self.state.should_quit = true;
                return vec![Command::Quit];
            }

            UiEvent::SearchCompleted { seq, result } => self.search_completed(seq, result, now),
            UiEvent::GenerateCompleted { seq, result } => {
                self.generate_completed(seq, result, now)
            }
        }
        Vec::new()
    }

    fn activate(&mut self, now: Instant) -> Vec<Command> {
        match self.state.focus {
            Focus::Input | Focus::Search => self.submit_search(now),
            Focus::Corporate => {
                self.state.corporate = !self.state.corporate;
                Vec::new()
            }
            Focus::Generate => self.request_generate(now),
            Focus::RawToggle => {
                self.toggle_raw_data();
                Vec::new()
            }
            Focus::Details => Vec::new(),
        }
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.state.toasts.push(message, severity, now);
    }

    fn set_status(&mut self, message: impl Into<String>, severity: Severity) {
        self.state.status = StatusLine::new(message, severity);
    }

    fn report_error(&mut self, err: &Error, now: Instant) {
        let message = format!("Error: {}", err);
        self.notify(message.clone(), Severity::Error, now);
        self.set_status(message, Severity::Error);
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn submit_search(&mut self, now: Instant) -> Vec<Command> {
        if self.state.search_loading {
            debug!("search ignored: a search is already in flight");
            return Vec::new();
        }

        let query = match SearchQuery::new(self.state.input.text(), self.state.corporate) {
            Ok(query) => query,
            Err(err) => {
                self.notify(err.to_string(), Severity::Error, now);
                self.state.focus = Focus::Input;
                return Vec::new();
            }
        };

        self.state.reset_results();
        self.state.search_loading = true;
        self.set_status(MSG_SEARCHING, Severity::Loading);

        let seq = self.next_seq();
        info!(
            "dispatching search #{} for MK {} (corporate: {})",
            seq,
            query.identifier(),
            query.is_corporate()
        );
        vec![Command::Search { seq, query }]
    }

    fn search_completed(&mut self, seq: u64, result: Result<SearchResponse>, now: Instant) {
        self.state.search_loading = false;

        match result {
            Ok(response) => {
                debug!("search #{} completed", seq);
                let results = ResultsView::from_response(&response);
                self.state.raw_json = response.raw_json();
                self.state.results = Some(results);
                self.state.results_visible = true;
                self.state.selected_row = 0;
                self.state.drag = None;
                self.set_status(MSG_SEARCH_DONE, Severity::Success);
                self.notify(MSG_SEARCH_TOAST, Severity::Success, now);
                self.state.scroll_due = Some(now + SCROLL_DELAY);
            }
            Err(err) => {
                warn!("search #{} failed: {}", seq, err);
                self.report_error(&err, now);
            }
        }
    }

    fn request_generate(&mut self, now: Instant) -> Vec<Command> {
        if self.state.generate_loading {
            debug!("generate ignored: a generate is already in flight");
            return Vec::new();
        }
        if !self.state.generate_visible() {
            debug!("generate ignored: action is not available");
            return Vec::new();
        }

        let request = match GenerateRequest::new(self.state.input.text()) {
            Ok(request) => request,
            Err(err) => {
                self.notify(err.to_string(), Severity::Error, now);
                return Vec::new();
            }
        };

        if self.options.confirm_generate {
            self.state.confirm = Some(ConfirmDialog {
                identifier: request.identifier().to_string(),
            });
            return Vec::new();
        }

        self.dispatch_generate(request)
    }

    fn confirm_generate(&mut self) -> Vec<Command> {
        let Some(dialog) = self.state.confirm.take() else {
            return Vec::new();
        };
        if self.state.generate_loading {
            return Vec::new();
        }
        match GenerateRequest::new(&dialog.identifier) {
            Ok(request) => self.dispatch_generate(request),
            Err(_) => Vec::new(),
        }
    }

    fn dispatch_generate(&mut self, request: GenerateRequest) -> Vec<Command> {
        self.state.generate_loading = true;
        self.set_status(MSG_GENERATING, Severity::Loading);

        let seq = self.next_seq();
        info!(
            "dispatching generate #{} for MK {}",
            seq,
            request.identifier()
        );
        vec![Command::Generate { seq, request }]
    }

    fn generate_completed(&mut self, seq: u64, result: Result<GenerateResponse>, now: Instant) {
        self.state.generate_loading = false;

        match result {
            Ok(response) => {
                debug!("generate #{} completed", seq);
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| MSG_GENERATE_DEFAULT.to_string());
                self.notify(message, Severity::Success, now);
                self.state.status = StatusLine::ready();
            }
            Err(err) => {
                warn!("generate #{} failed: {}", seq, err);
                self.report_error(&err, now);
            }
        }
    }

    fn toggle_raw_data(&mut self) {
        self.state.raw_visible = !self.state.raw_visible;
    }

    fn tick(&mut self, now: Instant) {
        self.state.toasts.tick(now);
        if let Some(due) = self.state.scroll_due
            && now >= due
        {
            self.state.scroll_due = None;
            self.state.details_scroll = 0;
        }
    }

    fn rows_mut(&mut self) -> Option<&mut Vec<RenderedRow>> {
        self.state.results.as_mut().and_then(ResultsView::rows_mut)
    }

    fn select_row(&mut self, delta: isize) {
        let count = self.state.row_count();
        if count == 0 {
            return;
        }
        let next = self.state.selected_row.saturating_add_signed(delta);
        self.state.selected_row = next.min(count - 1);
        self.state.ensure_selected_visible();
    }

    fn shift_selected_row(&mut self, delta: isize) {
        if self.state.drag.is_some() {
            return;
        }
        let from = self.state.selected_row;
        let Some(rows) = self.rows_mut() else {
            return;
        };
        let Some(to) = from.checked_add_signed(delta).filter(|to| *to < rows.len()) else {
            return;
        };
        move_item(rows, from, to);
        renumber(rows);
        self.state.selected_row = to;
        self.state.ensure_selected_visible();
    }

    fn scroll_details(&mut self, delta: i32) {
        let max = self
            .state
            .row_count()
            .saturating_sub(usize::from(self.state.details_viewport.height));
        let next = self.state.details_scroll as i64 + i64::from(delta);
        self.state.details_scroll = next.clamp(0, max as i64) as usize;
    }

    fn drag_start(&mut self, y: u16) {
        if !self.state.results_visible || !self.state.details_viewport.contains(y) {
            return;
        }
        if self.rows_mut().is_none_or(|rows| rows.is_empty()) {
            return;
        }
        let boxes = self.state.row_boxes();
        if let Some(session) = crate::drag::DragSession::start(&boxes, y) {
            debug!("drag started on row {}", session.dragged);
            self.state.selected_row = session.dragged;
            self.state.focus = Focus::Details;
            self.state.drag = Some(session);
        }
    }

    fn drag_move(&mut self, y: u16) {
        let Some(mut session) = self.state.drag else {
            return;
        };

        if self.state.details_viewport.contains(y) {
            let boxes = self.state.row_boxes();
            if let Some(row_move) = session.reorder(&boxes, y)
                && let Some(rows) = self.rows_mut()
            {
                move_item(rows, row_move.from, row_move.to);
                renumber(rows);
            }
            let boxes = self.state.row_boxes();
            session.update_hover(&boxes, y);
        } else {
            session.hover = None;
        }

        self.state.selected_row = session.dragged;
        self.state.drag = Some(session);
    }
}

fn renumber(rows: &mut [RenderedRow]) {
    for (order, row) in rows.iter_mut().enumerate() {
        row.order = order;
    }
}
