use mklookup_types::{GenerateRequest, GenerateResponse, Result, SearchQuery, SearchResponse};

use crate::drag::Viewport;
use crate::state::Focus;

/// Everything the controller reacts to.
///
/// Terminal input is translated into these by the front end; request
/// completions arrive as [`UiEvent::SearchCompleted`] and
/// [`UiEvent::GenerateCompleted`].
#[derive(Debug, Clone)]
pub enum UiEvent {
    InputChar(char),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    SetInput(String),

    ToggleCorporate,
    FocusNext,
    FocusPrev,
    Focus(Focus),
    /// Enter/Space on the focused control.
    Activate,

    SubmitSearch,
    RequestGenerate,
    ConfirmGenerate,
    CancelGenerate,
    ToggleRawData,

    SelectNextRow,
    SelectPrevRow,
    MoveRowUp,
    MoveRowDown,
    ScrollDetails(i32),

    /// The details panel was laid out at this position.
    DetailsLaidOut(Viewport),
    DragStart { y: u16 },
    DragMove { y: u16 },
    DragEnd,

    Tick,
    Quit,

    SearchCompleted {
        seq: u64,
        result: Result<SearchResponse>,
    },
    GenerateCompleted {
        seq: u64,
        result: Result<GenerateResponse>,
    },
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { seq: u64, query: SearchQuery },
    Generate { seq: u64, request: GenerateRequest },
    Quit,
}
