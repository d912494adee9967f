//! Lookup controller.
//!
//! Everything here is terminal-agnostic: the controller consumes typed
//! [`UiEvent`]s, mutates the [`UiState`] it owns and hands back [`Command`]s
//! for the caller to execute. Network completions come back in as events, so
//! all state changes happen on a single thread.

pub mod controller;
pub mod drag;
pub mod event;
pub mod labels;
pub mod render;
pub mod state;
pub mod status;

pub use controller::{ControllerOptions, LookupController};
pub use drag::{DragSession, RowBox, Viewport};
pub use event::{Command, UiEvent};
pub use render::{Details, RenderedRow, ResultsView, SapBadge, render};
pub use state::{ConfirmDialog, Focus, InputField, UiState};
pub use status::{Severity, StatusLine, Toast, ToastPhase, ToastStack};
