//! TUI view components.
//!
//! Thin ratatui widgets over the controller's [`mklookup_engine::UiState`].
//! Geometry comes from [`ScreenLayout`]; the views only paint.

pub mod controls;
pub mod details;
pub mod dialog;
pub mod raw;
pub mod screen;
pub mod status_bar;
pub mod toasts;

pub use controls::{ButtonView, CheckboxView, InputView};
pub use details::{BadgeView, DetailsView};
pub use dialog::ConfirmDialogView;
pub use raw::RawPanelView;
pub use screen::ScreenView;
pub use status_bar::StatusBarView;
pub use toasts::ToastsView;

use mklookup_engine::Severity;
use ratatui::style::Color;

/// Convert Severity to Ratatui Color
pub(crate) fn severity_to_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Loading => Color::Blue,
    }
}
