pub mod console;
pub mod input;
pub mod layout;
pub mod tui;

pub use console::ConsoleRenderer;
pub use tui::TuiRenderer;
