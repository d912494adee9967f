//! Presentation layer.
//!
//! - `view_models`: serializable output of the one-shot commands
//! - `renderers`: console output and the interactive terminal UI
//! - `views`: ratatui widgets used by the terminal UI

pub mod renderers;
pub mod view_models;
pub mod views;
