pub mod config;
pub mod generate;
pub mod search;
pub mod tui;
