//! `mklookup`: terminal client for the customer lookup backend.
//!
//! The interactive UI drives a [`mklookup_engine::LookupController`]; the
//! one-shot `search` and `generate` commands go through the same client and
//! render engine and print to stdout.

mod args;
mod commands;
pub mod config;
pub mod error;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod tasks;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
