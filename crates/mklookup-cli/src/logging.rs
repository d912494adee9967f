//! Logger setup.
//!
//! The level comes from `--log-level` unless `RUST_LOG` is set. The
//! interactive UI owns the terminal, so its logs go to a file; one-shot
//! commands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Env, Target};

use crate::error::Result;
use crate::types::LogLevel;

pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

pub fn init(level: LogLevel, target: LogTarget<'_>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level.to_string()));

    if let LogTarget::File(path) = target {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file))).write_style(env_logger::WriteStyle::Never);
    } else {
        builder.target(Target::Stderr);
    }

    // A logger may already be installed when running inside tests.
    let _ = builder.try_init();
    Ok(())
}
