use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mklookup")]
#[command(about = "Look up customers by Customer MK and generate SAP customer codes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: MKLOOKUP_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Lookup backend base URL (overrides MKLOOKUP_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Log destination for the interactive UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal UI (default when stdout is a terminal)
    Tui {
        /// Pre-fill the Customer MK field
        #[arg(long)]
        mk: Option<String>,

        /// Start with the corporate flag set
        #[arg(long)]
        corporate: bool,
    },

    /// Look up one customer and print its details
    Search {
        /// Customer MK
        mk: String,

        #[arg(long)]
        corporate: bool,

        /// Append the raw customer JSON
        #[arg(long)]
        raw: bool,
    },

    /// Ask the backend to create the customer in SAP
    Generate {
        /// Customer MK
        mk: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
