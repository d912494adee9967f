use std::sync::Arc;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use log::debug;
use mklookup_client::HttpLookupApi;

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, default_log_path, resolve_config_path};
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None if std::io::stdout().is_terminal() => Commands::Tui {
            mk: None,
            corporate: false,
        },
        None => bail!("No command given and stdout is not a terminal; see `mklookup --help`"),
    };

    // The interactive UI owns the terminal, so it always logs to a file
    let log_file = match (&cli.log_file, &command) {
        (Some(path), _) => Some(path.clone()),
        (None, Commands::Tui { .. }) => Some(default_log_path()?),
        (None, _) => None,
    };
    match &log_file {
        Some(path) => logging::init(cli.log_level, LogTarget::File(path))?,
        None => logging::init(cli.log_level, LogTarget::Stderr)?,
    }

    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!("config path: {}", config_path.display());

    let load_config = || -> Result<Config> {
        let mut config = Config::load_from(&config_path)?;
        config.apply_overrides(cli.base_url.as_deref());
        config.validate()?;
        debug!("backend: {}", config.server.base_url);
        Ok(config)
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
            ConfigCommand::Show => {
                let config = load_config()?;
                handlers::config::show(&config, &config_path, cli.format)
            }
        },

        Commands::Search { mk, corporate, raw } => {
            let config = load_config()?;
            let api = HttpLookupApi::new(&config.client_options())?;
            handlers::search::handle(&api, &mk, corporate, raw, cli.format)
        }

        Commands::Generate { mk, yes } => {
            let config = load_config()?;
            let api = HttpLookupApi::new(&config.client_options())?;
            handlers::generate::handle(&api, &mk, yes, cli.format)
        }

        Commands::Tui { mk, corporate } => {
            let config = load_config()?;
            let api = Arc::new(HttpLookupApi::new(&config.client_options())?);
            handlers::tui::handle(&config, api, mk, corporate)
        }
    }
}
