use std::path::Path;

use anyhow::{Result, bail};

use crate::config::Config;
use crate::types::OutputFormat;

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn show(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Plain => {
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
