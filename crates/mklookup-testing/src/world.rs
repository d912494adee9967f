//! Isolated environment for running the `mklookup` binary.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use mklookup_testing::{StubServer, TestWorld};
///
/// let server = StubServer::start().unwrap();
/// let world = TestWorld::new().with_base_url(server.base_url());
///
/// let mut cmd = assert_cmd::Command::cargo_bin("mklookup").unwrap();
/// world.configure_command(&mut cmd).args(["search", "18643"]);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    log_file: PathBuf,
    base_url: Option<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");
        let log_file = temp_dir.path().join("mklookup.log");

        Self {
            temp_dir,
            config_path,
            log_file,
            base_url: None,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Pass `--base-url` to every command.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a config file at [`TestWorld::config_path`].
    pub fn write_config(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, contents)?;
        Ok(())
    }

    /// Point a command at this environment's config and log locations.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--log-file")
            .arg(&self.log_file);

        if let Some(url) = &self.base_url {
            cmd.arg("--base-url").arg(url);
        }

        cmd.env_remove("MKLOOKUP_BASE_URL")
            .env_remove("MKLOOKUP_CONFIG")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
