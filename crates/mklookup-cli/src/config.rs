use crate::error::{Error, Result};
use mklookup_client::ClientOptions;
use mklookup_engine::ControllerOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "MKLOOKUP_CONFIG";
pub const BASE_URL_ENV: &str = "MKLOOKUP_BASE_URL";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MKLOOKUP_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.mklookup/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("mklookup").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".mklookup").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Default log file for the interactive UI.
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("mklookup").join("mklookup.log"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".mklookup").join("mklookup.log"));
    }

    Err(Error::Config(
        "Could not determine log path: no HOME directory or XDG data directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let client = ClientOptions::default();
        Self {
            base_url: client.base_url,
            timeout_secs: client.timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Ask before generating a SAP code
    pub confirm_generate: bool,
    /// Capture the mouse for clicks and drag-reordering
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_generate: true,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Applies `--base-url`, then `MKLOOKUP_BASE_URL`.
    pub fn apply_overrides(&mut self, base_url: Option<&str>) {
        let env_url = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());
        if let Some(url) = base_url.map(str::to_string).or(env_url) {
            self.server.base_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.server.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "server.base_url must start with http:// or https:// (got '{}')",
                self.server.base_url
            )));
        }
        if self.server.timeout_secs == 0 {
            return Err(Error::Config(
                "server.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.server.base_url.trim().to_string(),
            timeout: Duration::from_secs(self.server.timeout_secs),
        }
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            confirm_generate: self.ui.confirm_generate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.timeout_secs, 30);
        assert!(config.ui.confirm_generate);
        assert!(config.ui.mouse);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.base_url = "https://crm.example.com".to_string();
        config.ui.mouse = false;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_missing_file_yields_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nconfirm_generate = false\n")?;

        let loaded = Config::load_from(&path)?;
        assert!(!loaded.ui.confirm_generate);
        assert!(loaded.ui.mouse);
        assert_eq!(loaded.server, ServerConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_base_url_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbase_url = \"localhost:8000\"\n")?;

        let config = Config::load_from(&path)?;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.base_url"));
        Ok(())
    }

    #[test]
    fn test_flag_replaces_invalid_base_url_before_validation() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server]
base_url = \"localhost:8000\"\n")?;

        let mut config = Config::load_from(&path)?;
        config.apply_overrides(Some("http://127.0.0.1:9000"));
        config.validate()?;
        assert_eq!(config.server.base_url, "http://127.0.0.1:9000");
        Ok(())
    }

    #[test]
    fn test_malformed_toml_names_the_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server\n")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("config.toml"));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/tmp/mk/config.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/mk/config.toml"));
        Ok(())
    }

    #[test]
    fn test_client_options_from_config() {
        let mut config = Config::default();
        config.server.timeout_secs = 5;
        let options = config.client_options();
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.base_url, "http://127.0.0.1:8000");
    }
}
