//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://fullactivity.onrender.com/";

const APP_DIR_NAME: &str = ".taskscreen";

/// `~/.taskscreen`, created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
    let dir = home.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,

    /// 0 disables the request timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_ids: bool,
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Command-line/env override first, then the config file value.
    pub fn api_url<'a>(&'a self, cli_override: Option<&'a str>) -> &'a str {
        match cli_override {
            Some(url) if !url.trim().is_empty() => url,
            _ => &self.api.base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout(), None);
        assert!(!config.ui.show_ids);
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp = tempdir()?;
        let config = Config::load_from(&temp.path().join("config.toml"))?;
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "[api]\ntimeout_secs = 10\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(10)));
        assert!(!config.ui.show_ids);
        Ok(())
    }

    #[test]
    fn test_full_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"http://localhost:8000/\"\n\n[ui]\nshow_ids = true\n",
        )?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.api.base_url, "http://localhost:8000/");
        assert!(config.ui.show_ids);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_error() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_api_url_precedence() {
        let mut config = Config::default();
        config.api.base_url = "http://from-file/".to_string();
        assert_eq!(config.api_url(None), "http://from-file/");
        assert_eq!(config.api_url(Some("")), "http://from-file/");
        assert_eq!(config.api_url(Some("http://from-cli/")), "http://from-cli/");
    }
}
