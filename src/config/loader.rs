use crate::config::Config;
use crate::error::{ReportError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CRAWL_REPORT_CONFIG";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("", "", "crawl-report")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`
    pub fn save_to(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Initialize a config file with defaults at `path`
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ReportError::Config(format!(
                "Config file already exists at {}",
                path.display()
            )));
        }

        Self::save_to(&Config::default(), path)
    }

    /// Initialize the config file at the default location
    pub fn init() -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| ReportError::Config("Cannot determine config path".into()))?;
        Self::init_at(&path)?;
        Ok(path)
    }
}
