use crate::config::{Config, ConfigLoader};
use crate::error::Result;

pub const SERVER_ENV: &str = "CRAWL_REPORT_SERVER";

/// Application context that combines configuration, environment variables, and CLI arguments
pub struct AppContext {
    pub config: Config,
}

impl AppContext {
    pub fn new() -> Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self::from_config(config, std::env::var(SERVER_ENV).ok()))
    }

    /// Priority: ENV > config > default
    pub fn from_config(mut config: Config, env_server: Option<String>) -> Self {
        if let Some(url) = env_server.filter(|u| !u.trim().is_empty()) {
            config.server.url = url;
        }
        Self { config }
    }

    /// Apply CLI overrides, which win over everything else.
    pub fn with_overrides(mut self, server: Option<String>, no_color: bool) -> Result<Self> {
        if let Some(url) = server {
            self.config.server.url = url;
        }
        if no_color {
            self.config.display.color = false;
        }
        self.config.validate()?;
        Ok(self)
    }
}
