//! Configuration schema for crawl-report.
//!
//! ```toml
//! [server]
//! url = "https://od-db.the-eye.eu"
//! website_path = "/website/{id}/json_chart"
//! stats_path = "/stats/json_chart"
//! timeout = "30s"
//! connect_timeout = "10s"
//!
//! [chart]
//! size_threshold = 100000
//! count_fraction = 0.03
//! size_fraction = 0.005
//!
//! [display]
//! color = true
//! bar_width = 40
//! ```
//!
//! Endpoint paths are resolved under `server.url`, including any path
//! prefix it has (`https://host/od` + `/stats/json_chart` gives
//! `https://host/od/stats/json_chart`).

use crate::chart::RelevanceRule;
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "https://od-db.the-eye.eu";
pub const DEFAULT_WEBSITE_PATH: &str = "/website/{id}/json_chart";
pub const DEFAULT_STATS_PATH: &str = "/stats/json_chart";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub chart: RelevanceRule,
    pub display: DisplayConfig,
}

impl Config {
    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.server.base_url()?;
        self.server.timeout()?;
        self.server.connect_timeout()?;

        if !self.server.website_path.contains("{id}") {
            return Err(ReportError::Config(format!(
                "server.website_path must contain {{id}}: {}",
                self.server.website_path
            )));
        }

        for (name, value) in [
            ("chart.count_fraction", self.chart.count_fraction),
            ("chart.size_fraction", self.chart.size_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ReportError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.display.bar_width == 0 {
            return Err(ReportError::Config("display.bar_width must be positive".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Root URL of the crawl server
    pub url: String,
    /// Website report path; `{id}` is replaced by the website id
    pub website_path: String,
    /// Global statistics path
    pub stats_path: String,
    /// Request timeout (humantime, e.g. "30s")
    pub timeout: String,
    /// Connect timeout (humantime)
    pub connect_timeout: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            website_path: DEFAULT_WEBSITE_PATH.to_string(),
            stats_path: DEFAULT_STATS_PATH.to_string(),
            timeout: "30s".to_string(),
            connect_timeout: "10s".to_string(),
        }
    }
}

impl ServerConfig {
    /// Server URL with a trailing slash, so endpoint paths join under any
    /// path prefix it carries.
    pub fn base_url(&self) -> Result<url::Url> {
        let mut url = url::Url::parse(&self.url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Result<Duration> {
        parse_duration("server.timeout", &self.timeout)
    }

    pub fn connect_timeout(&self) -> Result<Duration> {
        parse_duration("server.connect_timeout", &self.connect_timeout)
    }
}

fn parse_duration(name: &str, value: &str) -> Result<Duration> {
    humantime::parse_duration(value)
        .map_err(|e| ReportError::Config(format!("{}: {}: {}", name, value, e)))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use ANSI colors in terminal output
    pub color: bool,
    /// Width of the terminal bar charts in characters
    pub bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            bar_width: 40,
        }
    }
}
