use crate::config::schema::ServerConfig;
use crate::error::{ReportError, Result};
use crate::report::Report;
use std::path::Path;
use url::Url;

const USER_AGENT: &str = concat!("crawl-report/", env!("CARGO_PKG_VERSION"));

/// Client for the crawl server's report endpoints
pub struct ReportClient {
    client: reqwest::Client,
    base: Url,
    website_path: String,
    stats_path: String,
}

impl ReportClient {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(server.timeout()?)
            .connect_timeout(server.connect_timeout()?)
            .build()?;

        Ok(Self {
            client,
            base: server.base_url()?,
            website_path: server.website_path.clone(),
            stats_path: server.stats_path.clone(),
        })
    }

    /// URL of the report for one crawled website.
    pub fn website_url(&self, id: u64) -> Result<Url> {
        let path = self.website_path.replace("{id}", &id.to_string());
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    /// URL of the global statistics report.
    pub fn stats_url(&self) -> Result<Url> {
        Ok(self.base.join(self.stats_path.trim_start_matches('/'))?)
    }

    /// Fetch the report for one crawled website.
    pub async fn fetch_website(&self, id: u64) -> Result<Report> {
        let url = self.website_url(id)?;
        self.fetch(url).await
    }

    /// Fetch the global statistics report.
    pub async fn fetch_global(&self) -> Result<Report> {
        let url = self.stats_url()?;
        self.fetch(url).await
    }

    async fn fetch(&self, url: Url) -> Result<Report> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(ReportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(Report::from_json(&body)?)
    }
}

/// Read a report saved to disk.
pub fn load_file(path: &Path) -> Result<Report> {
    tracing::debug!("Reading report from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    Ok(Report::from_json(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn client(url: &str) -> ReportClient {
        let server = ServerConfig {
            url: url.to_string(),
            ..ServerConfig::default()
        };
        ReportClient::new(&server).unwrap()
    }

    #[test]
    fn test_website_url() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.website_url(42).unwrap().as_str(),
            "http://localhost:5000/website/42/json_chart"
        );
    }

    #[test]
    fn test_urls_keep_server_path_prefix() {
        let c = client("https://od.example.org/some/prefix");
        assert_eq!(
            c.stats_url().unwrap().as_str(),
            "https://od.example.org/some/prefix/stats/json_chart"
        );
        assert_eq!(
            c.website_url(7).unwrap().as_str(),
            "https://od.example.org/some/prefix/website/7/json_chart"
        );

        let c = client("https://od.example.org/some/prefix/");
        assert_eq!(
            c.stats_url().unwrap().as_str(),
            "https://od.example.org/some/prefix/stats/json_chart"
        );
    }

    #[test]
    fn test_invalid_server_url() {
        let server = ServerConfig {
            url: "::nope".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            ReportClient::new(&server),
            Err(ReportError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"total_count": 3, "total_size": 1500000, "ext_stats": {{}}}}"#).unwrap();

        let report = load_file(file.path()).unwrap();
        assert_eq!(report.total_count, 3);
        assert_eq!(report.total_size, 1_500_000);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<html>502 Bad Gateway</html>").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
        assert!(err.is_unavailable());
    }
}
