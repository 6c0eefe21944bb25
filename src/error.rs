use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ReportError {
    /// Whether this error means the report itself could not be obtained,
    /// as opposed to a setup problem (config, URL) before fetching.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            ReportError::Network(_)
                | ReportError::Status { .. }
                | ReportError::Json(_)
                | ReportError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
