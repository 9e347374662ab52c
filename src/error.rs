use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentSyncError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error(
        "Email is required. Use --email flag or set AGENTSYNC_EMAIL environment variable"
    )]
    MissingEmail,

    #[error("Unable to detect agent format. Supported formats: {supported}")]
    FormatUndetected { supported: String },

    #[error("Failed to parse {protocol} agent: {message}")]
    ParseFailure { protocol: String, message: String },

    #[error("Request to {url} timed out after {}s", timeout.as_secs())]
    NetworkTimeout { url: String, timeout: Duration },

    #[error("Registry error ({status}): {message}")]
    Registry { status: u16, message: String },

    #[error("Registry at {0} is unreachable or unhealthy")]
    Unhealthy(String),

    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No API credential configured. Set AGENTSYNC_API_KEY or AGENTSYNC_PASSWORD")]
    MissingCredential,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentSyncError {
    pub(crate) fn parse_failure(protocol: &str, message: impl Into<String>) -> Self {
        AgentSyncError::ParseFailure {
            protocol: protocol.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentSyncError>;
