use crate::cli::Cli;
use crate::client::{ClientConfig, Credential, DEFAULT_API_URL};
use crate::error::{AgentSyncError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = ".agentsync.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    /// Debug output (not stored in config file)
    #[serde(skip)]
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Refuse to talk to the registry anonymously
    #[serde(default)]
    pub require_credential: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
            password: None,
            require_credential: false,
        }
    }
}

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Project config (.agentsync.toml in project root)
    /// 4. Global config (~/.agentsync.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_config) = global_config_path() {
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = project_root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        config = config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            AgentSyncError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.api.url != default_url() {
            self.api.url = other.api.url;
        }
        if other.api.timeout_secs != default_timeout_secs() {
            self.api.timeout_secs = other.api.timeout_secs;
        }
        if other.api.api_key.is_some() {
            self.api.api_key = other.api.api_key;
        }
        if other.api.password.is_some() {
            self.api.password = other.api.password;
        }
        self.api.require_credential = self.api.require_credential || other.api.require_credential;

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Some(url) = env_var("AGENTSYNC_API_URL") {
            self.api.url = url;
        }

        if let Some(timeout) = env_var("AGENTSYNC_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "ignoring non-numeric AGENTSYNC_TIMEOUT"),
            }
        }

        if let Some(key) = env_var("AGENTSYNC_API_KEY") {
            self.api.api_key = Some(key);
        }

        if let Some(password) = env_var("AGENTSYNC_PASSWORD") {
            self.api.password = Some(password);
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        self.debug = cli.debug;

        if let Some(ref url) = cli.api_url {
            self.api.url = url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.api.timeout_secs = timeout;
        }

        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(AgentSyncError::InvalidConfig(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !(self.api.url.starts_with("http://") || self.api.url.starts_with("https://")) {
            return Err(AgentSyncError::InvalidConfig(format!(
                "api.url must be an http(s) URL, got '{}'",
                self.api.url
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn credential(&self) -> Credential {
        Credential::resolve(self.api.api_key.clone(), self.api.password.clone())
    }

    /// Client settings for `email` under this configuration.
    pub fn client_config(&self, email: impl Into<String>) -> Result<ClientConfig> {
        self.validate()?;

        Ok(ClientConfig::new(email)
            .with_api_url(self.api.url.clone())
            .with_credential(self.credential())
            .with_required_credential(self.api.require_credential)
            .with_timeout(self.timeout())
            .with_debug(self.debug))
    }
}

/// `~/.agentsync.toml`, when a home directory is known
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
