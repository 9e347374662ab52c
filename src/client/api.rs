//! HTTP client for the AgentSync registry.

use super::types::{
    LogEvent, LogEventData, LogEventKind, RegistrationRequest, RegistrationResponse,
    VerificationResponse,
};
use crate::error::{AgentSyncError, Result};
use reqwest::{Client as HttpClient, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://astrasync-api-production.up.railway.app";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_SOURCE: &str = "sdk";

/// Upper bound on how long a telemetry call may run.
const TELEMETRY_DEADLINE: Duration = Duration::from_secs(5);

/// How requests authenticate against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as a bearer token.
    ApiKey(String),
    /// Sent as HTTP basic auth of `email:password`.
    Password(String),
    /// No credential. Only used when none is configured.
    Anonymous,
}

impl Credential {
    /// An API key beats a password; with neither, the client is anonymous.
    pub fn resolve(api_key: Option<String>, password: Option<String>) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        match (non_empty(api_key), non_empty(password)) {
            (Some(key), _) => Credential::ApiKey(key),
            (None, Some(password)) => Credential::Password(password),
            (None, None) => Credential::Anonymous,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credential::ApiKey(_) => "api-key",
            Credential::Password(_) => "password",
            Credential::Anonymous => "anonymous",
        }
    }
}

/// Registry client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Caller identity; validated when the client is built
    pub email: String,
    /// Base URL of the registry (default: the hosted AgentSync API)
    pub api_url: String,
    pub credential: Credential,
    /// Refuse to build an anonymous client
    pub require_credential: bool,
    /// Per-request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// Sent as `x-source` and in telemetry events
    pub source: String,
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_url: DEFAULT_API_URL.to_string(),
            credential: Credential::Anonymous,
            require_credential: false,
            timeout: DEFAULT_TIMEOUT,
            source: DEFAULT_SOURCE.to_string(),
            debug: false,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_required_credential(mut self, required: bool) -> Self {
        self.require_credential = required;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Thin async wrapper over the registry's HTTP endpoints.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.credential == Credential::Anonymous {
            if config.require_credential {
                return Err(AgentSyncError::MissingCredential);
            }
            warn!(
                api_url = %config.api_url,
                "no API credential configured; requests will be sent anonymously"
            );
        }

        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_url(&self) -> &str {
        self.config.api_url.trim_end_matches('/')
    }

    /// Submit a registration. Attempt, success and failure are reported to
    /// the telemetry endpoint in the background; those reports never affect
    /// the returned result.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse> {
        self.spawn_log(LogEventKind::RegistrationAttempt, request, None);

        match self
            .request::<RegistrationResponse, _>(Method::POST, &["v1", "register"], Some(request))
            .await
        {
            Ok(response) => {
                self.spawn_log(LogEventKind::RegistrationSuccess, request, None);
                Ok(response)
            }
            Err(e) => {
                self.spawn_log(LogEventKind::RegistrationFailed, request, Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn verify(&self, agent_id: &str) -> Result<VerificationResponse> {
        self.request::<VerificationResponse, ()>(Method::GET, &["v1", "verify", agent_id], None)
            .await
    }

    /// Any 2xx from `/` is healthy. Failures of any kind report unhealthy.
    pub async fn health_check(&self) -> bool {
        match self.execute::<()>(Method::GET, &[], None).await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "health check failed");
                false
            }
        }
    }

    /// Fire-and-forget telemetry. The task is detached and bounded by
    /// [`TELEMETRY_DEADLINE`].
    fn spawn_log(&self, kind: LogEventKind, request: &RegistrationRequest, error: Option<String>) {
        let event = LogEvent {
            event: kind,
            data: LogEventData {
                email: request.email.clone(),
                agent_name: Some(request.agent.agent.name.clone()),
                protocol: Some(request.agent.agent_type.clone()),
                source: self.config.source.clone(),
                error,
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
        };

        let client = self.clone();
        let deadline = self.config.timeout.min(TELEMETRY_DEADLINE);
        tokio::spawn(async move {
            let call = client.execute(Method::POST, &["v1", "log-attempt"], Some(&event));
            match tokio::time::timeout(deadline, call).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => debug!(error = %e, event = ?event.event, "failed to log attempt"),
                Err(_) => debug!(event = ?event.event, "log attempt timed out"),
            }
        });
    }

    async fn request<T, B>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.execute(method, path, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request and return the body of a successful response.
    async fn execute<B>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "registry request");

        let mut request = self
            .http
            .request(method, url.clone())
            .header("x-source", &self.config.source);

        request = match &self.config.credential {
            Credential::ApiKey(key) => request.bearer_auth(key),
            Credential::Password(password) => {
                request.basic_auth(&self.config.email, Some(password))
            }
            Credential::Anonymous => request,
        };

        if let Some(body) = body {
            if self.config.debug {
                let pretty = serde_json::to_string_pretty(body)?;
                debug!(body = %pretty, "request body");
            }
            request = request.json(body);
        }

        let url = url.as_str();
        let response = request.send().await.map_err(|e| self.transport_error(e, url))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, url))?;

        if !status.is_success() {
            return Err(AgentSyncError::Registry {
                status: status.as_u16(),
                message: error_message(&text)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            });
        }

        debug!(%url, status = status.as_u16(), body = %text, "registry response");
        Ok(text)
    }

    /// Base URL plus `segments`, each percent-encoded as a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(AgentSyncError::InvalidArgument(format!(
                "'{}' is not a valid path segment",
                dots
            )));
        }

        let invalid =
            || AgentSyncError::InvalidConfig(format!("invalid API URL '{}'", self.api_url()));

        let mut url = Url::parse(self.api_url()).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn transport_error(&self, error: reqwest::Error, url: &str) -> AgentSyncError {
        if error.is_timeout() {
            AgentSyncError::NetworkTimeout {
                url: url.to_string(),
                timeout: self.config.timeout,
            }
        } else {
            AgentSyncError::Http(error)
        }
    }
}

/// The registry reports failures as `{"error": ...}` or `{"message": ...}`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}
