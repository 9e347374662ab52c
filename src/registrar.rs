//! Registration pipeline: resolve → detect → parse → score → submit.

use crate::agent::{calculate_trust_score, Agent};
use crate::client::types::{
    AgentRecord, RegisteredAgent, RegistrationRequest, RegistrationResponse, TrustScoreProvenance,
    VerificationResponse,
};
use crate::client::{ApiClient, ClientConfig};
use crate::error::{AgentSyncError, Result};
use crate::protocols::{AgentInput, ProtocolAdapter, ProtocolRegistry};
use crate::utils::email::is_valid_email;
use std::sync::Arc;
use tracing::{debug, info};

pub const SCHEMA_VERSION: &str = "1.0.0";
pub const SCORE_PROVIDER: &str = "AgentSync";

/// Outcome of running detection and parsing without touching the network.
#[derive(Debug, Clone)]
pub struct Detection {
    pub protocol: &'static str,
    pub display_name: &'static str,
    pub agent: Agent,
    pub trust_score: u32,
}

/// Entry point for registering agents with the registry.
///
/// Holds no per-call state; concurrent calls on one instance are independent.
pub struct AgentSync {
    client: ApiClient,
    protocols: ProtocolRegistry,
}

impl AgentSync {
    /// Build a client. Fails before any network activity if the email is
    /// malformed or a required credential is missing.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if !is_valid_email(&config.email) {
            return Err(AgentSyncError::InvalidEmail(config.email));
        }

        Ok(Self {
            client: ApiClient::new(config)?,
            protocols: ProtocolRegistry::load(),
        })
    }

    /// Shorthand for a client with default settings.
    pub fn with_email(email: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(email))
    }

    pub fn email(&self) -> &str {
        &self.client.config().email
    }

    pub fn protocols(&self) -> &ProtocolRegistry {
        &self.protocols
    }

    /// Append a custom adapter; it is tried after the built-in ones.
    pub fn add_protocol(&mut self, adapter: Arc<dyn ProtocolAdapter>) {
        self.protocols.register(adapter);
    }

    /// The adapter that claims `input`, if any. `input` must already be
    /// resolved (see [`AgentInput::resolve`]).
    pub fn detect_protocol(&self, input: &AgentInput) -> Option<Arc<dyn ProtocolAdapter>> {
        self.protocols.detect(input)
    }

    /// Resolve, detect, parse and score without registering.
    pub async fn analyze(&self, input: impl Into<AgentInput>) -> Result<Detection> {
        analyze(&self.protocols, input.into()).await
    }

    /// Register an agent from structured data, inline JSON, or a file path.
    pub async fn register(&self, input: impl Into<AgentInput>) -> Result<RegistrationResponse> {
        let detection = self.analyze(input).await?;
        self.submit(detection).await
    }

    /// Register an already analyzed agent.
    pub async fn submit(&self, detection: Detection) -> Result<RegistrationResponse> {
        let Detection {
            protocol,
            mut agent,
            trust_score,
            ..
        } = detection;

        // The record describes the agent as parsed; only the submission
        // substitutes the caller for a missing owner.
        let parsed = agent.clone();
        if agent.has_placeholder_owner() {
            agent.owner = self.email().to_string();
        }

        let request = RegistrationRequest {
            email: self.email().to_string(),
            agent: RegisteredAgent {
                agent,
                agent_type: protocol.to_string(),
                trust_score,
            },
        };

        let mut response = self.client.register(&request).await?;
        info!(agent_id = %response.agent_id, status = response.status.as_str(), "agent registered");

        if !response.agent_id.is_empty() {
            response.agent_record =
                Some(self.agent_record(&response.agent_id, &parsed, trust_score));
        }

        Ok(response)
    }

    /// Look up a registration by agent id.
    pub async fn verify(&self, agent_id: &str) -> Result<VerificationResponse> {
        let agent_id = agent_id.trim();
        if agent_id.is_empty() {
            return Err(AgentSyncError::InvalidArgument(
                "Agent ID is required".to_string(),
            ));
        }
        self.client.verify(agent_id).await
    }

    pub async fn health_check(&self) -> bool {
        self.client.health_check().await
    }

    fn agent_record(&self, agent_id: &str, agent: &Agent, trust_score: u32) -> AgentRecord {
        let now = chrono::Utc::now().to_rfc3339();

        AgentRecord {
            schema_version: SCHEMA_VERSION.to_string(),
            agent_id: agent_id.to_string(),
            name: agent.name.clone(),
            description: agent.description.clone(),
            version: agent.version.clone(),
            owner: agent.owner.clone(),
            owner_url: agent.owner_url.clone(),
            trust_score: TrustScoreProvenance {
                score_provider: SCORE_PROVIDER.to_string(),
                score_uri: format!("{}/trust/{}", self.client.api_url(), agent_id),
                last_validated: now.clone(),
                value: format!("TEMP-{}%", trust_score),
            },
            capabilities: agent.capabilities.clone(),
            authentication: agent.authentication.clone(),
            skills: agent.skills.clone(),
            registered_at: now,
        }
    }
}

/// Run the offline half of the pipeline against a registry of adapters.
pub async fn analyze(protocols: &ProtocolRegistry, input: AgentInput) -> Result<Detection> {
    let input = input.resolve().await?;

    let adapter = protocols
        .detect(&input)
        .ok_or_else(|| AgentSyncError::FormatUndetected {
            supported: protocols.supported_formats(),
        })?;
    debug!(protocol = adapter.name(), "detected protocol");

    let agent = adapter.parse(&input)?;
    let trust_score = calculate_trust_score(&agent);
    debug!(name = %agent.name, trust_score, "parsed agent");

    Ok(Detection {
        protocol: adapter.name(),
        display_name: adapter.display_name(),
        agent,
        trust_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_invalid_email() {
        for email in ["invalid", "test@", "@example.com", ""] {
            let result = AgentSync::with_email(email);
            assert!(
                matches!(result, Err(AgentSyncError::InvalidEmail(_))),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_accepts_valid_email() {
        assert!(AgentSync::with_email("valid@example.com").is_ok());
        assert!(AgentSync::with_email("test.user+tag@example.co.uk").is_ok());
    }

    #[tokio::test]
    async fn test_analyze_scenario_a() {
        let input = json!({"name": "Bot", "description": "...", "methods": {"greet": {}}});
        let detection = analyze(&ProtocolRegistry::load(), AgentInput::from(input))
            .await
            .unwrap();

        assert_eq!(detection.protocol, "mcp");
        assert_eq!(detection.agent.skills.count(), 1);
        assert_eq!(detection.agent.capabilities, vec!["method:greet"]);
        // base + version + one capability + one skill
        assert_eq!(detection.trust_score, 76);
    }

    #[tokio::test]
    async fn test_analyze_undetected() {
        let err = analyze(&ProtocolRegistry::load(), AgentInput::from(r#"{"foo": 1}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentSyncError::FormatUndetected { .. }));
        assert!(err.to_string().contains("MCP, Letta, ACP, OpenAI, AutoGPT"));
    }

    #[test]
    fn test_agent_record() {
        let sync = AgentSync::new(
            ClientConfig::new("dev@example.com").with_api_url("https://registry.test/"),
        )
        .unwrap();
        let agent = Agent {
            name: "Bot".to_string(),
            ..Agent::default()
        };

        let record = sync.agent_record("TEMP-1", &agent, 82);
        assert_eq!(record.schema_version, "1.0.0");
        assert_eq!(record.trust_score.value, "TEMP-82%");
        assert_eq!(record.trust_score.score_uri, "https://registry.test/trust/TEMP-1");
        assert_eq!(record.trust_score.last_validated, record.registered_at);
    }
}
