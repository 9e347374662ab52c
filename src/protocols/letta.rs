//! Letta (formerly MemGPT) stateful agents.

use super::fields;
use super::{parse_object, AgentInput, ProtocolAdapter};
use crate::agent::{Agent, Skills, DEFAULT_OWNER, DEFAULT_VERSION};
use crate::error::{AgentSyncError, Result};
use serde_json::{json, Value};

/// Legacy `.af` exports are ZIP archives.
const ZIP_MAGIC: &str = "PK";

pub struct LettaAdapter;

impl ProtocolAdapter for LettaAdapter {
    fn name(&self) -> &'static str {
        "letta"
    }

    fn display_name(&self) -> &'static str {
        "Letta"
    }

    fn matches(&self, data: &Value) -> bool {
        fields::has_any(data, &["id", "agent_id"])
            && fields::has_any(data, &["memory", "agent_state", "model"])
    }

    fn extract(&self, data: &Value) -> Agent {
        let name = fields::text(data, &["name", "agent_name"]).unwrap_or_else(|| {
            let id = fields::text(data, &["id", "agent_id"]).unwrap_or_default();
            format!("Agent_{}", id)
        });

        Agent {
            name,
            description: fields::text(data, &["description", "persona"])
                .unwrap_or_else(|| "Letta agent".to_string()),
            owner: fields::text(data, &["owner", "user", "user_id"])
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            owner_url: None,
            version: fields::text(data, &["version"])
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            capabilities: capabilities(data),
            skills: Skills::Count(
                fields::array_len(data, "tools") + fields::array_len(data, "functions"),
            ),
            authentication: None,
            metadata: fields::metadata(
                self.name(),
                &[
                    (
                        "lettaId",
                        fields::get(data, "id").or_else(|| fields::get(data, "agent_id")),
                    ),
                    ("model", data.get("model")),
                    ("memory", data.get("memory")),
                    ("tools", data.get("tools")),
                ],
            ),
        }
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".af", ".json"]
    }

    fn example(&self) -> Value {
        json!({
            "id": "agent_123",
            "name": "Letta Assistant",
            "memory": { "core": {} },
            "tools": ["web_search", "calculator"]
        })
    }

    fn detect(&self, input: &AgentInput) -> bool {
        if input.as_text().is_some_and(is_archive) {
            return true;
        }
        match input.as_json() {
            Some(data) if data.is_object() => self.matches(&data),
            _ => false,
        }
    }

    fn parse(&self, input: &AgentInput) -> Result<Agent> {
        if input.as_text().is_some_and(is_archive) {
            return Err(AgentSyncError::parse_failure(
                self.name(),
                "ZIP agent archives are not supported",
            ));
        }
        parse_object(self, input)
    }
}

fn is_archive(text: &str) -> bool {
    text.starts_with(ZIP_MAGIC)
}

fn capabilities(data: &Value) -> Vec<String> {
    let mut capabilities = Vec::new();

    if fields::has(data, "memory") {
        capabilities.push("memory".to_string());
    }
    if fields::array_len(data, "tools") > 0 {
        capabilities.push("tools".to_string());
    }
    if fields::has(data, "streaming") {
        capabilities.push("streaming".to_string());
    }
    if let Some(model) = fields::text(data, &["model"]) {
        capabilities.push(format!("model:{}", model));
    }

    capabilities
}
