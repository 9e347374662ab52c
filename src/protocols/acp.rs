//! Agent Communication Protocol agent cards.

use super::fields;
use super::ProtocolAdapter;
use crate::agent::{Agent, Skill, Skills, DEFAULT_OWNER, DEFAULT_VERSION};
use serde_json::{json, Value};

/// Boolean flags that map directly onto a capability tag.
const FLAG_CAPABILITIES: &[&str] = &[
    "streaming",
    "pushNotifications",
    "auditTrail",
    "blockchainAttestation",
];

pub struct AcpAdapter;

impl ProtocolAdapter for AcpAdapter {
    fn name(&self) -> &'static str {
        "acp"
    }

    fn display_name(&self) -> &'static str {
        "ACP"
    }

    fn matches(&self, data: &Value) -> bool {
        fields::has_any(data, &["agentId", "id"])
            && fields::has_any(data, &["skills", "authentication", "defaultInputModes"])
    }

    fn extract(&self, data: &Value) -> Agent {
        Agent {
            name: fields::text(data, &["name", "agentName"])
                .unwrap_or_else(|| "Unnamed ACP Agent".to_string()),
            description: fields::text(data, &["description"]).unwrap_or_default(),
            owner: fields::text(data, &["owner", "developer"])
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            owner_url: fields::text(data, &["ownerUrl", "url"]),
            version: fields::text(data, &["version"])
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            capabilities: capabilities(data),
            skills: skills(data.get("skills")),
            authentication: fields::get(data, "authentication").cloned(),
            metadata: fields::metadata(
                self.name(),
                &[
                    (
                        "acpId",
                        fields::get(data, "agentId").or_else(|| fields::get(data, "id")),
                    ),
                    ("schemaVersion", data.get("schemaVersion")),
                    ("defaultInputModes", data.get("defaultInputModes")),
                    ("defaultOutputModes", data.get("defaultOutputModes")),
                ],
            ),
        }
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".json", ".acp.json"]
    }

    fn example(&self) -> Value {
        json!({
            "agentId": "AGENT-456",
            "name": "ACP Protocol Agent",
            "skills": [
                { "id": "skill1", "name": "Data Analysis" }
            ],
            "authentication": { "schemes": ["oauth2"] }
        })
    }
}

fn capabilities(data: &Value) -> Vec<String> {
    let mut capabilities = Vec::new();

    match data.get("capabilities") {
        Some(Value::Object(flags)) => {
            capabilities.extend(
                flags
                    .iter()
                    .filter(|(_, enabled)| **enabled == Value::Bool(true))
                    .map(|(key, _)| key.clone()),
            );
        }
        Some(Value::Array(items)) => {
            capabilities.extend(items.iter().filter_map(fields::as_text));
        }
        _ => {}
    }

    for flag in FLAG_CAPABILITIES {
        if fields::has(data, flag) {
            capabilities.push((*flag).to_string());
        }
    }

    capabilities
}

/// A skill list is kept as descriptors; a bare number is kept as a count.
fn skills(value: Option<&Value>) -> Skills {
    match value {
        Some(Value::Number(n)) => Skills::Count(n.as_u64().unwrap_or(0)),
        Some(Value::Array(items)) => Skills::List(items.iter().map(skill).collect()),
        _ => Skills::Count(0),
    }
}

fn skill(value: &Value) -> Skill {
    let id = fields::text(value, &["id", "name"]).unwrap_or_default();
    let name = fields::text(value, &["name", "id"]).unwrap_or_default();
    let tags = fields::array(value, "tags")
        .map(|tags| tags.iter().filter_map(fields::as_text).collect())
        .unwrap_or_default();

    Skill {
        id,
        name,
        description: fields::text(value, &["description"]),
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::AgentInput;

    #[test]
    fn test_detect() {
        let adapter = AcpAdapter;
        assert!(adapter.matches(&json!({"agentId": "A-1", "skills": []})));
        assert!(adapter.matches(&json!({"id": "A-1", "authentication": {}})));
        assert!(adapter.matches(&json!({"id": "A-1", "defaultInputModes": ["text"]})));
        assert!(!adapter.matches(&json!({"agentId": "A-1", "name": "x"})));
        assert!(!adapter.matches(&json!({"skills": [], "authentication": {}})));
    }

    #[test]
    fn test_parse_skill_list_with_fallbacks() {
        let agent = AcpAdapter
            .parse(&AgentInput::from(json!({
                "agentId": "ACP-123",
                "skills": [
                    {"id": "skill1", "name": "Data Analysis", "tags": ["data"]},
                    {"name": "Summarize", "description": "Short summaries"},
                    {"id": "translate"}
                ],
                "authentication": {"schemes": ["oauth2"]}
            })))
            .unwrap();

        let Skills::List(skills) = &agent.skills else {
            panic!("expected a skill list, got {:?}", agent.skills);
        };
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0].tags, vec!["data"]);
        assert_eq!(skills[1].id, "Summarize");
        assert_eq!(skills[1].description.as_deref(), Some("Short summaries"));
        assert_eq!(skills[2].name, "translate");
        assert!(skills[2].tags.is_empty());

        assert_eq!(agent.name, "Unnamed ACP Agent");
        assert_eq!(agent.authentication, Some(json!({"schemes": ["oauth2"]})));
        assert_eq!(agent.metadata.get("acpId"), Some(&json!("ACP-123")));
    }

    #[test]
    fn test_skill_count_passthrough() {
        let agent = AcpAdapter.extract(&json!({"id": "A-1", "skills": 4}));
        assert_eq!(agent.skills, Skills::Count(4));

        let agent = AcpAdapter.extract(&json!({"id": "A-1", "authentication": {}}));
        assert_eq!(agent.skills, Skills::Count(0));
    }

    #[test]
    fn test_capabilities_from_map_and_flags() {
        let agent = AcpAdapter.extract(&json!({
            "id": "A-1",
            "skills": [],
            "capabilities": {"search": true, "write": false, "odd": "yes"},
            "streaming": true,
            "auditTrail": true
        }));
        assert_eq!(agent.capabilities, vec!["search", "streaming", "auditTrail"]);
    }

    #[test]
    fn test_capabilities_from_array() {
        let agent = AcpAdapter.extract(&json!({
            "id": "A-1",
            "skills": [],
            "capabilities": ["search", "search"],
            "blockchainAttestation": true
        }));
        assert_eq!(
            agent.capabilities,
            vec!["search", "search", "blockchainAttestation"]
        );
    }
}
