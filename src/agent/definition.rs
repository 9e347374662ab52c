//! The canonical, protocol-independent agent description.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_NAME: &str = "Unnamed Agent";
pub const DEFAULT_OWNER: &str = "Unknown";
pub const DEFAULT_VERSION: &str = "1.0.0";

/// An agent normalized from one of the supported source formats.
///
/// Every adapter produces this shape; the trust scorer and the registration
/// payload only ever look at these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub owner: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_url: Option<String>,

    pub version: String,

    /// Tags in discovery order. Duplicates are kept.
    #[serde(default)]
    pub capabilities: Vec<String>,

    #[serde(default)]
    pub skills: Skills,

    /// Passed through uninterpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Value>,

    /// Adapter-specific provenance, informational only.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: String::new(),
            owner: DEFAULT_OWNER.to_string(),
            owner_url: None,
            version: DEFAULT_VERSION.to_string(),
            capabilities: Vec::new(),
            skills: Skills::default(),
            authentication: None,
            metadata: Map::new(),
        }
    }
}

impl Agent {
    /// True when no adapter could resolve an owner for this agent.
    pub fn has_placeholder_owner(&self) -> bool {
        self.owner == DEFAULT_OWNER
    }
}

/// Skills are either a bare count or a list of skill descriptors, depending on
/// what the source format declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    Count(u64),
    List(Vec<Skill>),
}

impl Skills {
    pub fn count(&self) -> u64 {
        match self {
            Skills::Count(n) => *n,
            Skills::List(skills) => skills.len() as u64,
        }
    }
}

impl Default for Skills {
    fn default() -> Self {
        Skills::Count(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_agent() {
        let agent = Agent::default();
        assert_eq!(agent.name, "Unnamed Agent");
        assert_eq!(agent.owner, "Unknown");
        assert_eq!(agent.version, "1.0.0");
        assert!(agent.has_placeholder_owner());
        assert_eq!(agent.skills, Skills::Count(0));
    }

    #[test]
    fn test_skills_count() {
        assert_eq!(Skills::Count(4).count(), 4);

        let list = Skills::List(vec![
            Skill {
                id: "a".to_string(),
                name: "A".to_string(),
                description: None,
                tags: vec![],
            },
            Skill {
                id: "b".to_string(),
                name: "B".to_string(),
                description: Some("second".to_string()),
                tags: vec!["x".to_string()],
            },
        ]);
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn test_skills_serialize_untagged() {
        assert_eq!(serde_json::to_value(Skills::Count(3)).unwrap(), json!(3));

        let list = Skills::List(vec![Skill {
            id: "s1".to_string(),
            name: "Search".to_string(),
            description: None,
            tags: vec![],
        }]);
        assert_eq!(
            serde_json::to_value(list).unwrap(),
            json!([{"id": "s1", "name": "Search", "tags": []}])
        );
    }

    #[test]
    fn test_agent_serializes_camel_case() {
        let agent = Agent {
            owner_url: Some("https://example.com".to_string()),
            ..Agent::default()
        };
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["ownerUrl"], "https://example.com");
        assert!(value.get("authentication").is_none());
    }
}
