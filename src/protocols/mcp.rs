//! Model Context Protocol manifests.

use super::fields;
use super::ProtocolAdapter;
use crate::agent::{Agent, Skills, DEFAULT_OWNER, DEFAULT_VERSION};
use serde_json::{json, Value};

pub struct McpAdapter;

impl ProtocolAdapter for McpAdapter {
    fn name(&self) -> &'static str {
        "mcp"
    }

    fn display_name(&self) -> &'static str {
        "MCP"
    }

    fn matches(&self, data: &Value) -> bool {
        fields::has(data, "name")
            && (fields::object(data, "methods").is_some() || fields::has(data, "mcpVersion"))
    }

    fn extract(&self, data: &Value) -> Agent {
        let method_count = fields::object(data, "methods").map_or(0, |m| m.len() as u64);

        Agent {
            name: fields::text(data, &["name"])
                .unwrap_or_else(|| "Unnamed MCP Agent".to_string()),
            description: fields::text(data, &["description"]).unwrap_or_default(),
            owner: fields::text(data, &["owner", "author"])
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            owner_url: fields::text(data, &["url", "homepage"]),
            version: fields::text(data, &["version"])
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            capabilities: capabilities(data),
            skills: Skills::Count(method_count),
            authentication: None,
            metadata: fields::metadata(
                self.name(),
                &[
                    ("mcpVersion", data.get("mcpVersion")),
                    ("methods", data.get("methods")),
                ],
            ),
        }
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".json", ".mcp.json"]
    }

    fn example(&self) -> Value {
        json!({
            "name": "My MCP Agent",
            "description": "An MCP protocol agent",
            "version": "1.0.0",
            "methods": {
                "greet": { "description": "Say hello" }
            }
        })
    }
}

/// One `method:<name>` tag per declared method, then any explicit capabilities
/// (an array of tags, or a map whose truthy keys are tags).
fn capabilities(data: &Value) -> Vec<String> {
    let mut capabilities = Vec::new();

    if let Some(methods) = fields::object(data, "methods") {
        capabilities.extend(methods.keys().map(|method| format!("method:{}", method)));
    }

    match data.get("capabilities") {
        Some(Value::Array(items)) => {
            capabilities.extend(items.iter().filter_map(fields::as_text));
        }
        Some(Value::Object(flags)) => {
            capabilities.extend(
                flags
                    .iter()
                    .filter(|(_, enabled)| fields::truthy(enabled))
                    .map(|(key, _)| key.clone()),
            );
        }
        _ => {}
    }

    capabilities
}
