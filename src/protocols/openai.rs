//! OpenAI Assistants API definitions.

use super::fields;
use super::ProtocolAdapter;
use crate::agent::{Agent, Skills, DEFAULT_VERSION};
use serde_json::{json, Value};

/// Built-in tool types that only an Assistants payload would carry.
const BUILTIN_TOOL_TYPES: &[&str] = &["code_interpreter", "retrieval"];

pub struct OpenAiAdapter;

impl ProtocolAdapter for OpenAiAdapter {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
    }

    fn matches(&self, data: &Value) -> bool {
        fields::has(data, "assistant_id")
            || (fields::has(data, "model") && fields::has(data, "instructions"))
            || tool_types(data).any(|t| BUILTIN_TOOL_TYPES.contains(&t))
    }

    fn extract(&self, data: &Value) -> Agent {
        let function_count = tool_types(data).filter(|t| *t == "function").count() as u64;

        Agent {
            name: fields::text(data, &["name"])
                .unwrap_or_else(|| "OpenAI Assistant".to_string()),
            description: fields::text(data, &["instructions", "description"])
                .unwrap_or_default(),
            owner: fields::text(data, &["owner"])
                .unwrap_or_else(|| "OpenAI User".to_string()),
            owner_url: None,
            version: DEFAULT_VERSION.to_string(),
            capabilities: capabilities(data),
            skills: Skills::Count(function_count),
            authentication: None,
            metadata: fields::metadata(
                self.name(),
                &[
                    (
                        "assistantId",
                        fields::get(data, "assistant_id").or_else(|| fields::get(data, "id")),
                    ),
                    ("model", data.get("model")),
                    ("temperature", data.get("temperature")),
                    ("tools", data.get("tools")),
                    ("fileIds", data.get("file_ids")),
                ],
            ),
        }
    }

    fn example(&self) -> Value {
        json!({
            "assistant_id": "asst_789",
            "name": "GPT Assistant",
            "model": "gpt-4",
            "tools": [
                { "type": "code_interpreter" }
            ]
        })
    }
}

/// The `type` of every entry in `tools`, skipping entries without one.
fn tool_types(data: &Value) -> impl Iterator<Item = &str> {
    fields::array(data, "tools")
        .into_iter()
        .flatten()
        .filter_map(|tool| tool.get("type").and_then(Value::as_str))
}

fn capabilities(data: &Value) -> Vec<String> {
    let mut capabilities = Vec::new();

    if let Some(model) = fields::text(data, &["model"]) {
        capabilities.push(format!("model:{}", model));
    }

    for tool_type in tool_types(data) {
        let tag = match tool_type {
            "code_interpreter" => "code_interpreter",
            "retrieval" => "retrieval",
            "function" => "functions",
            _ => continue,
        };
        capabilities.push(tag.to_string());
    }

    if fields::array_len(data, "file_ids") > 0 {
        capabilities.push("file_access".to_string());
    }

    capabilities
}
