//! AutoGPT goal-driven agent settings.

use super::fields;
use super::ProtocolAdapter;
use crate::agent::{Agent, Skills, DEFAULT_VERSION};
use serde_json::{json, Value};

/// Boolean settings and the capability tag each one grants.
const FLAG_CAPABILITIES: &[(&str, &str)] = &[
    ("can_write_files", "file_write"),
    ("can_read_files", "file_read"),
    ("can_execute_commands", "command_execution"),
    ("can_search_web", "web_search"),
];

pub struct AutoGptAdapter;

impl ProtocolAdapter for AutoGptAdapter {
    fn name(&self) -> &'static str {
        "autogpt"
    }

    fn display_name(&self) -> &'static str {
        "AutoGPT"
    }

    fn matches(&self, data: &Value) -> bool {
        fields::has_any(data, &["ai_name", "ai_role", "agent_settings", "command_registry"])
            || fields::array(data, "ai_goals").is_some()
    }

    fn extract(&self, data: &Value) -> Agent {
        let description = fields::text(data, &["ai_role", "description"])
            .unwrap_or_else(|| describe_goals(fields::array(data, "ai_goals")));

        Agent {
            name: fields::text(data, &["ai_name", "agent_name"])
                .unwrap_or_else(|| "AutoGPT Agent".to_string()),
            description,
            owner: fields::text(data, &["owner"]).unwrap_or_else(|| "AutoGPT User".to_string()),
            owner_url: None,
            version: fields::text(data, &["version"])
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            capabilities: capabilities(data),
            skills: Skills::Count(command_names(data).len() as u64),
            authentication: None,
            metadata: fields::metadata(
                self.name(),
                &[
                    ("aiGoals", data.get("ai_goals")),
                    ("commandRegistry", data.get("command_registry")),
                    ("constraints", data.get("constraints")),
                    ("resources", data.get("resources")),
                    ("evaluationCriteria", data.get("evaluation_criteria")),
                ],
            ),
        }
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".json", ".yaml", ".yml"]
    }

    fn example(&self) -> Value {
        json!({
            "ai_name": "ResearchBot",
            "ai_role": "Research Assistant",
            "ai_goals": [
                "Research topics",
                "Summarize findings"
            ]
        })
    }
}

fn describe_goals(goals: Option<&Vec<Value>>) -> String {
    let goals: Vec<String> = goals
        .map(|goals| goals.iter().filter_map(fields::as_text).collect())
        .unwrap_or_default();

    if goals.is_empty() {
        "AutoGPT Agent".to_string()
    } else {
        format!("Agent with goals: {}", goals.join(", "))
    }
}

/// One entry per registered command. A command list yields the entry's
/// `name` (if any); a command map yields its keys.
fn command_names(data: &Value) -> Vec<Option<String>> {
    match data.get("command_registry") {
        Some(Value::Array(commands)) => commands
            .iter()
            .map(|cmd| fields::text(cmd, &["name"]))
            .collect(),
        Some(Value::Object(commands)) => commands.keys().map(|k| Some(k.clone())).collect(),
        _ => Vec::new(),
    }
}

fn capabilities(data: &Value) -> Vec<String> {
    let mut capabilities: Vec<String> = command_names(data)
        .into_iter()
        .flatten()
        .map(|name| format!("command:{}", name))
        .collect();

    if let Some(resources) = fields::array(data, "resources") {
        capabilities.extend(
            resources
                .iter()
                .filter_map(fields::as_text)
                .map(|resource| format!("resource:{}", resource)),
        );
    }

    for (flag, tag) in FLAG_CAPABILITIES {
        if fields::has(data, flag) {
            capabilities.push((*tag).to_string());
        }
    }

    capabilities
}
