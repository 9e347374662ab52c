//! Ordered adapter registry used for format detection.

use super::acp::AcpAdapter;
use super::autogpt::AutoGptAdapter;
use super::letta::LettaAdapter;
use super::mcp::McpAdapter;
use super::openai::OpenAiAdapter;
use super::{AgentInput, ProtocolAdapter};
use std::sync::Arc;

/// Registry of protocol adapters, tried in registration order.
///
/// Detection is first-match-wins: when a payload carries fields of more than
/// one format, the adapter registered earlier claims it.
#[derive(Clone)]
pub struct ProtocolRegistry {
    adapters: Vec<Arc<dyn ProtocolAdapter>>,
}

impl ProtocolRegistry {
    /// An empty registry. Nothing is detected until adapters are added.
    pub fn empty() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// The built-in adapters in their default precedence.
    pub fn load() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(McpAdapter));
        registry.register(Arc::new(LettaAdapter));
        registry.register(Arc::new(AcpAdapter));
        registry.register(Arc::new(OpenAiAdapter));
        registry.register(Arc::new(AutoGptAdapter));
        registry
    }

    /// Append an adapter. An adapter with the same name is replaced in place
    /// and keeps its precedence.
    pub fn register(&mut self, adapter: Arc<dyn ProtocolAdapter>) {
        match self.adapters.iter().position(|a| a.name() == adapter.name()) {
            Some(index) => self.adapters[index] = adapter,
            None => self.adapters.push(adapter),
        }
    }

    /// The first adapter that claims `input`, if any.
    pub fn detect(&self, input: &AgentInput) -> Option<Arc<dyn ProtocolAdapter>> {
        self.adapters
            .iter()
            .find(|adapter| adapter.detect(input))
            .cloned()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ProtocolAdapter>> {
        self.adapters.iter().find(|a| a.name() == name).cloned()
    }

    pub fn adapters(&self) -> &[Arc<dyn ProtocolAdapter>] {
        &self.adapters
    }

    /// Adapter names in precedence order.
    pub fn list_available(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    /// Display names joined for error messages, e.g. `"MCP, Letta, ACP"`.
    pub fn supported_formats(&self) -> String {
        self.adapters
            .iter()
            .map(|a| a.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use serde_json::{json, Value};

    struct Catchall;

    impl ProtocolAdapter for Catchall {
        fn name(&self) -> &'static str {
            "catchall"
        }

        fn display_name(&self) -> &'static str {
            "Catch-all"
        }

        fn matches(&self, _data: &Value) -> bool {
            true
        }

        fn extract(&self, _data: &Value) -> Agent {
            Agent::default()
        }

        fn example(&self) -> Value {
            json!({})
        }
    }

    #[test]
    fn test_load_order() {
        let registry = ProtocolRegistry::load();
        assert_eq!(
            registry.list_available(),
            vec!["mcp", "letta", "acp", "openai", "autogpt"]
        );
        assert_eq!(
            registry.supported_formats(),
            "MCP, Letta, ACP, OpenAI, AutoGPT"
        );
    }

    #[test]
    fn test_first_match_wins() {
        // Both Letta (id + memory) and ACP (id + skills) claim this payload.
        let ambiguous = AgentInput::from(json!({
            "id": "x1",
            "memory": {},
            "skills": [{"id": "s1", "name": "Search"}]
        }));

        let registry = ProtocolRegistry::load();
        assert!(registry.get("letta").unwrap().detect(&ambiguous));
        assert!(registry.get("acp").unwrap().detect(&ambiguous));
        assert_eq!(registry.detect(&ambiguous).unwrap().name(), "letta");

        let mut reordered = ProtocolRegistry::empty();
        reordered.register(Arc::new(AcpAdapter));
        reordered.register(Arc::new(LettaAdapter));
        assert_eq!(reordered.detect(&ambiguous).unwrap().name(), "acp");
    }

    #[test]
    fn test_no_match() {
        let registry = ProtocolRegistry::load();
        assert!(registry.detect(&AgentInput::from(json!({"name": "x"}))).is_none());
        assert!(registry.detect(&AgentInput::from("not json")).is_none());
        assert!(ProtocolRegistry::empty()
            .detect(&AgentInput::from(json!({"ai_name": "Bot"})))
            .is_none());
    }

    #[test]
    fn test_appended_adapter_is_tried_last() {
        let mut registry = ProtocolRegistry::load();
        registry.register(Arc::new(Catchall));

        let mcp = AgentInput::from(json!({"name": "Bot", "methods": {}}));
        assert_eq!(registry.detect(&mcp).unwrap().name(), "mcp");

        let unknown = AgentInput::from(json!({"name": "x"}));
        assert_eq!(registry.detect(&unknown).unwrap().name(), "catchall");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ProtocolRegistry::load();
        registry.register(Arc::new(LettaAdapter));
        assert_eq!(registry.adapters().len(), 5);
        assert_eq!(registry.list_available()[1], "letta");
    }
}
