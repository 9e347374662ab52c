//! Protocol adapters for the agent description formats we accept.
//!
//! Each adapter answers two questions about an untyped payload: does it look
//! like my format (`detect`), and if so, what canonical [`Agent`] does it
//! describe (`parse`). Adapters are held in order by the
//! [`ProtocolRegistry`], which picks the first one that claims an input.
//!
//! # Formats
//!
//! | name      | distinguishing fields                                           |
//! |-----------|-----------------------------------------------------------------|
//! | `mcp`     | `name` plus a `methods` map or an `mcpVersion` marker           |
//! | `letta`   | `id`/`agent_id` plus `memory`, `agent_state` or `model`         |
//! | `acp`     | `agentId`/`id` plus `skills`, `authentication` or input modes   |
//! | `openai`  | `assistant_id`, `model` + `instructions`, or built-in tool types |
//! | `autogpt` | `ai_name`, `ai_role`, `ai_goals`, settings or a command registry |

pub mod acp;
pub mod autogpt;
pub mod fields;
pub mod input;
pub mod letta;
pub mod mcp;
pub mod openai;
pub mod registry;

use crate::agent::Agent;
use crate::error::{AgentSyncError, Result};
use serde_json::Value;

pub use input::AgentInput;
pub use registry::ProtocolRegistry;

/// A format-specific detect + parse pair.
///
/// Implementors provide [`matches`](Self::matches) and
/// [`extract`](Self::extract) over a JSON object; the provided `detect` and
/// `parse` take care of text inputs.
pub trait ProtocolAdapter: Send + Sync {
    /// Short tag sent to the registry as the agent type (e.g. `"mcp"`).
    fn name(&self) -> &'static str;

    /// Human-readable format name (e.g. `"MCP"`).
    fn display_name(&self) -> &'static str;

    /// Whether a JSON object carries this format's distinguishing fields.
    fn matches(&self, data: &Value) -> bool;

    /// Build the canonical agent. Must not fail on missing optional fields.
    fn extract(&self, data: &Value) -> Agent;

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".json"]
    }

    /// A representative payload of this format.
    fn example(&self) -> Value;

    /// Decide membership. Text that is not valid JSON, and JSON that is not an
    /// object, is never claimed.
    fn detect(&self, input: &AgentInput) -> bool {
        match input.as_json() {
            Some(data) if data.is_object() => self.matches(&data),
            _ => false,
        }
    }

    fn parse(&self, input: &AgentInput) -> Result<Agent> {
        parse_object(self, input)
    }
}

/// Parse `input` as a JSON object and hand it to the adapter's `extract`.
pub(crate) fn parse_object<A: ProtocolAdapter + ?Sized>(
    adapter: &A,
    input: &AgentInput,
) -> Result<Agent> {
    let data = input
        .to_json()
        .map_err(|e| AgentSyncError::parse_failure(adapter.name(), e.to_string()))?;
    if !data.is_object() {
        return Err(AgentSyncError::parse_failure(
            adapter.name(),
            "expected a JSON object",
        ));
    }
    Ok(adapter.extract(&data))
}
