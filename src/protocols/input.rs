//! Raw agent input and its resolution into something adapters can inspect.

use crate::error::{AgentSyncError, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::path::PathBuf;

/// What a caller hands to `register`/`detect`.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentInput {
    /// Already-parsed structured data.
    Structured(Value),
    /// Inline JSON text, or (before resolution) a file path.
    Text(String),
}

impl AgentInput {
    /// Whether a text input should be read as inline JSON rather than a path.
    pub fn looks_like_json(text: &str) -> bool {
        let trimmed = text.trim_start();
        trimmed.starts_with('{') || trimmed.starts_with('[')
    }

    /// Resolve a file path into its content. Structured values and inline
    /// JSON are returned unchanged.
    pub async fn resolve(self) -> Result<Self> {
        match self {
            AgentInput::Text(text) if !Self::looks_like_json(&text) => {
                let path = PathBuf::from(text.trim());
                tracing::debug!(path = %path.display(), "reading agent file");
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| AgentSyncError::FileRead { path, source })?;
                // Binary archives still need their magic bytes visible to detection.
                Ok(AgentInput::Text(String::from_utf8_lossy(&bytes).into_owned()))
            }
            other => Ok(other),
        }
    }

    /// Structured view of the input, or `None` if the text is not valid JSON.
    pub fn as_json(&self) -> Option<Cow<'_, Value>> {
        match self {
            AgentInput::Structured(value) => Some(Cow::Borrowed(value)),
            AgentInput::Text(text) => serde_json::from_str(text).ok().map(Cow::Owned),
        }
    }

    /// Structured view of the input, failing if text does not parse.
    pub fn to_json(&self) -> Result<Cow<'_, Value>> {
        match self {
            AgentInput::Structured(value) => Ok(Cow::Borrowed(value)),
            AgentInput::Text(text) => Ok(Cow::Owned(serde_json::from_str(text)?)),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AgentInput::Text(text) => Some(text),
            AgentInput::Structured(_) => None,
        }
    }
}

impl From<Value> for AgentInput {
    fn from(value: Value) -> Self {
        AgentInput::Structured(value)
    }
}

impl From<String> for AgentInput {
    fn from(text: String) -> Self {
        AgentInput::Text(text)
    }
}

impl From<&str> for AgentInput {
    fn from(text: &str) -> Self {
        AgentInput::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_looks_like_json() {
        assert!(AgentInput::looks_like_json("{\"name\": \"x\"}"));
        assert!(AgentInput::looks_like_json("  [1, 2]"));
        assert!(!AgentInput::looks_like_json("agent.json"));
        assert!(!AgentInput::looks_like_json(""));
    }

    #[tokio::test]
    async fn test_resolve_inline_json_unchanged() {
        let input = AgentInput::from(r#"{"name": "Bot"}"#);
        let resolved = input.clone().resolve().await.unwrap();
        assert_eq!(resolved, input);
    }

    #[tokio::test]
    async fn test_resolve_structured_unchanged() {
        let input = AgentInput::from(json!({"name": "Bot"}));
        let resolved = input.clone().resolve().await.unwrap();
        assert_eq!(resolved, input);
    }

    #[tokio::test]
    async fn test_resolve_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ai_name": "ResearchBot"}}"#).unwrap();

        let input = AgentInput::from(file.path().to_string_lossy().to_string());
        let resolved = input.resolve().await.unwrap();
        assert_eq!(
            resolved.as_json().unwrap().as_ref(),
            &json!({"ai_name": "ResearchBot"})
        );
    }

    #[tokio::test]
    async fn test_resolve_keeps_binary_magic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'P', b'K', 0x03, 0x04, 0xff, 0xfe]).unwrap();

        let input = AgentInput::from(file.path().to_string_lossy().to_string());
        let resolved = input.resolve().await.unwrap();
        assert!(resolved.as_text().unwrap().starts_with("PK"));
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let input = AgentInput::from("not json and not a real file path");
        let err = input.resolve().await.unwrap_err();
        assert!(matches!(err, AgentSyncError::FileRead { .. }));
    }

    #[test]
    fn test_as_json_invalid_text() {
        assert!(AgentInput::from("{not json").as_json().is_none());
        assert!(AgentInput::from("{not json").to_json().is_err());
    }
}
