//! Agent descriptor (agent card) served for discovery

use std::{path::Path, sync::Arc};

use serde_json::Value;

use super::error::{A2AError, A2AResult};

/// The static agent card published at `/.well-known/agent.json`
///
/// The document is read once at start-up and then shared read-only; it is served
/// exactly as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDescriptor {
    document: Arc<Value>,
}

impl AgentDescriptor {
    /// Wrap an already parsed document
    pub fn new(document: Value) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    /// Read and parse the descriptor file
    pub async fn load(path: impl AsRef<Path>) -> A2AResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            A2AError::Initialization(format!(
                "failed to read agent card {}: {}",
                path.display(),
                e
            ))
        })?;

        let document: Value = serde_json::from_str(&raw).map_err(|e| {
            A2AError::Initialization(format!(
                "failed to parse agent card {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::new(document))
    }

    /// The raw descriptor document
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Name of the agent, if the document declares one
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("maps-a2a-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_load_descriptor() {
        let path = scratch_path("agent.json");
        tokio::fs::write(&path, r#"{"name": "Maps Agent", "version": "1.0.0"}"#)
            .await
            .unwrap();

        let descriptor = AgentDescriptor::load(&path).await.unwrap();
        assert_eq!(descriptor.name(), Some("Maps Agent"));
        assert_eq!(descriptor.document()["version"], "1.0.0");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_descriptor() {
        let err = AgentDescriptor::load(scratch_path("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, A2AError::Initialization(_)));
    }

    #[tokio::test]
    async fn test_unparsable_descriptor() {
        let path = scratch_path("broken.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = AgentDescriptor::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse agent card"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[test]
    fn test_clones_share_document() {
        let descriptor = AgentDescriptor::new(json!({"name": "Maps Agent"}));
        let clone = descriptor.clone();
        assert!(Arc::ptr_eq(&descriptor.document, &clone.document));
    }
}
