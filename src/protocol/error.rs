//! Error types for task dispatch and upstream lookups

use thiserror::Error;

/// Main error type for the maps A2A service
///
/// Only [`A2AError::MalformedRequest`] is answered at the transport level. Every other
/// variant raised while a task runs is folded into a `failed` task response, with the
/// `Display` output copied verbatim into `error.message`.
#[derive(Debug, Error)]
pub enum A2AError {
    /// The inbound task envelope violates the task request structure
    #[error("{0}")]
    MalformedRequest(String),

    /// The requested tool is not part of the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tool arguments do not satisfy the tool's argument contract
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// The provider answered with a non-OK status, an empty result, or could not be reached
    #[error("{0}")]
    Upstream(String),

    /// Transport-level error (network, connection, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Missing credential or unreadable agent descriptor
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl A2AError {
    /// Create a malformed request error
    pub fn malformed(message: impl Into<String>) -> Self {
        A2AError::MalformedRequest(message.into())
    }

    /// Check whether this error rejects the request before any task exists
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, A2AError::MalformedRequest(_))
    }
}

/// Result type alias for service operations
pub type A2AResult<T> = Result<T, A2AError>;

impl From<reqwest::Error> for A2AError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        let err = err.without_url();
        if err.is_connect() {
            A2AError::Transport(format!("Connection error: {}", err))
        } else {
            A2AError::Transport(err.to_string())
        }
    }
}
