//! Task request and response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    error::{A2AError, A2AResult},
    message::{Message, Part, Role},
};

pub(crate) const INVALID_TASK_STRUCTURE: &str = "Invalid A2A task request structure.";
pub(crate) const INVALID_INITIAL_MESSAGE: &str = "Invalid initial user message structure.";
pub(crate) const MISSING_TOOL_INVOCATION: &str =
    "Expected toolName and arguments in jsonData of the first dataPart.";

/// A synchronous task submitted by a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRequest {
    /// Caller-chosen task identifier
    #[serde(rename = "taskId")]
    pub task_id: String,

    /// Conversation so far, kept exactly as received
    ///
    /// Only the first message is interpreted; it carries the tool invocation.
    pub messages: Vec<Value>,
}

impl TaskRequest {
    /// Create a new task request from raw messages
    pub fn new(task_id: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            task_id: task_id.into(),
            messages,
        }
    }

    /// Create a new task request from typed messages
    pub fn from_messages(task_id: impl Into<String>, messages: Vec<Message>) -> A2AResult<Self> {
        let messages = messages
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(task_id, messages))
    }

    /// Check the structural invariants of the envelope
    ///
    /// At least one message, and the first one is a user message with parts. Later
    /// messages are never inspected.
    pub fn validate(&self) -> A2AResult<()> {
        if self.task_id.is_empty() {
            return Err(A2AError::malformed(INVALID_TASK_STRUCTURE));
        }

        let first = self
            .messages
            .first()
            .ok_or_else(|| A2AError::malformed(INVALID_TASK_STRUCTURE))?;

        let from_user = first.get("role").and_then(Value::as_str) == Some(Role::User.as_str());
        let has_parts = first
            .get("parts")
            .and_then(Value::as_array)
            .is_some_and(|parts| !parts.is_empty());
        if !from_user || !has_parts {
            return Err(A2AError::malformed(INVALID_INITIAL_MESSAGE));
        }

        Ok(())
    }

    /// Extract the tool invocation from the first data part of the first message
    ///
    /// A `toolName` that is not a string is kept in its JSON text form, so it
    /// fails later as an unknown tool instead of rejecting the request.
    pub fn tool_invocation(&self) -> A2AResult<ToolInvocation> {
        let json_data = self
            .messages
            .first()
            .and_then(|message| message.get("parts"))
            .and_then(Value::as_array)
            .and_then(|parts| {
                parts
                    .iter()
                    .find_map(|part| part.get("dataPart").filter(|data| is_present(data)))
            })
            .and_then(|data| data.get("jsonData"))
            .filter(|json_data| is_present(json_data))
            .ok_or_else(|| A2AError::malformed(MISSING_TOOL_INVOCATION))?;

        let tool_name = json_data.get("toolName").filter(|name| is_present(name));
        let arguments = json_data.get("arguments").filter(|args| is_present(args));

        match (tool_name, arguments) {
            (Some(tool_name), Some(arguments)) => Ok(ToolInvocation {
                tool_name: match tool_name {
                    Value::String(name) => name.clone(),
                    other => other.to_string(),
                },
                arguments: arguments.clone(),
            }),
            _ => Err(A2AError::malformed(MISSING_TOOL_INVOCATION)),
        }
    }
}

/// Null, `false`, zero and the empty string count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The tool call named inside a task request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Registry key of the tool
    pub tool_name: String,

    /// Tool-specific arguments
    pub arguments: Value,
}

impl ToolInvocation {
    /// Create a new tool invocation
    pub fn new(tool_name: impl Into<String>, arguments: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Render the invocation as the `jsonData` of a data part
    pub fn into_part(self) -> Part {
        Part::data(serde_json::json!({
            "toolName": self.tool_name,
            "arguments": self.arguments,
        }))
    }
}

/// Terminal status of a task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The tool ran and produced a result artifact
    Completed,

    /// The tool could not be resolved or raised an error
    Failed,
}

/// Task output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// Contents of the artifact
    pub parts: Vec<Part>,
}

impl Artifact {
    /// Wrap a tool result as a single `application/json` data part
    pub fn json(result: Value) -> Self {
        Self {
            parts: vec![Part::data(result)],
        }
    }
}

/// Error details attached to a failed task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskError {
    /// Human-readable error message
    pub message: String,
}

impl TaskError {
    /// Create a new task error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&A2AError> for TaskError {
    fn from(err: &A2AError) -> Self {
        TaskError::new(err.to_string())
    }
}

/// The envelope returned for every task that passed validation
///
/// `completed` carries exactly one artifact and no error; `failed` carries no
/// artifacts and an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResponse {
    #[serde(rename = "taskId")]
    pub task_id: String,

    pub status: TaskStatus,

    /// The request's messages, echoed unchanged
    pub messages: Vec<Value>,

    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TaskError>,
}

impl TaskResponse {
    /// Build a completed response around a tool result
    pub fn completed(request: TaskRequest, result: Value) -> Self {
        Self {
            task_id: request.task_id,
            status: TaskStatus::Completed,
            messages: request.messages,
            artifacts: vec![Artifact::json(result)],
            error: None,
        }
    }

    /// Build a failed response
    pub fn failed(request: TaskRequest, error: TaskError) -> Self {
        Self {
            task_id: request.task_id,
            status: TaskStatus::Failed,
            messages: request.messages,
            artifacts: Vec::new(),
            error: Some(error),
        }
    }

    /// Check if the task completed successfully
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// The tool result carried by the artifact of a completed task
    pub fn result(&self) -> Option<&Value> {
        self.artifacts
            .first()
            .and_then(|artifact| artifact.parts.first())
            .and_then(|part| part.data_part.as_ref())
            .and_then(|data| data.json_data.as_ref())
    }
}
