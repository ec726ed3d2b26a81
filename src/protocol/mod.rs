//! Core A2A protocol types and definitions

pub mod agent;
pub mod error;
pub mod message;
pub mod task;

pub use agent::AgentDescriptor;
pub use error::{A2AError, A2AResult};
pub use message::{DataPart, Message, Part, Role};
pub use task::{Artifact, TaskError, TaskRequest, TaskResponse, TaskStatus, ToolInvocation};
