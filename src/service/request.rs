//! Task requests that passed structural validation

use crate::protocol::{
    error::A2AResult,
    task::{TaskRequest, ToolInvocation},
};

/// A task request together with the tool invocation extracted from it
///
/// Only [`TaskValidationLayer`](crate::layer::TaskValidationLayer) and tests build
/// these, so the dispatcher can rely on the envelope invariants.
#[derive(Debug, Clone)]
pub struct ValidatedTask {
    /// The request as received, echoed back in the response
    pub request: TaskRequest,

    /// Tool name and raw arguments from the first data part
    pub invocation: ToolInvocation,
}

impl ValidatedTask {
    /// Validate a decoded request and extract its tool invocation
    pub fn new(request: TaskRequest) -> A2AResult<Self> {
        request.validate()?;
        let invocation = request.tool_invocation()?;

        Ok(Self {
            request,
            invocation,
        })
    }

    /// The caller-chosen task id
    pub fn task_id(&self) -> &str {
        &self.request.task_id
    }
}
