//! JSON codec for the task envelope

use bytes::Bytes;

use crate::{
    codec::Codec,
    protocol::{
        error::{A2AError, A2AResult},
        message::JSON_MIME_TYPE,
        task::{TaskRequest, TaskResponse, INVALID_TASK_STRUCTURE},
    },
};

/// JSON codec for the HTTP+JSON binding
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn decode_request(&self, body: &[u8]) -> A2AResult<TaskRequest> {
        let request: TaskRequest = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "task request does not match the envelope shape");
            A2AError::malformed(INVALID_TASK_STRUCTURE)
        })?;

        request.validate()?;
        Ok(request)
    }

    fn encode_response(&self, response: &TaskResponse) -> A2AResult<Bytes> {
        let bytes = serde_json::to_vec(response)?;
        Ok(Bytes::from(bytes))
    }

    fn content_type(&self) -> &str {
        JSON_MIME_TYPE
    }
}
