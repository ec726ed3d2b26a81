//! Serialization codecs for the task envelope

pub mod json;

pub use json::JsonCodec;

use bytes::Bytes;

use crate::protocol::{
    error::A2AResult,
    task::{TaskRequest, TaskResponse},
};

/// Codec trait for decoding task requests and encoding task responses
pub trait Codec: Send + Sync {
    /// Decode a raw request body into a task request
    ///
    /// Decoding is structural only: the envelope shape and the first message are
    /// checked, tool arguments are not. Violations are reported as
    /// [`A2AError::MalformedRequest`](crate::protocol::A2AError::MalformedRequest).
    fn decode_request(&self, body: &[u8]) -> A2AResult<TaskRequest>;

    /// Encode a task response for the wire
    fn encode_response(&self, response: &TaskResponse) -> A2AResult<Bytes>;

    /// Get the content type for this codec
    fn content_type(&self) -> &str;
}
