//! Validation layer turning raw request bodies into validated tasks

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use bytes::Bytes;
use tower_layer::Layer;
use tower_service::Service;

use crate::{
    codec::{Codec, JsonCodec},
    protocol::{error::A2AError, task::TaskResponse},
    service::ValidatedTask,
};

/// Layer that decodes and validates task requests before dispatch
#[derive(Clone)]
pub struct TaskValidationLayer {
    codec: Arc<dyn Codec>,
}

impl TaskValidationLayer {
    /// Create a new validation layer using the given codec
    pub fn new(codec: Arc<dyn Codec>) -> Self {
        Self { codec }
    }
}

impl Default for TaskValidationLayer {
    fn default() -> Self {
        Self::new(Arc::new(JsonCodec))
    }
}

impl<S> Layer<S> for TaskValidationLayer {
    type Service = TaskValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TaskValidationService {
            inner,
            codec: self.codec.clone(),
        }
    }
}

/// Validation service that wraps an inner service
///
/// A request that fails decoding or validation is answered with
/// [`A2AError::MalformedRequest`] and never reaches the inner service.
#[derive(Clone)]
pub struct TaskValidationService<S> {
    inner: S,
    codec: Arc<dyn Codec>,
}

impl<S> TaskValidationService<S> {
    /// Decode a request body and validate it
    fn validate_request(&self, body: &[u8]) -> Result<ValidatedTask, A2AError> {
        let request = self.codec.decode_request(body)?;
        ValidatedTask::new(request)
    }
}

impl<S> Service<Bytes> for TaskValidationService<S>
where
    S: Service<ValidatedTask, Response = TaskResponse, Error = A2AError> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = TaskResponse;
    type Error = A2AError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, body: Bytes) -> Self::Future {
        let task = match self.validate_request(&body) {
            Ok(task) => task,
            Err(e) => {
                tracing::warn!(error = %e, "rejected task request");
                return Box::pin(async move { Err(e) });
            }
        };

        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(task).await })
    }
}
