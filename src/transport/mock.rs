use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    protocol::error::A2AError,
    transport::{Transport, TransportRequest, TransportResponse},
};

type Handler = dyn Fn(&TransportRequest) -> TransportResponse + Send + Sync;

/// Stub transport for internal testing
///
/// Answers every request through a closure and records what was sent, so tests
/// can feed canned provider bodies and inspect query parameters afterwards.
#[derive(Clone)]
pub(crate) struct StubTransport {
    handler: Arc<Handler>,
    sent: Arc<Mutex<Vec<TransportRequest>>>,
}

impl StubTransport {
    /// Create a new stub transport with a custom request handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&TransportRequest) -> TransportResponse + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a stub that answers every request with the same JSON body
    pub fn json(body: Value) -> Self {
        let bytes = serde_json::to_vec(&body).unwrap();
        Self::new(move |_| TransportResponse::new(200).body(bytes.clone()))
    }

    /// Create a stub that answers per endpoint, 404 for anything else
    pub fn routes(routes: Vec<(&'static str, Value)>) -> Self {
        Self::new(move |request| {
            routes
                .iter()
                .find(|(endpoint, _)| *endpoint == request.endpoint)
                .map(|(_, body)| {
                    TransportResponse::new(200).body(serde_json::to_vec(body).unwrap())
                })
                .unwrap_or_else(|| TransportResponse::new(404))
        })
    }

    /// Requests received so far
    pub fn sent(&self) -> Vec<TransportRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError> {
        let response = (self.handler)(&request);
        self.sent.lock().unwrap().push(request);
        Ok(response)
    }
}

impl std::fmt::Debug for StubTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubTransport").finish()
    }
}
