//! Transport abstraction for the upstream maps provider

pub mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;

use crate::protocol::error::A2AError;

/// A GET request against one provider endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// Endpoint path relative to the provider base URL (e.g., "geocode/json")
    pub endpoint: String,

    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
}

impl TransportRequest {
    /// Create a new transport request
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Look up the first value of a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw provider response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as bytes
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: Bytes::new(),
        }
    }

    /// Set the response body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Core transport trait for reaching the provider
///
/// The provider is a black box answering JSON for every request; interpreting the
/// body is left to the maps client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError>;
}
