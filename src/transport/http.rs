//! HTTP transport to the maps provider

use async_trait::async_trait;
use url::Url;

use crate::protocol::error::A2AError;

use super::{Transport, TransportRequest, TransportResponse};

/// Default base URL of the Google Maps web services
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// HTTP transport implementation using reqwest
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Arguments
    ///
    /// * `base_url` - The provider base URL; endpoint paths are joined onto it
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new HTTP transport with a custom reqwest client
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: with_trailing_slash(base_url),
        }
    }

    /// Resolve a request to its full URL, query included
    fn request_url(&self, request: &TransportRequest) -> Result<Url, A2AError> {
        let mut url = self.base_url.join(&request.endpoint).map_err(|e| {
            A2AError::Transport(format!("Invalid endpoint {}: {}", request.endpoint, e))
        })?;
        url.query_pairs_mut().extend_pairs(&request.query);
        Ok(url)
    }
}

/// `Url::join` drops the last path segment unless the base ends with a slash
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, A2AError> {
        let url = self.request_url(&request)?;

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
