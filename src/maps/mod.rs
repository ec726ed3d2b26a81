//! Upstream client adapters for the maps provider
//!
//! Every adapter turns typed arguments into one provider request and collapses the
//! provider's envelope into a flat result, or into an [`A2AError::Upstream`] whose
//! message names the failed operation.

pub mod directions;
pub mod distance;
pub mod elevation;
pub mod geocode;
pub mod places;
pub mod status;

pub use directions::{DirectionsResult, RouteStep, RouteSummary};
pub use distance::{DistanceMatrixResult, MatrixElement, MatrixRow};
pub use elevation::{AddressElevation, ElevationResult, ElevationSample};
pub use geocode::{GeocodeResult, ReverseGeocodeResult};
pub use places::{PlaceDetails, PlaceSearchResult, PlaceSummary};
pub use status::ProviderStatus;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    protocol::error::{A2AError, A2AResult},
    transport::{Transport, TransportRequest},
};

/// Travel mode used when the caller does not name one
pub const DEFAULT_TRAVEL_MODE: &str = "driving";

/// The provider operations this client performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Geocode,
    ReverseGeocode,
    PlaceSearch,
    PlaceDetails,
    DistanceMatrix,
    Elevation,
    Directions,
}

impl Operation {
    /// Endpoint path relative to the provider base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            Operation::Geocode | Operation::ReverseGeocode => "geocode/json",
            Operation::PlaceSearch => "place/textsearch/json",
            Operation::PlaceDetails => "place/details/json",
            Operation::DistanceMatrix => "distancematrix/json",
            Operation::Elevation => "elevation/json",
            Operation::Directions => "directions/json",
        }
    }

    /// Prefix used in failure messages
    pub fn label(self) -> &'static str {
        match self {
            Operation::Geocode => "Geocoding",
            Operation::ReverseGeocode => "Reverse geocoding",
            Operation::PlaceSearch => "Place search",
            Operation::PlaceDetails => "Place details request",
            Operation::DistanceMatrix => "Distance matrix request",
            Operation::Elevation => "Elevation request",
            Operation::Directions => "Directions request",
        }
    }

    /// Build the upstream failure for this operation
    pub fn failure(self, detail: impl std::fmt::Display) -> A2AError {
        A2AError::Upstream(format!("{} failed: {}", self.label(), detail))
    }

    /// Start a request against this operation's endpoint
    fn request(self) -> TransportRequest {
        TransportRequest::new(self.endpoint())
    }
}

/// A latitude/longitude pair as the provider spells it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A latitude/longitude pair as callers spell it in tool arguments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Render as the provider's `lat,lng` parameter form
    pub fn to_param(self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl From<LatLng> for Coordinates {
    fn from(location: LatLng) -> Self {
        Self {
            latitude: location.lat,
            longitude: location.lng,
        }
    }
}

/// A provider measurement: display text plus the raw value (meters or seconds)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

/// Client for the maps provider
///
/// Holds the transport and the API key; the key is appended to every request.
pub struct MapsClient<T> {
    transport: T,
    api_key: String,
}

impl<T> MapsClient<T>
where
    T: Transport,
{
    /// Create a new maps client
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport used to reach the provider
    /// * `api_key` - Provider credential sent as the `key` query parameter
    pub fn new(transport: T, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one provider call and decode the payload of an OK response
    async fn fetch<R>(&self, operation: Operation, request: TransportRequest) -> A2AResult<R>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(
            endpoint = %request.endpoint,
            params = request.query.len(),
            "calling maps provider"
        );

        let request = request.query("key", self.api_key.as_str());
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| operation.failure(e))?;

        let body: Value = match serde_json::from_slice(&response.body) {
            Ok(body) => body,
            Err(_) if !response.is_success() => {
                return Err(operation.failure(format!("HTTP {}", response.status)))
            }
            Err(e) => {
                return Err(operation.failure(format!("invalid provider response: {}", e)))
            }
        };

        let status = ProviderStatus::deserialize(&body)
            .map_err(|e| operation.failure(format!("invalid provider response: {}", e)))?;
        status.ensure_ok(operation)?;

        R::deserialize(body)
            .map_err(|e| operation.failure(format!("invalid provider response: {}", e)))
    }
}
