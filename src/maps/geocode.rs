//! Forward and reverse geocoding

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{protocol::error::A2AResult, transport::Transport};

use super::{status::NO_RESULTS, Coordinates, Geometry, LatLng, MapsClient, Operation};

/// Arguments of `maps_geocode`
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeArgs {
    pub address: String,
}

/// Arguments of `maps_reverse_geocode`
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeArgs {
    pub latitude: f64,
    pub longitude: f64,
}

/// Best match for an address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    pub location: LatLng,
    pub formatted_address: String,
    pub place_id: String,
}

/// Best match for a coordinate pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReverseGeocodeResult {
    pub formatted_address: String,
    pub place_id: String,
    pub address_components: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct GeocodePayload {
    #[serde(default)]
    results: Vec<GeocodeMatch>,
}

#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    geometry: Geometry,
    #[serde(default)]
    formatted_address: String,
    #[serde(default)]
    place_id: String,
    #[serde(default)]
    address_components: Vec<Value>,
}

impl GeocodePayload {
    fn best_match(self, operation: Operation) -> A2AResult<GeocodeMatch> {
        self.results
            .into_iter()
            .next()
            .ok_or_else(|| operation.failure(NO_RESULTS))
    }
}

impl<T> MapsClient<T>
where
    T: Transport,
{
    /// Resolve an address to its best-matching location
    pub async fn geocode(&self, address: &str) -> A2AResult<GeocodeResult> {
        let operation = Operation::Geocode;
        let request = operation.request().query("address", address);

        let payload: GeocodePayload = self.fetch(operation, request).await?;
        let best = payload.best_match(operation)?;

        Ok(GeocodeResult {
            location: best.geometry.location,
            formatted_address: best.formatted_address,
            place_id: best.place_id,
        })
    }

    /// Resolve a coordinate pair to its best-matching address
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> A2AResult<ReverseGeocodeResult> {
        let operation = Operation::ReverseGeocode;
        let latlng = Coordinates {
            latitude,
            longitude,
        };
        let request = operation.request().query("latlng", latlng.to_param());

        let payload: GeocodePayload = self.fetch(operation, request).await?;
        let best = payload.best_match(operation)?;

        Ok(ReverseGeocodeResult {
            formatted_address: best.formatted_address,
            place_id: best.place_id,
            address_components: best.address_components,
        })
    }
}
