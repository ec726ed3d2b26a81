//! Elevation lookups, by coordinates or by address

use serde::{Deserialize, Serialize};

use crate::{protocol::error::A2AResult, transport::Transport};

use super::{Coordinates, GeocodeResult, LatLng, MapsClient, Operation};

/// Arguments of `maps_elevation`
#[derive(Debug, Clone, Deserialize)]
pub struct ElevationArgs {
    pub locations: Vec<Coordinates>,
}

/// Arguments of `maps_get_elevation_by_address`
#[derive(Debug, Clone, Deserialize)]
pub struct ElevationByAddressArgs {
    pub address: String,
}

/// Elevation samples in request order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationResult {
    pub results: Vec<ElevationSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationSample {
    /// Meters above sea level
    pub elevation: f64,
    pub location: LatLng,
    /// Distance in meters between the interpolated data points
    pub resolution: f64,
}

/// Elevation of a geocoded address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressElevation {
    #[serde(flatten)]
    pub elevation: ElevationResult,
    /// The address as the caller gave it
    pub address: String,
    pub formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct ElevationPayload {
    #[serde(default)]
    results: Vec<ElevationSample>,
}

impl<T> MapsClient<T>
where
    T: Transport,
{
    /// Look up the elevation of each location
    pub async fn elevation(&self, locations: &[Coordinates]) -> A2AResult<ElevationResult> {
        let operation = Operation::Elevation;
        let locations = locations
            .iter()
            .map(|location| location.to_param())
            .collect::<Vec<_>>()
            .join("|");
        let request = operation.request().query("locations", locations);

        let payload: ElevationPayload = self.fetch(operation, request).await?;
        Ok(ElevationResult {
            results: payload.results,
        })
    }

    /// Geocode an address, then look up the elevation of the match
    ///
    /// The stages run strictly in order. A geocoding failure ends the pipeline
    /// before any elevation request is sent, and either stage's error is returned
    /// unchanged.
    pub async fn elevation_by_address(&self, address: &str) -> A2AResult<AddressElevation> {
        let place = self.geocode(address).await?;
        self.elevation_of_place(address, place).await
    }

    async fn elevation_of_place(
        &self,
        address: &str,
        place: GeocodeResult,
    ) -> A2AResult<AddressElevation> {
        tracing::debug!(
            lat = place.location.lat,
            lng = place.location.lng,
            "geocoded address for elevation lookup"
        );

        let elevation = self
            .elevation(&[Coordinates::from(place.location)])
            .await?;

        Ok(AddressElevation {
            elevation,
            address: address.to_string(),
            formatted_address: place.formatted_address,
        })
    }
}
