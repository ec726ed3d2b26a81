//! Place text search and place details

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{protocol::error::A2AResult, transport::Transport};

use super::{Coordinates, Geometry, LatLng, MapsClient, Operation};

/// Fields requested from the details endpoint
const DETAIL_FIELDS: &str = "name,place_id,formatted_address,geometry/location,\
formatted_phone_number,website,rating,reviews,opening_hours";

/// Arguments of `maps_search_places`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPlacesArgs {
    pub query: String,
    #[serde(default)]
    pub location: Option<Coordinates>,
    /// Search radius in meters
    #[serde(default)]
    pub radius: Option<f64>,
}

/// Arguments of `maps_place_details`
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsArgs {
    pub place_id: String,
}

/// Places matching a text query, in provider order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceSearchResult {
    pub places: Vec<PlaceSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    pub location: LatLng,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// Details of one place
///
/// Reviews and opening hours are passed through in the provider's own shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    pub location: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<ProviderPlace>,
}

#[derive(Debug, Deserialize)]
struct DetailsPayload {
    result: ProviderPlace,
}

/// Place record shared by the search and details endpoints
#[derive(Debug, Deserialize)]
struct ProviderPlace {
    #[serde(default)]
    name: String,
    formatted_address: Option<String>,
    geometry: Geometry,
    #[serde(default)]
    place_id: String,
    rating: Option<f64>,
    types: Option<Vec<String>>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    reviews: Option<Vec<Value>>,
    opening_hours: Option<Value>,
}

impl From<ProviderPlace> for PlaceSummary {
    fn from(place: ProviderPlace) -> Self {
        Self {
            name: place.name,
            formatted_address: place.formatted_address,
            location: place.geometry.location,
            place_id: place.place_id,
            rating: place.rating,
            types: place.types,
        }
    }
}

impl From<ProviderPlace> for PlaceDetails {
    fn from(place: ProviderPlace) -> Self {
        Self {
            name: place.name,
            formatted_address: place.formatted_address,
            location: place.geometry.location,
            formatted_phone_number: place.formatted_phone_number,
            website: place.website,
            rating: place.rating,
            reviews: place.reviews,
            opening_hours: place.opening_hours,
        }
    }
}

impl<T> MapsClient<T>
where
    T: Transport,
{
    /// Search places by free text, optionally biased towards a location
    pub async fn search_places(
        &self,
        query: &str,
        location: Option<Coordinates>,
        radius: Option<f64>,
    ) -> A2AResult<PlaceSearchResult> {
        let operation = Operation::PlaceSearch;
        let mut request = operation.request().query("query", query);

        if let Some(location) = location {
            request = request.query("location", location.to_param());
        }
        if let Some(radius) = radius.filter(|radius| *radius != 0.0) {
            request = request.query("radius", radius.to_string());
        }

        let payload: SearchPayload = self.fetch(operation, request).await?;

        Ok(PlaceSearchResult {
            places: payload.results.into_iter().map(PlaceSummary::from).collect(),
        })
    }

    /// Fetch the details of one place
    pub async fn place_details(&self, place_id: &str) -> A2AResult<PlaceDetails> {
        let operation = Operation::PlaceDetails;
        let request = operation
            .request()
            .query("place_id", place_id)
            .query("fields", DETAIL_FIELDS);

        let payload: DetailsPayload = self.fetch(operation, request).await?;
        Ok(PlaceDetails::from(payload.result))
    }
}
