//! The closed set of tools a task can name

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    maps::{
        directions::DirectionsArgs,
        distance::DistanceMatrixArgs,
        elevation::{ElevationArgs, ElevationByAddressArgs},
        geocode::{GeocodeArgs, ReverseGeocodeArgs},
        places::{PlaceDetailsArgs, SearchPlacesArgs},
        MapsClient,
    },
    protocol::error::{A2AError, A2AResult},
    transport::Transport,
};

/// A registered tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Geocode,
    ReverseGeocode,
    SearchPlaces,
    PlaceDetails,
    DistanceMatrix,
    Elevation,
    ElevationByAddress,
    Directions,
}

impl Tool {
    /// Every tool, in registry order
    pub const ALL: [Tool; 8] = [
        Tool::Geocode,
        Tool::ReverseGeocode,
        Tool::SearchPlaces,
        Tool::PlaceDetails,
        Tool::DistanceMatrix,
        Tool::Elevation,
        Tool::ElevationByAddress,
        Tool::Directions,
    ];

    /// The `toolName` callers use
    pub fn name(self) -> &'static str {
        match self {
            Tool::Geocode => "maps_geocode",
            Tool::ReverseGeocode => "maps_reverse_geocode",
            Tool::SearchPlaces => "maps_search_places",
            Tool::PlaceDetails => "maps_place_details",
            Tool::DistanceMatrix => "maps_distance_matrix",
            Tool::Elevation => "maps_elevation",
            Tool::ElevationByAddress => "maps_get_elevation_by_address",
            Tool::Directions => "maps_directions",
        }
    }

    /// Decode the arguments, run the adapter, and return its normalized result
    pub async fn invoke<T>(self, client: &MapsClient<T>, arguments: Value) -> A2AResult<Value>
    where
        T: Transport,
    {
        match self {
            Tool::Geocode => {
                let args: GeocodeArgs = self.arguments(arguments)?;
                to_result(client.geocode(&args.address).await?)
            }
            Tool::ReverseGeocode => {
                let args: ReverseGeocodeArgs = self.arguments(arguments)?;
                to_result(client.reverse_geocode(args.latitude, args.longitude).await?)
            }
            Tool::SearchPlaces => {
                let args: SearchPlacesArgs = self.arguments(arguments)?;
                to_result(
                    client
                        .search_places(&args.query, args.location, args.radius)
                        .await?,
                )
            }
            Tool::PlaceDetails => {
                let args: PlaceDetailsArgs = self.arguments(arguments)?;
                to_result(client.place_details(&args.place_id).await?)
            }
            Tool::DistanceMatrix => {
                let args: DistanceMatrixArgs = self.arguments(arguments)?;
                to_result(
                    client
                        .distance_matrix(&args.origins, &args.destinations, args.mode.as_deref())
                        .await?,
                )
            }
            Tool::Elevation => {
                let args: ElevationArgs = self.arguments(arguments)?;
                to_result(client.elevation(&args.locations).await?)
            }
            Tool::ElevationByAddress => {
                let args: ElevationByAddressArgs = self.arguments(arguments)?;
                to_result(client.elevation_by_address(&args.address).await?)
            }
            Tool::Directions => {
                let args: DirectionsArgs = self.arguments(arguments)?;
                to_result(
                    client
                        .directions(&args.origin, &args.destination, args.mode.as_deref())
                        .await?,
                )
            }
        }
    }

    fn arguments<A: DeserializeOwned>(self, arguments: Value) -> A2AResult<A> {
        serde_json::from_value(arguments).map_err(|e| A2AError::InvalidArguments {
            tool: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

fn to_result<R: Serialize>(result: R) -> A2AResult<Value> {
    Ok(serde_json::to_value(result)?)
}

/// Lookup from tool name to tool, built once and shared read-only
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, Tool>,
}

impl ToolRegistry {
    /// Build the registry of all tools
    pub fn new() -> Self {
        Self {
            tools: Tool::ALL.iter().map(|tool| (tool.name(), *tool)).collect(),
        }
    }

    /// Resolve a tool name
    pub fn resolve(&self, name: &str) -> A2AResult<Tool> {
        self.tools
            .get(name)
            .copied()
            .ok_or_else(|| A2AError::UnknownTool(name.to_string()))
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::mock::StubTransport;

    #[test]
    fn test_registry_resolves_every_tool() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), Tool::ALL.len());

        for tool in Tool::ALL {
            assert_eq!(registry.resolve(tool.name()).unwrap(), tool);
        }
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ToolRegistry::new();

        let err = registry.resolve("maps_nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: maps_nonexistent");
        assert!(registry.resolve("").is_err());
        assert!(registry.resolve("MAPS_GEOCODE").is_err());
    }

    #[test]
    fn test_names_sorted() {
        let names = ToolRegistry::new().names();
        assert_eq!(names.first(), Some(&"maps_directions"));
        assert_eq!(names.last(), Some(&"maps_search_places"));
    }

    #[tokio::test]
    async fn test_invoke_maps_arguments_by_name() {
        let transport = StubTransport::json(json!({
            "status": "OK",
            "routes": [{"summary": "US-101", "legs": []}]
        }));
        let client = MapsClient::new(transport, "k");

        let result = Tool::Directions
            .invoke(
                &client,
                json!({"origin": "A", "destination": "B", "mode": "bicycling"}),
            )
            .await
            .unwrap();
        assert_eq!(result, json!({"routes": [{"summary": "US-101"}]}));

        let sent = client.transport().sent();
        assert_eq!(sent[0].param("mode"), Some("bicycling"));
    }

    #[tokio::test]
    async fn test_invoke_rejects_bad_arguments() {
        let client = MapsClient::new(StubTransport::json(json!({"status": "OK"})), "k");

        let err = Tool::ReverseGeocode
            .invoke(&client, json!({"latitude": "north"}))
            .await
            .unwrap_err();
        assert!(matches!(err, A2AError::InvalidArguments { .. }));
        assert!(err
            .to_string()
            .starts_with("Invalid arguments for maps_reverse_geocode:"));
        assert!(client.transport().sent().is_empty());
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(Tool::DistanceMatrix.name(), "maps_distance_matrix");
        assert_eq!(Tool::ElevationByAddress.name(), "maps_get_elevation_by_address");
    }
}
