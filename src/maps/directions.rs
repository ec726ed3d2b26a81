//! Turn-by-turn directions

use serde::{Deserialize, Serialize};

use crate::{protocol::error::A2AResult, transport::Transport};

use super::{status::require_results, MapsClient, Operation, TextValue, DEFAULT_TRAVEL_MODE};

/// Arguments of `maps_directions`
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsArgs {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Candidate routes in provider order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionsResult {
    pub routes: Vec<RouteSummary>,
}

/// A route reduced to its first leg
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSummary {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<RouteStep>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStep {
    /// Provider instructions, HTML markup included
    pub instructions: String,
    pub distance: TextValue,
    pub duration: TextValue,
    pub travel_mode: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsPayload {
    #[serde(default)]
    routes: Vec<ProviderRoute>,
}

#[derive(Debug, Deserialize)]
struct ProviderRoute {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    legs: Vec<ProviderLeg>,
}

#[derive(Debug, Deserialize)]
struct ProviderLeg {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
    #[serde(default)]
    steps: Vec<ProviderStep>,
}

#[derive(Debug, Deserialize)]
struct ProviderStep {
    #[serde(default)]
    html_instructions: String,
    distance: TextValue,
    duration: TextValue,
    #[serde(default)]
    travel_mode: String,
}

impl From<ProviderRoute> for RouteSummary {
    fn from(route: ProviderRoute) -> Self {
        let leg = route.legs.into_iter().next();

        match leg {
            Some(leg) => Self {
                summary: route.summary,
                distance: leg.distance,
                duration: leg.duration,
                steps: Some(leg.steps.into_iter().map(RouteStep::from).collect()),
            },
            None => Self {
                summary: route.summary,
                distance: None,
                duration: None,
                steps: None,
            },
        }
    }
}

impl From<ProviderStep> for RouteStep {
    fn from(step: ProviderStep) -> Self {
        Self {
            instructions: step.html_instructions,
            distance: step.distance,
            duration: step.duration,
            travel_mode: step.travel_mode,
        }
    }
}

impl<T> MapsClient<T>
where
    T: Transport,
{
    /// Route from origin to destination
    pub async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: Option<&str>,
    ) -> A2AResult<DirectionsResult> {
        let operation = Operation::Directions;
        let request = operation
            .request()
            .query("origin", origin)
            .query("destination", destination)
            .query("mode", mode.unwrap_or(DEFAULT_TRAVEL_MODE));

        let payload: DirectionsPayload = self.fetch(operation, request).await?;
        require_results(operation, &payload.routes)?;

        Ok(DirectionsResult {
            routes: payload.routes.into_iter().map(RouteSummary::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::mock::StubTransport;

    #[tokio::test]
    async fn test_directions() {
        let transport = StubTransport::json(json!({
            "status": "OK",
            "routes": [{
                "summary": "I-280 S",
                "legs": [{
                    "distance": {"text": "48.2 km", "value": 48231},
                    "duration": {"text": "35 mins", "value": 2100},
                    "steps": [
                        {
                            "html_instructions": "Head <b>south</b> on Market St",
                            "distance": {"text": "0.3 km", "value": 300},
                            "duration": {"text": "1 min", "value": 60},
                            "travel_mode": "DRIVING"
                        },
                        {
                            "html_instructions": "Merge onto <b>I-280 S</b>",
                            "distance": {"text": "47.9 km", "value": 47931},
                            "duration": {"text": "34 mins", "value": 2040},
                            "travel_mode": "DRIVING"
                        }
                    ]
                }]
            }]
        }));
        let client = MapsClient::new(transport, "k");

        let result = client
            .directions("San Francisco", "Mountain View", None)
            .await
            .unwrap();

        let route = &result.routes[0];
        assert_eq!(route.summary, "I-280 S");
        assert_eq!(route.distance.as_ref().unwrap().value, 48231);

        let steps = route.steps.as_ref().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].instructions, "Head <b>south</b> on Market St");
        assert_eq!(steps[1].travel_mode, "DRIVING");

        let sent = client.transport().sent();
        assert_eq!(sent[0].endpoint, "directions/json");
        assert_eq!(sent[0].param("origin"), Some("San Francisco"));
        assert_eq!(sent[0].param("mode"), Some("driving"));
    }

    #[tokio::test]
    async fn test_route_without_legs() {
        let transport = StubTransport::json(json!({
            "status": "OK",
            "routes": [{"summary": "empty", "legs": []}]
        }));
        let client = MapsClient::new(transport, "k");

        let result = client.directions("a", "b", Some("walking")).await.unwrap();
        let wire = serde_json::to_value(&result.routes[0]).unwrap();
        assert_eq!(wire, json!({"summary": "empty"}));
    }

    #[tokio::test]
    async fn test_directions_not_found() {
        let transport = StubTransport::json(json!({"status": "NOT_FOUND", "routes": []}));
        let client = MapsClient::new(transport, "k");

        let err = client.directions("a", "b", None).await.unwrap_err();
        assert_eq!(err.to_string(), "Directions request failed: NOT_FOUND");
    }

    #[tokio::test]
    async fn test_directions_ok_without_routes() {
        let transport = StubTransport::json(json!({"status": "OK", "routes": []}));
        let client = MapsClient::new(transport, "k");

        let err = client.directions("a", "b", None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Directions request failed: no results returned"
        );
    }
}
