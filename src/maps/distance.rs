//! Distance matrix between sets of origins and destinations

use serde::{Deserialize, Serialize};

use crate::{protocol::error::A2AResult, transport::Transport};

use super::{MapsClient, Operation, TextValue, DEFAULT_TRAVEL_MODE};

/// Arguments of `maps_distance_matrix`
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixArgs {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Travel distances and durations, one row per origin and one element per destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistanceMatrixResult {
    pub origin_addresses: Vec<String>,
    pub destination_addresses: Vec<String>,
    pub results: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

/// One origin/destination pair; distance and duration are absent unless the status is OK
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixElement {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct MatrixPayload {
    #[serde(default)]
    origin_addresses: Vec<String>,
    #[serde(default)]
    destination_addresses: Vec<String>,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

impl<T> MapsClient<T>
where
    T: Transport,
{
    /// Compute travel distance and time for every origin/destination pair
    ///
    /// Rows and elements keep the provider's order.
    pub async fn distance_matrix(
        &self,
        origins: &[String],
        destinations: &[String],
        mode: Option<&str>,
    ) -> A2AResult<DistanceMatrixResult> {
        let operation = Operation::DistanceMatrix;
        let request = operation
            .request()
            .query("origins", origins.join("|"))
            .query("destinations", destinations.join("|"))
            .query("mode", mode.unwrap_or(DEFAULT_TRAVEL_MODE));

        let payload: MatrixPayload = self.fetch(operation, request).await?;

        Ok(DistanceMatrixResult {
            origin_addresses: payload.origin_addresses,
            destination_addresses: payload.destination_addresses,
            results: payload.rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::transport::mock::StubTransport;

    fn element(km: u64) -> Value {
        json!({
            "status": "OK",
            "distance": {"text": format!("{} km", km), "value": km * 1000},
            "duration": {"text": format!("{} mins", km), "value": km * 60}
        })
    }

    #[tokio::test]
    async fn test_distance_matrix_preserves_order() {
        let transport = StubTransport::json(json!({
            "status": "OK",
            "origin_addresses": ["Boston, MA", "Providence, RI"],
            "destination_addresses": ["New York, NY", "Albany, NY", "Hartford, CT"],
            "rows": [
                {"elements": [element(11), element(12), element(13)]},
                {"elements": [element(21), element(22), {"status": "ZERO_RESULTS"}]}
            ]
        }));
        let client = MapsClient::new(transport, "k");

        let origins = vec!["Boston".to_string(), "Providence".to_string()];
        let destinations = vec![
            "New York".to_string(),
            "Albany".to_string(),
            "Hartford".to_string(),
        ];
        let result = client
            .distance_matrix(&origins, &destinations, None)
            .await
            .unwrap();

        assert_eq!(result.results.len(), 2);
        assert!(result.results.iter().all(|row| row.elements.len() == 3));
        assert_eq!(result.results[0].elements[1].distance.as_ref().unwrap().value, 12_000);
        assert_eq!(result.results[1].elements[0].distance.as_ref().unwrap().value, 21_000);

        let unreachable = &result.results[1].elements[2];
        assert_eq!(unreachable.status, "ZERO_RESULTS");
        assert!(unreachable.distance.is_none());

        let sent = client.transport().sent();
        assert_eq!(sent[0].param("origins"), Some("Boston|Providence"));
        assert_eq!(sent[0].param("destinations"), Some("New York|Albany|Hartford"));
        assert_eq!(sent[0].param("mode"), Some("driving"));
    }

    #[tokio::test]
    async fn test_distance_matrix_mode_and_failure() {
        let transport = StubTransport::json(json!({
            "status": "MAX_ELEMENTS_EXCEEDED",
            "error_message": "Too many elements"
        }));
        let client = MapsClient::new(transport, "k");

        let err = client
            .distance_matrix(&["a".to_string()], &["b".to_string()], Some("walking"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Distance matrix request failed: Too many elements"
        );
        assert_eq!(client.transport().sent()[0].param("mode"), Some("walking"));
    }
}
