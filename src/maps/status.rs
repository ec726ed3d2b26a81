//! Provider status handling shared by every adapter

use serde::Deserialize;

use crate::protocol::error::A2AError;

use super::Operation;

const STATUS_OK: &str = "OK";

/// Failure detail for an OK response that carried nothing usable
pub(crate) const NO_RESULTS: &str = "no results returned";

/// The status block every provider response carries
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProviderStatus {
    /// `"OK"` on success, otherwise a provider code such as `ZERO_RESULTS`
    #[serde(default)]
    pub status: String,

    /// Free-text explanation attached to some failures
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ProviderStatus {
    /// Check if the provider reported success
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The most specific failure text available
    pub fn detail(&self) -> &str {
        self.error_message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(&self.status)
    }

    /// Turn a non-OK status into an upstream failure for `operation`
    pub fn ensure_ok(&self, operation: Operation) -> Result<(), A2AError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(operation.failure(self.detail()))
        }
    }
}

/// Fail when an OK response carried no items where at least one is required
pub(crate) fn require_results<T>(operation: Operation, items: &[T]) -> Result<(), A2AError> {
    if items.is_empty() {
        Err(operation.failure(NO_RESULTS))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ok_status() {
        let status: ProviderStatus = serde_json::from_value(json!({"status": "OK"})).unwrap();
        assert!(status.is_ok());
        assert!(status.ensure_ok(Operation::Geocode).is_ok());
    }

    #[test]
    fn test_error_message_preferred() {
        let status: ProviderStatus = serde_json::from_value(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }))
        .unwrap();

        let err = status.ensure_ok(Operation::Geocode).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Geocoding failed: The provided API key is invalid."
        );
    }

    #[test]
    fn test_status_code_fallback() {
        let status: ProviderStatus =
            serde_json::from_value(json!({"status": "ZERO_RESULTS", "error_message": ""}))
                .unwrap();

        let err = status.ensure_ok(Operation::Directions).unwrap_err();
        assert_eq!(err.to_string(), "Directions request failed: ZERO_RESULTS");
    }

    #[test]
    fn test_missing_status_is_failure() {
        let status: ProviderStatus = serde_json::from_value(json!({})).unwrap();
        assert!(!status.is_ok());
    }

    #[test]
    fn test_require_results() {
        let err = require_results::<u8>(Operation::ReverseGeocode, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Reverse geocoding failed: no results returned"
        );
        assert!(require_results(Operation::ReverseGeocode, &[1]).is_ok());
    }
}
