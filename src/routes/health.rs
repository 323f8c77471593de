//! Health check endpoint for load balancers and container orchestration.
//!
//! Provides a liveness probe that answers `{"status":"OK"}` whenever the process
//! can serve HTTP. It performs no I/O and holds no state, so it is safe to call
//! from any number of concurrent requests.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Reported service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "OK")]
    Ok,
}

/// Body of a health check response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    pub const fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
        }
    }
}

/// Health check handler.
///
/// Always reports `OK`; if the response cannot be written, that is the
/// transport's failure, not this handler's.
pub async fn healthcheck() -> Json<HealthResponse> {
    tracing::trace!("Health check");
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_is_exact() {
        let body = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(body, r#"{"status":"OK"}"#);
    }

    #[test]
    fn test_deserialize_status() {
        let parsed: HealthResponse = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert_eq!(parsed.status, HealthStatus::Ok);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<HealthResponse>(r#"{"status":"DOWN"}"#).is_err());
    }

    #[tokio::test]
    async fn test_handler_returns_ok() {
        let Json(response) = healthcheck().await;
        assert_eq!(response, HealthResponse::ok());
    }
}
