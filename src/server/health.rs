//! Health check and service info endpoints.
//!
//! `/health` and `/api/health` return 200 with a small JSON body whenever the
//! server is accepting connections. They touch no state.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Service name reported by `/health`.
pub const BACKEND_SERVICE: &str = "Healthcare AI Backend";
/// Service name reported by `/api/health`.
pub const API_SERVICE: &str = "Healthcare AI API";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

impl HealthResponse {
    fn healthy(service: &str) -> Self {
        HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            service: service.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Healthcare AI Assistant API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /health`
///
/// ```ignore
/// GET /health HTTP/1.1
///
/// HTTP/1.1 200 OK
/// Content-Type: application/json
///
/// {"status":"healthy","timestamp":"2026-01-01T00:00:00Z","service":"Healthcare AI Backend"}
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Health check performed");
    Json(HealthResponse::healthy(BACKEND_SERVICE))
}

/// `GET /api/health`
pub async fn api_health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(API_SERVICE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_backend_service() {
        let Json(body) = health_handler().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, BACKEND_SERVICE);
    }

    #[tokio::test]
    async fn api_health_reports_api_service() {
        let Json(body) = api_health_handler().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, API_SERVICE);
    }

    #[tokio::test]
    async fn root_reports_crate_version() {
        let Json(body) = root_handler().await;
        assert_eq!(body.status, "running");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
