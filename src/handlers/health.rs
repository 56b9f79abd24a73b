//! Health check handler
//!
//! This module provides the health check endpoint for monitoring the API status.

use axum::Json;
use serde::Serialize;

/// Public health check response
///
/// Simple status indicator for load balancers and health monitoring.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
}

/// Public health check handler that returns simple status
///
/// # Example
/// ```bash
/// curl http://localhost:3000/api/health
/// # Returns: {"status":"ok"}
/// ```
pub async fn health_check() -> Json<HealthCheckResponse> {
    tracing::debug!("Health check requested - system operational");
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
