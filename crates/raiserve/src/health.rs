//! Liveness probe shared by every service

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Status reported by a running process
pub const STATUS_HEALTHY: &str = "healthy";

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always [`STATUS_HEALTHY`]
    pub status: String,

    /// Service identifier
    pub service: String,
}

impl HealthResponse {
    /// Healthy status for a service
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            service: service.into(),
        }
    }
}

/// Router exposing `GET /health` for the given service identifier
///
/// The response only depends on `service`, so the probe answers as long
/// as the process can serve HTTP.
pub fn health_router<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/health",
        get(move || async move {
            debug!(service, "Health check");
            Json(HealthResponse::healthy(service))
        }),
    )
}
