//! HTTP handlers for the LightRAG placeholder

use axum::{routing::get, Json, Router};
use raiserve::health_router;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::SERVICE_NAME;

/// Message returned by `GET /`
pub const ROOT_MESSAGE: &str =
    "LightRAG server is running. Replace this with actual implementation.";

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootInfo {
    /// Informational message
    pub message: String,
}

impl Default for RootInfo {
    fn default() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root_info() -> Json<RootInfo> {
    debug!("Root info requested");
    Json(RootInfo::default())
}

/// Create router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root_info))
        .merge(health_router(SERVICE_NAME))
}
