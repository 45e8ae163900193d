//! HTTP handlers for the MCP mock

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header,
    routing::post,
    Json, Router,
};
use raiserve::health_router;
use serde_json::{Map, Value};
use tracing::debug;

use crate::protocol::JsonRpcResponse;
use crate::SERVICE_NAME;

/// JSON object body of `POST /mcp`
///
/// A request without a `Content-Type` header is still parsed as JSON. When
/// the header is present it must be a JSON media type.
#[derive(Debug, Clone)]
pub struct McpRequest(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for McpRequest
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(body) = Json::<Map<String, Value>>::from_request(req, state).await?;
            return Ok(Self(body));
        }

        let bytes = Bytes::from_request(req, state).await?;
        let Json(body) = Json::<Map<String, Value>>::from_bytes(&bytes)?;
        Ok(Self(body))
    }
}

/// POST /mcp - Acknowledge any JSON object with the mock result
///
/// Bodies that are not JSON objects are rejected by [`McpRequest`]
/// before this runs.
pub async fn mcp_endpoint(McpRequest(request): McpRequest) -> Json<JsonRpcResponse> {
    let response = JsonRpcResponse::acknowledge(&request);
    debug!(id = %response.id, "MCP request acknowledged");
    Json(response)
}

/// Create router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/mcp", post(mcp_endpoint))
        .merge(health_router(SERVICE_NAME))
}
