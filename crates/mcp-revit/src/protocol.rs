// MCP JSON-RPC envelope
//
// Only the response envelope is modelled. Requests are arbitrary JSON
// objects from which nothing but `id` is read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC 2.0 specification version
pub const JSONRPC_VERSION: &str = "2.0";

/// Message carried by every mock result
pub const MOCK_MESSAGE: &str = "Mock response";

/// Result payload of the mock acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockResult {
    /// Fixed message
    pub message: String,
}

impl Default for MockResult {
    fn default() -> Self {
        Self {
            message: MOCK_MESSAGE.to_string(),
        }
    }
}

/// JSON-RPC 2.0 shaped response
///
/// Field order is the wire order: `jsonrpc`, `result`, `id`. `id` is
/// always present and is `null` when the request carried none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version string, always "2.0"
    pub jsonrpc: String,
    /// Result of the call
    pub result: MockResult,
    /// Identifier echoed from the request
    pub id: Value,
}

impl JsonRpcResponse {
    /// Mock acknowledgment for a request id
    pub fn mock(id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: MockResult::default(),
            id,
        }
    }

    /// Mock acknowledgment for a raw request object
    pub fn acknowledge(request: &Map<String, Value>) -> Self {
        Self::mock(request_id(request))
    }
}

/// The request's `id`, or `null` when absent
///
/// Any JSON type is accepted and copied verbatim.
pub fn request_id(request: &Map<String, Value>) -> Value {
    request.get("id").cloned().unwrap_or(Value::Null)
}
