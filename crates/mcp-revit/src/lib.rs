//! mcp-revit - MCP Revit server mock
//!
//! Accepts any JSON object on `/mcp` and answers with a fixed JSON-RPC 2.0
//! shaped acknowledgment. No MCP methods are dispatched and nothing talks
//! to Revit.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod cli;
pub mod handlers;
/// JSON-RPC envelope types
pub mod protocol;

pub use handlers::create_router;
pub use protocol::{JsonRpcResponse, MockResult, JSONRPC_VERSION};

use raiserve::config::DEFAULT_HOST;
use raiserve::ServerConfig;

/// Service identifier reported by `GET /health`
pub const SERVICE_NAME: &str = "mcp-revit-mock";

/// Service title shown at startup
pub const TITLE: &str = "MCP Revit Server Mock";

/// Default listening port, next to the LightRAG placeholder's 8000
pub const DEFAULT_PORT: u16 = 8001;

/// Prefix for `MCP_REVIT_HOST`, `MCP_REVIT_PORT` and `MCP_REVIT_LOG_LEVEL`
pub const ENV_PREFIX: &str = "MCP_REVIT";

/// Configuration before file, environment and flag overrides
#[must_use]
pub fn default_config() -> ServerConfig {
    ServerConfig::with_defaults(DEFAULT_HOST, DEFAULT_PORT)
}
