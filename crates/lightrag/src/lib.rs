//! lightrag - LightRAG placeholder service
//!
//! Answers a liveness probe and a root info request. The retrieval pipeline
//! itself is not implemented here.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod cli;
pub mod handlers;

pub use handlers::{create_router, RootInfo};

use raiserve::config::DEFAULT_HOST;
use raiserve::ServerConfig;

/// Service identifier reported by `GET /health`
pub const SERVICE_NAME: &str = "lightrag-revitai";

/// Service title shown at startup
pub const TITLE: &str = "LightRAG Server for RevitAI";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Prefix for `LIGHTRAG_HOST`, `LIGHTRAG_PORT` and `LIGHTRAG_LOG_LEVEL`
pub const ENV_PREFIX: &str = "LIGHTRAG";

/// Configuration before file, environment and flag overrides
#[must_use]
pub fn default_config() -> ServerConfig {
    ServerConfig::with_defaults(DEFAULT_HOST, DEFAULT_PORT)
}
