//! raiserve - shared server plumbing
//!
//! Axum bootstrap shared by the RevitAI stub services: configuration
//! layering, logging, the health payload and the server lifecycle.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Server lifecycle errors
pub mod error;

/// Server configuration from defaults, TOML, environment and flags
pub mod config;

/// Command-line arguments shared by every service binary
pub mod cli;

/// Tracing subscriber setup
pub mod logging;

/// Liveness probe payload and route
pub mod health;

/// Server instance management
pub mod server;

pub use config::ServerConfig;
pub use error::{ServeError, ServeResult};
pub use health::{health_router, HealthResponse};
pub use server::{shutdown_signal, StubServer};
