//! Server lifecycle errors

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for server setup and lifecycle operations
pub type ServeResult<T> = Result<T, ServeError>;

/// Errors raised while configuring, binding or running a service.
///
/// Request handlers never fail; everything here happens outside a request.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigFile {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::ServerConfig`]
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Listener could not be bound
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// Requested address
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Accept loop terminated with an error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl ServeError {
    /// Shorthand for [`ServeError::InvalidConfig`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
