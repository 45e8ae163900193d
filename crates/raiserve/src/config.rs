//! Server configuration from defaults, TOML or environment

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{ServeError, ServeResult};

/// Default host address, all interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted log levels
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Log level for tracing
    pub log_level: String,

    /// Enable logging output
    pub enable_logging: bool,
}

/// Optional overrides read from a TOML file; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileOverrides {
    host: Option<String>,
    port: Option<u16>,
    log_level: Option<String>,
    enable_logging: Option<bool>,
}

impl ServerConfig {
    /// Configuration with a service's default bind address
    #[must_use]
    pub fn with_defaults(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            enable_logging: true,
        }
    }

    /// Layer a TOML file on top of this configuration
    ///
    /// Keys missing from the file keep their current value.
    pub fn merge_toml_file(self, path: &Path) -> ServeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ServeError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml_str(&content)
            .map_err(|source| ServeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
    }

    fn merge_toml_str(mut self, content: &str) -> Result<Self, toml::de::Error> {
        let overrides: FileOverrides = toml::from_str(content)?;

        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        if let Some(enable_logging) = overrides.enable_logging {
            self.enable_logging = enable_logging;
        }

        Ok(self)
    }

    /// Apply environment variables with the given prefix
    ///
    /// Environment variables:
    /// - `<PREFIX>_HOST` - Server host
    /// - `<PREFIX>_PORT` - Server port (ignored if not a valid `u16`)
    /// - `<PREFIX>_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn apply_env(self, prefix: &str) -> Self {
        self.apply_env_from(prefix, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    #[must_use]
    pub fn apply_env_from<F>(mut self, prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(&format!("{prefix}_HOST")) {
            self.host = host;
        }

        if let Some(port_str) = lookup(&format!("{prefix}_PORT")) {
            if let Ok(port) = port_str.parse::<u16>() {
                self.port = port;
            }
        }

        if let Some(log_level) = lookup(&format!("{prefix}_LOG_LEVEL")) {
            self.log_level = log_level;
        }

        self
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> ServeResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServeError::invalid_config(format!("Invalid address: {}", e)))
    }

    /// Get the full server URL (e.g., "http://0.0.0.0:8000")
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> ServeResult<()> {
        if self.port == 0 {
            return Err(ServeError::invalid_config("Port cannot be zero"));
        }

        if self.host.is_empty() {
            return Err(ServeError::invalid_config("Host cannot be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ServeError::invalid_config(format!(
                "Invalid log level: {}. Must be one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert!(config.enable_logging);
    }

    #[test]
    fn test_config_from_env() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000).apply_env_from(
            "LIGHTRAG",
            lookup(&[
                ("LIGHTRAG_HOST", "127.0.0.1"),
                ("LIGHTRAG_PORT", "9000"),
                ("LIGHTRAG_LOG_LEVEL", "debug"),
            ]),
        );

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_env_ignores_other_prefix() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8001)
            .apply_env_from("MCP_REVIT", lookup(&[("LIGHTRAG_PORT", "9000")]));
        assert_eq!(config.port, 8001);
    }

    #[test]
    fn test_config_env_invalid_port_is_ignored() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000)
            .apply_env_from("LIGHTRAG", lookup(&[("LIGHTRAG_PORT", "not-a-port")]));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_config_process_env() {
        std::env::set_var("RAISERVE_TEST_HOST", "10.0.0.1");
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000).apply_env("RAISERVE_TEST");
        std::env::remove_var("RAISERVE_TEST_HOST");

        assert_eq!(config.host, "10.0.0.1");
    }

    #[test]
    fn test_config_toml_partial_override() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000)
            .merge_toml_str("port = 8100\nenable_logging = false\n")
            .expect("valid toml");

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 8100);
        assert!(!config.enable_logging);
    }

    #[test]
    fn test_config_toml_rejects_unknown_key() {
        let result = ServerConfig::with_defaults(DEFAULT_HOST, 8000).merge_toml_str("db_path = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"127.0.0.1\"\nlog_level = \"warn\"").unwrap();

        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000)
            .merge_toml_file(file.path())
            .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_toml_file_missing() {
        let result = ServerConfig::with_defaults(DEFAULT_HOST, 8000)
            .merge_toml_file(Path::new("/nonexistent/raiserve.toml"));
        assert!(matches!(result, Err(ServeError::ConfigFile { .. })));
    }

    #[test]
    fn test_config_toml_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"eighty\"").unwrap();

        let result = ServerConfig::with_defaults(DEFAULT_HOST, 8000).merge_toml_file(file.path());
        assert!(matches!(result, Err(ServeError::ConfigParse { .. })));
    }

    #[test]
    fn test_config_socket_addr() {
        let config = ServerConfig::with_defaults("127.0.0.1", 8000);
        let addr = config.socket_addr().expect("socket address should be valid");
        assert_eq!(addr.ip(), std::net::Ipv4Addr::new(127, 0, 0, 1));
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_config_socket_addr_invalid_host() {
        let config = ServerConfig::with_defaults("not a host", 8000);
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_config_server_url() {
        let config = ServerConfig::with_defaults("localhost", 3000);
        assert_eq!(config.server_url(), "http://localhost:3000");
    }

    #[test]
    fn test_config_validate_success() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_port_zero() {
        let config = ServerConfig::with_defaults(DEFAULT_HOST, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_empty_host() {
        let config = ServerConfig::with_defaults("", 8000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_log_level() {
        let config = ServerConfig {
            log_level: "invalid".to_string(),
            ..ServerConfig::with_defaults(DEFAULT_HOST, 8000)
        };
        assert!(config.validate().is_err());
    }
}
