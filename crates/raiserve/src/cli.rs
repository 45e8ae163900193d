//! Command-line arguments shared by every service binary

use clap::Args;
use std::path::PathBuf;

use crate::config::ServerConfig;
use crate::error::ServeResult;

/// Bind and logging flags, flattened into each service's `Cli`
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long = "port")]
    pub port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Enable verbose logging
    #[arg(long = "verbose", short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long = "quiet", short = 'q')]
    pub quiet: bool,
}

impl ServeArgs {
    /// Resolve the final configuration
    ///
    /// Layers, later wins: `defaults`, the `--config` file, `<env_prefix>_*`
    /// environment variables, then flags.
    pub fn resolve(&self, defaults: ServerConfig, env_prefix: &str) -> ServeResult<ServerConfig> {
        let config = match &self.config {
            Some(path) => defaults.merge_toml_file(path)?,
            None => defaults,
        };

        Ok(self.apply_flags(config.apply_env(env_prefix)))
    }

    fn apply_flags(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        if self.quiet {
            config.enable_logging = false;
        }
        config
    }
}
