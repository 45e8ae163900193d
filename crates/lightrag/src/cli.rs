//! Command-line interface for the `lightrag` binary

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use raiserve::cli::ServeArgs;
use raiserve::logging::init_logging;
use raiserve::StubServer;
use tracing::info;

use crate::{create_router, default_config, ENV_PREFIX, TITLE};

/// LightRAG Server for RevitAI (placeholder)
#[derive(Parser, Debug)]
#[command(name = "lightrag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Placeholder LightRAG server for RevitAI", long_about = None)]
pub struct Cli {
    /// Bind and logging options
    #[command(flatten)]
    pub serve: ServeArgs,
}

impl Cli {
    /// Run the server until shutdown
    pub async fn run(self) -> AnyhowResult<()> {
        let config = self
            .serve
            .resolve(default_config(), ENV_PREFIX)
            .context("Failed to load configuration")?;

        init_logging(&config);

        let server = StubServer::new(TITLE, config, create_router())?;
        info!("Starting {} on {}", TITLE, server.server_url());

        server.start().await.context("LightRAG server failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["lightrag"]).unwrap();
        assert!(cli.serve.host.is_none());
        assert!(cli.serve.port.is_none());
    }

    #[test]
    fn test_cli_port_override() {
        let cli = Cli::try_parse_from(["lightrag", "--port", "8100"]).unwrap();
        let config = cli.serve.resolve(default_config(), "LIGHTRAG_CLI_TEST").unwrap();
        assert_eq!(config.port, 8100);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        assert!(Cli::try_parse_from(["lightrag", "--port", "99999"]).is_err());
    }
}
