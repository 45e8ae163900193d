//! Command-line interface for the `mcp-revit` binary

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use raiserve::cli::ServeArgs;
use raiserve::logging::init_logging;
use raiserve::StubServer;
use tracing::info;

use crate::{create_router, default_config, ENV_PREFIX, TITLE};

/// MCP Revit Server Mock
#[derive(Parser, Debug)]
#[command(name = "mcp-revit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mock MCP server for Revit returning fixed JSON-RPC responses", long_about = None)]
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

        server.start().await.context("MCP mock server failed")
    }
}
