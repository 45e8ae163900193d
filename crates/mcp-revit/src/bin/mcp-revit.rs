//! mcp-revit binary entry point

use clap::Parser;
use mcp_revit::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse().run().await
}
