//! lightrag binary entry point

use clap::Parser;
use lightrag::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse().run().await
}
