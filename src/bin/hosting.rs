//! Hosting server binary.
//!
//! Parses `ServerConfig` from argv and runs the HTTP/WebSocket server that
//! exposes the Session Orchestrator over a network.

use clap::Parser;
use holdem_core::session::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    holdem_core::init();
    let config = ServerConfig::parse();
    holdem_core::hosting::Server::run(config).await?;
    Ok(())
}
