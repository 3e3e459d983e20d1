//! RemoteCalc server entry point.
//!
//! Loads configuration, initialises logging, binds the listening socket, and
//! runs the accept loop until a shutdown signal arrives.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calc_server::{config, dispatcher};

/// RemoteCalc server: serves one arithmetic calculation per connection.
#[derive(Debug, Parser)]
#[command(name = "calc-server", version, about)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "calc-server.toml")]
    config: PathBuf,

    /// Override the bind address from the config file.
    #[arg(long)]
    bind: Option<String>,

    /// Override the TCP port from the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = config::load_config(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(bind) = args.bind {
        cfg.network.bind_address = bind;
    }
    if let Some(port) = args.port {
        cfg.network.port = port;
    }

    // Structured logging; RUST_LOG overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.server.log_level.clone())),
        )
        .init();

    let addr: SocketAddr = format!("{}:{}", cfg.network.bind_address, cfg.network.port)
        .parse()
        .with_context(|| format!("invalid bind address {:?}", cfg.network.bind_address))?;

    let listener = dispatcher::bind(addr).await?;
    info!("server running on {addr}");

    tokio::select! {
        () = dispatcher::run(listener) => {}
        result = tokio::signal::ctrl_c() => {
            result.context("waiting for shutdown signal")?;
            info!("shutdown signal received");
        }
    }

    info!("server stopped");
    Ok(())
}
