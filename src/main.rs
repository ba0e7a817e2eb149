//! BiasGPT Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Config file (TOML) is probed from `~/.config/biasgpt/config.toml`
//! then `./config.toml`; CLI flags and environment variables override:
//! - `BIASGPT_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BIASGPT_PORT`: Port to listen on (default: 8090)
//! - `BIASGPT_LOG_LEVEL` / `BIASGPT_LOG_FORMAT`: Logging overrides
//! - `RUST_LOG`: Tracing filter (default: biasgpt=info,tower_http=debug)

use anyhow::Context;
use biasgpt::api::{serve, ApiConfig, AppState};
use biasgpt::config::Config;
use biasgpt::fixtures::SampleData;
use biasgpt::manifest::Manifest;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "biasgpt", version, about = "Whale-driven AI trader dashboard")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting BiasGPT v{}", env!("CARGO_PKG_VERSION"));

    // The manifest structural check is the one defined failure mode;
    // refuse to boot on a bad manifest.
    let manifest = Manifest::embedded().context("embedded manifest failed validation")?;
    tracing::info!("Manifest check passed: name=BiasGPT display=standalone");

    let api_config = ApiConfig::new(config.server.host.clone(), config.server.port);
    let state = AppState::new(Arc::new(SampleData::new()), manifest, api_config.clone());
    state.seed_transcript().await;

    tracing::info!("Serving fixture data; substitute a live MarketData provider when available");

    serve(state, &api_config).await?;

    tracing::info!("BiasGPT stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "biasgpt={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
