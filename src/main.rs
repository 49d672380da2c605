//! Jobwatch API Server
//!
//! Run with: cargo run --bin jobwatch
//!
//! # Configuration
//!
//! Read from the first of `~/.config/jobwatch/config.toml`,
//! `/etc/jobwatch/config.toml`, `./config.toml`, or `--config <path>`.
//!
//! Environment variables override the file:
//! - `JOBWATCH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `JOBWATCH_PORT`: Port to listen on (default: 8080)
//! - `JOBWATCH_DATA_DIR`: Directory holding the job cache
//! - `JOBWATCH_REFRESH_COMMAND`: Scraper run by `POST /api/refresh`
//! - `RUST_LOG`: Log filter (default: from `[logging]`)

use anyhow::Context;
use clap::Parser;
use jobwatch::api::{serve, AppState};
use jobwatch::config::Config;
use jobwatch::refresher::CommandRefresher;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve job listings and statistics, and refresh them on demand")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.api.port = port;
    }

    jobwatch::logging::init(&config.logging);

    tracing::info!("Starting Jobwatch API server v{}", env!("CARGO_PKG_VERSION"));

    let store = config.data.store();
    tracing::info!("Job cache: {:?}", store.cache_path());

    let refresher = CommandRefresher::new(config.refresh.command_spec(), config.refresh.timeout());
    tracing::info!(
        "Refresh command: {} {:?} (timeout {}s)",
        refresher.spec().program,
        refresher.spec().args,
        config.refresh.timeout_secs
    );

    let state = AppState::new(store, Arc::new(refresher));

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Jobwatch API server stopped");
    Ok(())
}
