//! # Jobwatch
//!
//! Job listing monitor. A scraper writes postings to a JSON cache; Jobwatch
//! serves listings and statistics from it, re-runs the scraper on demand,
//! and provides the client-side refresh workflow that drives that from a UI.
//!
//! ## Modules
//!
//! - [`jobs`]: Job model, cache store, statistics and filters
//! - [`refresher`]: Runs the scraper for `POST /api/refresh`
//! - [`api`]: REST API server with Axum
//! - [`refresh`]: Refresh controller, HTTP client and user feedback
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobwatch::refresh::{
//!     DelayedReload, HttpRefreshClient, LoadingIndicator, RefreshController, ToastBoard,
//! };
//! use std::sync::Arc;
//!
//! struct NoOverlay;
//! impl LoadingIndicator for NoOverlay {
//!     fn show(&self) {}
//!     fn hide(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = RefreshController::new(
//!         Arc::new(HttpRefreshClient::new("http://localhost:8080")),
//!         Arc::new(NoOverlay),
//!         Arc::new(ToastBoard::default().on_show(|t| println!("{} {}", t.kind.icon(), t.message))),
//!         Arc::new(DelayedReload::new(|| println!("reload"))),
//!     );
//!
//!     let outcome = controller.refresh().await;
//!     println!("{:?}", outcome);
//! }
//! ```

pub mod api;
pub mod config;
pub mod format;
pub mod jobs;
pub mod logging;
pub mod refresh;
pub mod refresher;

// Re-export top-level types for convenience
pub use jobs::{Facets, Job, JobData, JobFilter, JobStore, JobType, Statistics, StoreError};

pub use refresher::{CommandRefresher, CommandSpec, DataRefresher, RefresherError};

pub use api::{build_router, serve, ApiError, AppState};

pub use refresh::{
    ClientError, HttpRefreshClient, RefreshController, RefreshError, RefreshOutcome, ToastBoard,
    ToastKind,
};

pub use config::{
    generate_default_config, ApiConfig, ClientConfig, Config, ConfigError, DataConfig,
    LoggingConfig, RefreshConfig,
};
