//! Jobwatch REST API
//!
//! HTTP API layer for Jobwatch, built with Axum.
//!
//! # Endpoints
//!
//! ## Jobs
//! - `GET /api/jobs/:job_type` - Listing (`?search=&city=&department=`)
//! - `GET /api/jobs/:job_type/facets` - Filter options
//! - `GET /api/stats` - Dashboard statistics
//!
//! ## Refresh
//! - `POST /api/refresh` - Re-run the scraper
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status with timestamp
//!
//! # Example
//!
//! ```rust,ignore
//! use jobwatch::api::{serve, AppState};
//! use jobwatch::config::Config;
//! use jobwatch::refresher::CommandRefresher;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let refresher = CommandRefresher::new(config.refresh.command_spec(), config.refresh.timeout());
//!
//!     let state = AppState::new(config.data.store(), Arc::new(refresher));
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/jobs/:job_type", get(routes::jobs::list_jobs))
        .route("/jobs/:job_type/facets", get(routes::jobs::job_facets))
        .route("/stats", get(routes::jobs::stats))
        .route("/refresh", post(routes::refresh::refresh_data));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    state.store.ensure_dir().await?;
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Jobwatch API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Jobwatch API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
