//! Refresh Route
//!
//! - POST /api/refresh - Re-run the scraper
//!
//! Always answers with a `RefreshResponse`; failures carry
//! `success: false` and a non-2xx status.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::RefreshResponse;
use crate::api::state::AppState;
use crate::refresher::RefresherError;

/// POST /api/refresh
pub async fn refresh_data(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RefreshResponse>) {
    let Some(_running) = state.try_begin_refresh() else {
        tracing::warn!("Refresh requested while another is running");
        return (
            StatusCode::CONFLICT,
            Json(RefreshResponse::new(
                false,
                "A data refresh is already running, please wait",
            )),
        );
    };

    match state.refresher.refresh().await {
        Ok(report) => {
            tracing::info!(duration_ms = report.duration_ms, "Data refresh completed");
            (
                StatusCode::OK,
                Json(RefreshResponse::new(true, "Data refreshed successfully")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Data refresh failed");
            let (status, message) = match &e {
                RefresherError::Timeout(_) => (
                    StatusCode::REQUEST_TIMEOUT,
                    "Data refresh timed out, please try again later".to_string(),
                ),
                RefresherError::Failed { stderr, .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Data refresh failed: {}", stderr),
                ),
                RefresherError::Spawn(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Data refresh error: {}", e),
                ),
            };
            (status, Json(RefreshResponse::new(false, message)))
        }
    }
}
