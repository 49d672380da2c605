//! HTTP client for the Jobwatch API

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;

use super::types::RefreshResult;
use crate::jobs::{Facets, Job, JobFilter, JobType, Statistics};

/// The refresh endpoint as seen by the controller
#[async_trait]
pub trait RefreshApi: Send + Sync {
    /// `POST /api/refresh` and read `{ success }` from the reply
    async fn request_refresh(&self) -> Result<RefreshResult, ClientError>;
}

/// Talks to a running Jobwatch server
///
/// No client-side timeout is set: a refresh legitimately runs as long as
/// the scraper does.
#[derive(Clone)]
pub struct HttpRefreshClient {
    client: Client,
    base_url: String,
}

impl HttpRefreshClient {
    /// Create a client for `base_url` (e.g. "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/stats`
    pub async fn fetch_stats(&self) -> Result<Statistics, ClientError> {
        self.get_json("/api/stats").await
    }

    /// `GET /api/stats` and log whatever comes back
    ///
    /// The dashboard polls this to notice new data; it never acts on it.
    pub async fn check_for_updates(&self) {
        match self.get_json::<serde_json::Value>("/api/stats").await {
            Ok(stats) => tracing::info!(stats = %stats, "Fetched data statistics"),
            Err(e) => tracing::warn!(error = %e, "Failed to check for data updates"),
        }
    }

    /// `GET /api/jobs/{type}` with optional filters
    pub async fn fetch_jobs(
        &self,
        job_type: JobType,
        filter: &JobFilter,
    ) -> Result<Vec<Job>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/jobs/{}", job_type)))
            .query(filter)
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        Self::read_json(response).await
    }

    /// `GET /api/jobs/{type}/facets`
    pub async fn fetch_facets(&self, job_type: JobType) -> Result<Facets, ClientError> {
        self.get_json(&format!("/api/jobs/{}/facets", job_type))
            .await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/health").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        Self::read_json(response).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        response.json().await.map_err(ClientError::from_reqwest)
    }
}

#[async_trait]
impl RefreshApi for HttpRefreshClient {
    async fn request_refresh(&self) -> Result<RefreshResult, ClientError> {
        let response = self
            .client
            .post(self.url("/api/refresh"))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        // Failures come back as 4xx/5xx with `success: false`, so the body
        // is read regardless of status.
        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::from_reqwest)?;

        serde_json::from_slice(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("status {}: {}", status.as_u16(), e))
        })
    }
}

/// Errors that can occur when talking to the server
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Server unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ClientError::Unavailable
        } else if e.is_decode() {
            ClientError::InvalidResponse(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_router, AppState};
    use crate::jobs::{JobData, JobStore};
    use crate::refresh::controller::{RefreshController, REFRESH_SUCCEEDED_MESSAGE};
    use crate::refresh::reload::DelayedReload;
    use crate::refresh::testing::{RecordingUi, UiEvent};
    use crate::refresh::types::{RefreshOutcome, ToastKind};
    use crate::refresher::{DataRefresher, RefreshReport, RefresherError};
    use axum::{http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    /// Scraper stand-in that takes `latency` and then succeeds
    struct SlowRefresher {
        latency: Duration,
    }

    #[async_trait]
    impl DataRefresher for SlowRefresher {
        async fn refresh(&self) -> Result<RefreshReport, RefresherError> {
            tokio::time::sleep(self.latency).await;
            Ok(RefreshReport::default())
        }
    }

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn spawn_jobwatch(latency: Duration) -> (String, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::in_dir(dir.path());

        let mut data = JobData::default();
        data.jobs_mut(JobType::Campus)
            .push(Job::new("Backend Engineer").city("Beijing"));
        store.save(&data).await.unwrap();

        let state = AppState::new(store, Arc::new(SlowRefresher { latency }));
        (spawn_server(build_router(state)).await, dir)
    }

    #[tokio::test]
    async fn test_click_to_reload_end_to_end() {
        let (base_url, _dir) = spawn_jobwatch(Duration::from_millis(50)).await;

        let ui = RecordingUi::new();
        let reloaded_at = Arc::new(Mutex::new(None));
        let reloader = {
            let reloaded_at = Arc::clone(&reloaded_at);
            DelayedReload::new(move || {
                *reloaded_at.lock().unwrap() = Some(Instant::now());
            })
        };

        let controller = Arc::new(
            RefreshController::new(
                Arc::new(HttpRefreshClient::new(base_url)),
                ui.clone(),
                ui.clone(),
                Arc::new(reloader),
            )
            .with_trigger(ui.clone()),
        );

        let clicked_at = Instant::now();
        let handle = controller.trigger();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(ui.overlay_visible());

        assert_eq!(handle.await.unwrap(), RefreshOutcome::Succeeded);
        assert!(!ui.overlay_visible());
        assert!(!controller.is_loading());
        assert_eq!(
            ui.toasts(),
            vec![(REFRESH_SUCCEEDED_MESSAGE.to_string(), ToastKind::Success)]
        );
        assert!(reloaded_at.lock().unwrap().is_none());

        tokio::time::sleep(Duration::from_millis(1200)).await;
        let reloaded_at = reloaded_at.lock().unwrap().expect("reload did not fire");
        // 50 ms server latency + 1000 ms reload delay
        assert!(reloaded_at.duration_since(clicked_at) >= Duration::from_millis(1050));
        assert_eq!(ui.events().first(), Some(&UiEvent::ShowLoading));
    }

    #[tokio::test]
    async fn test_failure_body_on_error_status() {
        let router = Router::new().route(
            "/api/refresh",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"success": false, "message": "scraper crashed"})),
                )
            }),
        );
        let client = HttpRefreshClient::new(spawn_server(router).await);

        let result = client.request_refresh().await.unwrap();
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_non_json_reply_is_transport_error() {
        let router = Router::new().route(
            "/api/refresh",
            post(|| async { "<html>502 Bad Gateway</html>" }),
        );
        let client = HttpRefreshClient::new(spawn_server(router).await);

        assert!(matches!(
            client.request_refresh().await,
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_success_field_is_transport_error() {
        let router = Router::new().route(
            "/api/refresh",
            post(|| async { Json(serde_json::json!({"ok": true})) }),
        );
        let client = HttpRefreshClient::new(spawn_server(router).await);

        assert!(matches!(
            client.request_refresh().await,
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpRefreshClient::new(format!("http://{}/", addr));
        assert!(matches!(
            client.request_refresh().await,
            Err(ClientError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_read_endpoints() {
        let (base_url, _dir) = spawn_jobwatch(Duration::ZERO).await;
        let client = HttpRefreshClient::new(base_url);

        let stats = client.fetch_stats().await.unwrap();
        assert_eq!(stats.total, 1);

        let jobs = client
            .fetch_jobs(JobType::Campus, &JobFilter::default().city("Beijing"))
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);

        let facets = client.fetch_facets(JobType::Campus).await.unwrap();
        assert_eq!(facets.cities, vec!["Beijing"]);

        let health = client.health().await.unwrap();
        assert_eq!(health["status"], "healthy");

        client.check_for_updates().await;
    }
}
