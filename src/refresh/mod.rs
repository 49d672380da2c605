//! Data Refresh Workflow
//!
//! Client side of "refresh data": the user presses the refresh control,
//! a blocking overlay appears, the backend re-runs its scraper, and the
//! user gets a toast followed (on success) by a reload of the view.
//!
//! - **controller**: [`RefreshController`], the workflow itself
//! - **feedback**: Collaborator traits the host implements
//! - **client**: HTTP client for the Jobwatch API
//! - **toast**: Auto-dismissing notification board
//! - **reload**: Timer-backed reload scheduling
//! - **types**: Results, outcomes and error taxonomy
//!
//! # Example
//!
//! ```rust,no_run
//! use jobwatch::refresh::*;
//! use std::sync::Arc;
//!
//! struct Overlay;
//! impl LoadingIndicator for Overlay {
//!     fn show(&self) { println!("Loading..."); }
//!     fn hide(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = RefreshController::new(
//!         Arc::new(HttpRefreshClient::new("http://localhost:8080")),
//!         Arc::new(Overlay),
//!         Arc::new(ToastBoard::default()),
//!         Arc::new(DelayedReload::new(|| println!("reloading"))),
//!     );
//!
//!     match controller.refresh().await {
//!         RefreshOutcome::Succeeded => println!("refreshed"),
//!         RefreshOutcome::Skipped => println!("already refreshing"),
//!         RefreshOutcome::Failed(e) => println!("{}", e),
//!     }
//! }
//! ```

pub mod client;
pub mod controller;
pub mod feedback;
pub mod reload;
pub mod toast;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ClientError, HttpRefreshClient, RefreshApi};
pub use controller::{
    RefreshController, DEFAULT_RELOAD_DELAY, NETWORK_ERROR_MESSAGE, REFRESH_FAILED_MESSAGE,
    REFRESH_SUCCEEDED_MESSAGE,
};
pub use feedback::{LoadingIndicator, Notifier, PageReloader, TriggerControl};
pub use reload::DelayedReload;
pub use toast::{Toast, ToastBoard, DEFAULT_TOAST_DURATION};
pub use types::{RefreshError, RefreshOutcome, RefreshResult, ToastKind};
