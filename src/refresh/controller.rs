//! Refresh Controller
//!
//! Runs the "refresh data" workflow: at most one refresh in flight, a
//! blocking overlay while it runs, a toast for every outcome and a delayed
//! reload after success.
//!
//! The busy flag is acquired with a compare-and-swap and released by
//! [`BusyGuard`]'s `Drop`, so it is cleared on every exit path, including
//! the refresh future being dropped while the request is pending.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::client::RefreshApi;
use super::feedback::{LoadingIndicator, Notifier, PageReloader, TriggerControl};
use super::types::{RefreshError, RefreshOutcome, ToastKind};

/// Delay between a successful refresh and the reload, so the toast can be read
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(1000);

pub const REFRESH_SUCCEEDED_MESSAGE: &str = "Data refreshed successfully";
pub const REFRESH_FAILED_MESSAGE: &str = "Data refresh failed, please try again later";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, check your connection and try again";

/// Drives a refresh against the backend and reports back to the user
pub struct RefreshController {
    api: Arc<dyn RefreshApi>,
    indicator: Arc<dyn LoadingIndicator>,
    notifier: Arc<dyn Notifier>,
    reloader: Arc<dyn PageReloader>,
    trigger: Option<Arc<dyn TriggerControl>>,
    reload_delay: Duration,
    loading: AtomicBool,
}

impl RefreshController {
    pub fn new(
        api: Arc<dyn RefreshApi>,
        indicator: Arc<dyn LoadingIndicator>,
        notifier: Arc<dyn Notifier>,
        reloader: Arc<dyn PageReloader>,
    ) -> Self {
        Self {
            api,
            indicator,
            notifier,
            reloader,
            trigger: None,
            reload_delay: DEFAULT_RELOAD_DELAY,
            loading: AtomicBool::new(false),
        }
    }

    /// Builder method: mark this control busy while a refresh runs
    pub fn with_trigger(mut self, trigger: Arc<dyn TriggerControl>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Builder method: override the reload delay
    ///
    /// Never shorter than [`DEFAULT_RELOAD_DELAY`].
    pub fn reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay.max(DEFAULT_RELOAD_DELAY);
        self
    }

    /// Whether a refresh is currently in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Run one refresh
    ///
    /// Returns [`RefreshOutcome::Skipped`] without contacting the server
    /// when another refresh is in flight. Failures are reported to the
    /// user through the notifier and never returned as errors.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(_busy) = BusyGuard::acquire(self) else {
            tracing::debug!("Refresh already in progress, ignoring request");
            return RefreshOutcome::Skipped;
        };

        tracing::info!("Requesting data refresh");

        match self.api.request_refresh().await {
            Ok(result) if result.success => {
                tracing::info!(
                    reload_in_ms = self.reload_delay.as_millis() as u64,
                    "Data refresh succeeded"
                );
                self.notifier
                    .notify(REFRESH_SUCCEEDED_MESSAGE, ToastKind::Success);
                self.reloader.schedule_reload(self.reload_delay);
                RefreshOutcome::Succeeded
            }
            Ok(_) => {
                tracing::warn!("Server reported refresh failure");
                self.notifier.notify(REFRESH_FAILED_MESSAGE, ToastKind::Error);
                RefreshOutcome::Failed(RefreshError::LogicalFailure)
            }
            Err(e) => {
                tracing::error!(error = %e, "Refresh request failed");
                self.notifier.notify(NETWORK_ERROR_MESSAGE, ToastKind::Error);
                RefreshOutcome::Failed(RefreshError::TransportFailure(e.to_string()))
            }
        }
    }

    /// Start a refresh without waiting for it, as a click handler would
    pub fn trigger(self: &Arc<Self>) -> JoinHandle<RefreshOutcome> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.refresh().await })
    }
}

/// Holds the busy flag for the duration of one refresh
struct BusyGuard<'a> {
    controller: &'a RefreshController,
}

impl<'a> BusyGuard<'a> {
    fn acquire(controller: &'a RefreshController) -> Option<Self> {
        controller
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        // Exists before the collaborators run so a panic there still clears the flag
        let guard = Self { controller };

        controller.indicator.show();
        if let Some(trigger) = &controller.trigger {
            trigger.set_busy(true);
        }

        Some(guard)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.controller.loading.store(false, Ordering::Release);
        self.controller.indicator.hide();
        if let Some(trigger) = &self.controller.trigger {
            trigger.set_busy(false);
        }
    }
}
