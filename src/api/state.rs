//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::jobs::JobStore;
use crate::refresher::DataRefresher;

/// Shared application state for all handlers
pub struct AppState {
    /// Job cache reader
    pub store: JobStore,
    /// Rebuilds the job cache on `POST /api/refresh`
    pub refresher: Arc<dyn DataRefresher>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Held while a refresh runs so two scrapers never overwrite each other
    refresh_lock: Mutex<()>,
}

impl AppState {
    pub fn new(store: JobStore, refresher: Arc<dyn DataRefresher>) -> Self {
        Self {
            store,
            refresher,
            start_time: Instant::now(),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Claim the refresh slot, or `None` if a refresh is already running
    pub fn try_begin_refresh(&self) -> Option<tokio::sync::MutexGuard<'_, ()>> {
        self.refresh_lock.try_lock().ok()
    }
}
