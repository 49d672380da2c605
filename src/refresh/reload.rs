//! Timer-backed page reloader

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::feedback::PageReloader;

type ReloadAction = Arc<dyn Fn() + Send + Sync>;

/// Runs a reload action once the requested delay has passed
///
/// Needs a tokio runtime; scheduling outside one is logged and dropped.
pub struct DelayedReload {
    action: ReloadAction,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl DelayedReload {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            action: Arc::new(action),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Abort reloads that have not fired yet
    pub fn cancel_pending(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        for handle in pending.drain(..) {
            handle.abort();
        }
    }
}

impl PageReloader for DelayedReload {
    fn schedule_reload(&self, delay: Duration) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::error!("No async runtime available, reload not scheduled");
            return;
        };

        let action = Arc::clone(&self.action);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!("Reloading");
            action();
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}

impl Drop for DelayedReload {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (DelayedReload, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let reload = {
            let count = Arc::clone(&count);
            DelayedReload::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        (reload, count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_no_sooner_than_delay() {
        let (reload, count) = counting();
        reload.schedule_reload(Duration::from_millis(1000));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending() {
        let (reload, count) = counting();
        reload.schedule_reload(Duration::from_millis(1000));
        reload.cancel_pending();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_without_runtime_is_noop() {
        let (reload, count) = counting();
        reload.schedule_reload(Duration::ZERO);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
