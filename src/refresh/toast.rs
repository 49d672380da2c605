//! Auto-dismissing notifications

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

use super::feedback::Notifier;
use super::types::ToastKind;

/// How long a toast stays visible
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

type ToastListener = Box<dyn Fn(&Toast) + Send + Sync>;

/// Holds the visible toasts and expires them after a fixed duration
///
/// Expiry is evaluated lazily on read, so no timer task is needed per toast.
pub struct ToastBoard {
    duration: Duration,
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    listener: Option<ToastListener>,
}

impl ToastBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            toasts: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            listener: None,
        }
    }

    /// Builder method: get called for every new toast (e.g. to render it)
    pub fn on_show(mut self, listener: impl Fn(&Toast) + Send + Sync + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Toasts that have not expired yet, oldest first
    pub fn active(&self) -> Vec<Toast> {
        let mut toasts = self.lock();
        let now = Instant::now();
        toasts.retain(|t| now.duration_since(t.shown_at) < self.duration);
        toasts.clone()
    }

    /// Close a toast before it expires
    pub fn dismiss(&self, id: u64) -> bool {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ToastBoard {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Notifier for ToastBoard {
    fn notify(&self, message: &str, kind: ToastKind) {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
        };

        tracing::debug!(id = toast.id, kind = %kind, text = message, "Showing toast");

        if let Some(listener) = &self.listener {
            listener(&toast);
        }
        self.lock().push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let board = ToastBoard::default();
        board.notify("Copied to clipboard", ToastKind::Success);

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert_eq!(board.active().len(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(board.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_independently() {
        let board = ToastBoard::default();
        board.notify("first", ToastKind::Info);
        tokio::time::advance(Duration::from_millis(2000)).await;
        board.notify("second", ToastKind::Warning);
        tokio::time::advance(Duration::from_millis(1500)).await;

        let active = board.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "second");
        assert_eq!(active[0].kind, ToastKind::Warning);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss() {
        let board = ToastBoard::default();
        board.notify("a", ToastKind::Error);
        let id = board.active()[0].id;

        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_listener_sees_every_toast() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let board = {
            let seen = Arc::clone(&seen);
            ToastBoard::default().on_show(move |t| seen.lock().unwrap().push(t.kind))
        };

        board.notify("ok", ToastKind::Success);
        board.notify("bad", ToastKind::Error);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ToastKind::Success, ToastKind::Error]
        );
    }
}
