//! Test doubles for the refresh workflow

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::client::{ClientError, RefreshApi};
use super::controller::RefreshController;
use super::feedback::{LoadingIndicator, Notifier, PageReloader, TriggerControl};
use super::types::{RefreshResult, ToastKind};

/// What the fake server answers
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Success,
    Failure,
    NetworkDown,
}

/// Fake refresh endpoint that counts requests
pub(crate) struct MockApi {
    reply: Reply,
    latency: Duration,
    calls: AtomicUsize,
}

impl MockApi {
    pub(crate) fn new(reply: Reply) -> Arc<Self> {
        Self::with_latency(reply, Duration::from_millis(50))
    }

    pub(crate) fn with_latency(reply: Reply, latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            latency,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RefreshApi for MockApi {
    async fn request_refresh(&self) -> Result<RefreshResult, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;

        match self.reply {
            Reply::Success => Ok(RefreshResult { success: true }),
            Reply::Failure => Ok(RefreshResult { success: false }),
            Reply::NetworkDown => Err(ClientError::Unavailable),
        }
    }
}

/// Everything the controller did to the UI, in order
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiEvent {
    ShowLoading,
    HideLoading,
    Busy(bool),
    Toast(String, ToastKind),
    Reload(Duration),
}

/// Records UI calls and tracks overlay visibility
#[derive(Default)]
pub(crate) struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
    overlay: AtomicBool,
}

impl RecordingUi {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn overlay_visible(&self) -> bool {
        self.overlay.load(Ordering::SeqCst)
    }

    pub(crate) fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Toast(message, kind) => Some((message, kind)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn reloads(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Reload(delay) => Some(delay),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl LoadingIndicator for RecordingUi {
    fn show(&self) {
        self.overlay.store(true, Ordering::SeqCst);
        self.record(UiEvent::ShowLoading);
    }

    fn hide(&self) {
        self.overlay.store(false, Ordering::SeqCst);
        self.record(UiEvent::HideLoading);
    }
}

impl Notifier for RecordingUi {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.record(UiEvent::Toast(message.to_string(), kind));
    }
}

impl TriggerControl for RecordingUi {
    fn set_busy(&self, busy: bool) {
        self.record(UiEvent::Busy(busy));
    }
}

impl PageReloader for RecordingUi {
    fn schedule_reload(&self, delay: Duration) {
        self.record(UiEvent::Reload(delay));
    }
}

/// Controller wired entirely to one recorder
pub(crate) fn recording_controller(
    api: Arc<dyn RefreshApi>,
    ui: &Arc<RecordingUi>,
) -> RefreshController {
    RefreshController::new(api, ui.clone(), ui.clone(), ui.clone()).with_trigger(ui.clone())
}
