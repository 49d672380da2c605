//! Data Refresh
//!
//! The "refresh data" button workflow: at most one refresh in flight, the
//! blocking overlay while it runs, a toast for every outcome and a page
//! reload one second after success.
//!
//! The overlay and the `refreshBtn` busy class both follow the global
//! `loading` signal, which [`RefreshGuard`] sets on entry and clears on drop.

use leptos::*;
use std::future::Future;

use crate::api::{self, RefreshReply};
use crate::state::{GlobalState, ToastKind};

/// Delay between a successful refresh and the reload
pub const RELOAD_DELAY_MS: u32 = 1000;

pub const REFRESH_SUCCEEDED_MESSAGE: &str = "Data refreshed successfully";
pub const REFRESH_FAILED_MESSAGE: &str = "Data refresh failed, please try again later";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, check your connection and try again";

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Another refresh was in flight; nothing was sent
    Skipped,
    Succeeded,
    /// Server replied `success: false`
    LogicalFailure,
    /// No usable reply
    TransportFailure(String),
}

/// Where the workflow reports to
pub trait RefreshFeedback {
    fn toast(&self, message: &str, kind: ToastKind);
    fn schedule_reload(&self, delay_ms: u32);
}

impl RefreshFeedback for GlobalState {
    fn toast(&self, message: &str, kind: ToastKind) {
        self.show_toast(message, kind);
    }

    fn schedule_reload(&self, delay_ms: u32) {
        gloo_timers::callback::Timeout::new(delay_ms, || {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().reload() {
                web_sys::console::error_1(&e);
            }
        })
        .forget();
    }
}

/// Holds the `loading` flag for one refresh and clears it on drop
pub struct RefreshGuard {
    loading: RwSignal<bool>,
}

impl RefreshGuard {
    /// `None` while another refresh holds the flag
    pub fn acquire(loading: RwSignal<bool>) -> Option<Self> {
        if loading.get_untracked() {
            return None;
        }
        loading.set(true);
        Some(Self { loading })
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.loading.set(false);
    }
}

/// Run one refresh through `request`
pub async fn run_refresh<F, Fut>(
    loading: RwSignal<bool>,
    request: F,
    feedback: &impl RefreshFeedback,
) -> RefreshOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RefreshReply, String>>,
{
    let Some(_busy) = RefreshGuard::acquire(loading) else {
        return RefreshOutcome::Skipped;
    };

    match request().await {
        Ok(reply) if reply.success => {
            feedback.toast(REFRESH_SUCCEEDED_MESSAGE, ToastKind::Success);
            feedback.schedule_reload(RELOAD_DELAY_MS);
            RefreshOutcome::Succeeded
        }
        Ok(_) => {
            feedback.toast(REFRESH_FAILED_MESSAGE, ToastKind::Error);
            RefreshOutcome::LogicalFailure
        }
        Err(e) => {
            feedback.toast(NETWORK_ERROR_MESSAGE, ToastKind::Error);
            RefreshOutcome::TransportFailure(e)
        }
    }
}

/// Click handler for the refresh button
pub fn refresh_data(state: GlobalState) {
    spawn_local(async move {
        if let RefreshOutcome::TransportFailure(e) =
            run_refresh(state.loading, api::request_refresh, &state).await
        {
            web_sys::console::error_1(&format!("Refresh request failed: {}", e).into());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Toast(String, ToastKind),
        Reload(u32),
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<Event>>,
    }

    impl RefreshFeedback for Recorder {
        fn toast(&self, message: &str, kind: ToastKind) {
            self.events
                .borrow_mut()
                .push(Event::Toast(message.to_string(), kind));
        }

        fn schedule_reload(&self, delay_ms: u32) {
            self.events.borrow_mut().push(Event::Reload(delay_ms));
        }
    }

    fn reply(success: bool) -> Result<RefreshReply, String> {
        Ok(RefreshReply { success })
    }

    #[test]
    fn test_success_toasts_then_reloads() {
        let runtime = create_runtime();
        let loading = create_rw_signal(false);
        let feedback = Recorder::default();
        let in_flight = Cell::new(false);

        let outcome = block_on(run_refresh(
            loading,
            || {
                in_flight.set(loading.get_untracked());
                async { reply(true) }
            },
            &feedback,
        ));

        assert_eq!(outcome, RefreshOutcome::Succeeded);
        assert!(in_flight.get());
        assert!(!loading.get_untracked());
        assert_eq!(
            *feedback.events.borrow(),
            vec![
                Event::Toast(REFRESH_SUCCEEDED_MESSAGE.to_string(), ToastKind::Success),
                Event::Reload(1000),
            ]
        );

        runtime.dispose();
    }

    #[test]
    fn test_failures_toast_without_reload() {
        let runtime = create_runtime();
        let loading = create_rw_signal(false);
        let feedback = Recorder::default();

        let logical = block_on(run_refresh(loading, || async { reply(false) }, &feedback));
        assert_eq!(logical, RefreshOutcome::LogicalFailure);
        assert!(!loading.get_untracked());

        let transport = block_on(run_refresh(
            loading,
            || async { Err("Parse error: expected value".to_string()) },
            &feedback,
        ));
        assert!(matches!(transport, RefreshOutcome::TransportFailure(_)));
        assert!(!loading.get_untracked());

        assert_eq!(
            *feedback.events.borrow(),
            vec![
                Event::Toast(REFRESH_FAILED_MESSAGE.to_string(), ToastKind::Error),
                Event::Toast(NETWORK_ERROR_MESSAGE.to_string(), ToastKind::Error),
            ]
        );

        runtime.dispose();
    }

    #[test]
    fn test_click_while_loading_sends_nothing() {
        let runtime = create_runtime();
        let loading = create_rw_signal(false);
        let feedback = Recorder::default();
        let calls = Cell::new(0);
        let (release, released) = oneshot::channel::<()>();

        let first = run_refresh(
            loading,
            || {
                calls.set(calls.get() + 1);
                async move {
                    let _ = released.await;
                    reply(true)
                }
            },
            &feedback,
        );
        let second = run_refresh(
            loading,
            || {
                calls.set(calls.get() + 1);
                async { reply(true) }
            },
            &feedback,
        );
        let answer = async move {
            let _ = release.send(());
        };

        let (first, second, ()) = block_on(async { futures::join!(first, second, answer) });

        assert_eq!(first, RefreshOutcome::Succeeded);
        assert_eq!(second, RefreshOutcome::Skipped);
        assert_eq!(calls.get(), 1);
        assert!(!loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_flag_released_when_refresh_is_dropped() {
        let runtime = create_runtime();
        let loading = create_rw_signal(false);
        let feedback = Recorder::default();

        let pending = run_refresh(
            loading,
            || futures::future::pending::<Result<RefreshReply, String>>(),
            &feedback,
        )
        .now_or_never();

        assert!(pending.is_none());
        assert!(!loading.get_untracked());
        assert!(feedback.events.borrow().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_guard_refuses_second_holder() {
        let runtime = create_runtime();
        let loading = create_rw_signal(false);

        let guard = RefreshGuard::acquire(loading);
        assert!(guard.is_some());
        assert!(RefreshGuard::acquire(loading).is_none());

        drop(guard);
        assert!(!loading.get_untracked());
        assert!(RefreshGuard::acquire(loading).is_some());

        runtime.dispose();
    }
}
