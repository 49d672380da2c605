//! User-facing collaborators of the refresh controller
//!
//! A browser host maps these onto the DOM (overlay element, alert toasts,
//! the `loading` class of the refresh button, `location.reload()`); the CLI
//! maps them onto terminal output.

use std::time::Duration;

use super::types::ToastKind;

/// Full-screen blocking "loading" overlay
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Short-lived user notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// The control the user pressed to start the refresh
pub trait TriggerControl: Send + Sync {
    fn set_busy(&self, busy: bool);
}

/// Reloads the whole view after a delay
///
/// Must return immediately; the reload happens later.
pub trait PageReloader: Send + Sync {
    fn schedule_reload(&self, delay: Duration);
}
