//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::Statistics;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Latest statistics from the API
    pub stats: RwSignal<Option<Statistics>>,
    /// A data refresh is in flight; drives the overlay and the refresh button
    pub loading: RwSignal<bool>,
    /// Toasts currently on screen, oldest first
    pub toasts: RwSignal<Vec<ToastMessage>>,
    next_toast_id: RwSignal<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600",
            ToastKind::Error => "bg-red-600",
            ToastKind::Warning => "bg-yellow-600",
            ToastKind::Info => "bg-blue-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            stats: create_rw_signal(None),
            loading: create_rw_signal(false),
            toasts: create_rw_signal(Vec::new()),
            next_toast_id: create_rw_signal(1),
        }
    }

    /// Show a toast (auto-clears after [`TOAST_DURATION_MS`])
    pub fn show_toast(&self, message: &str, kind: ToastKind) {
        let id = self.push_toast(message, kind);

        let state = *self;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            state.dismiss_toast(id);
        })
        .forget();
    }

    /// Add a toast without scheduling its removal
    pub fn push_toast(&self, message: &str, kind: ToastKind) -> u64 {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(ToastMessage {
                id,
                message: message.to_string(),
                kind,
            })
        });
        id
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}
