//! Toast Notification Component
//!
//! Shows the messages queued in global state.

use leptos::*;

use crate::state::{GlobalState, ToastMessage};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed top-4 right-4 z-[10000] space-y-2">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: ToastMessage) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let id = toast.id;

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg min-w-[300px]",
            toast.kind.bg_class()
        )>
            <span class="text-lg">{toast.kind.icon()}</span>
            <span class="text-sm font-medium flex-1">{toast.message}</span>
            <button
                class="text-white/70 hover:text-white"
                on:click=move |_| state.dismiss_toast(id)
            >
                "×"
            </button>
        </div>
    }
}
