//! Refresh Button
//!
//! Starts a data refresh; disabled with the `loading` class while one runs.

use leptos::*;

use crate::refresh::refresh_data;
use crate::state::GlobalState;

#[component]
pub fn RefreshButton() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <button
            id="refreshBtn"
            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            class:loading=move || state.loading.get()
            disabled=move || state.loading.get()
            on:click=move |_| refresh_data(state)
        >
            {move || if state.loading.get() { "Refreshing..." } else { "⟳ Refresh Data" }}
        </button>
    }
}
