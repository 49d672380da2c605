//! Loading Components

use leptos::*;

use crate::state::GlobalState;

/// Inline spinner for sections that are still fetching
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Full-viewport overlay shown while a data refresh is in flight
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <Show when=move || state.loading.get()>
            <div id="loadingOverlay">
                <div class="text-center">
                    <div class="loading-spinner w-12 h-12 mx-auto" role="status" />
                    <div class="mt-2">"Refreshing data, this can take a few minutes..."</div>
                </div>
            </div>
        </Show>
    }
}
