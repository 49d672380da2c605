//! Dashboard Page
//!
//! Statistics overview across all channels.

use leptos::*;

use crate::api;
use crate::components::{Loading, RankingCard, StatCard};
use crate::state::GlobalState;

const CHANNELS: [(&str, &str); 3] = [
    ("campus", "Campus Recruiting"),
    ("intern", "Internships"),
    ("experienced", "Experienced Hires"),
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(stats) => state.stats.set(Some(stats)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch statistics: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Open positions at a glance"</p>
            </div>

            {move || match state.stats.get() {
                None => view! { <Loading /> }.into_view(),
                Some(stats) => view! {
                    <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                        <StatCard label="Total jobs" value=stats.total />
                        <StatCard label="Last 7 days" value=stats.recent_jobs />
                        {CHANNELS.iter().map(|(key, label)| {
                            let count = stats.by_type.get(*key).copied().unwrap_or(0);
                            view! { <StatCard label=*label value=count /> }
                        }).collect_view()}
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <RankingCard title="Top cities" entries=stats.top_cities.clone() />
                        <RankingCard title="Top departments" entries=stats.top_departments.clone() />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
