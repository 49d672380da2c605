//! Statistic Cards

use leptos::*;

use crate::format::format_number;

/// Single headline number
#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="text-3xl font-bold mt-1">{format_number(value)}</div>
        </div>
    }
}

/// Ranked `(name, count)` list such as the top cities
#[component]
pub fn RankingCard(title: &'static str, entries: Vec<(String, usize)>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">{title}</h2>
            {if entries.is_empty() {
                view! { <p class="text-gray-400">"No data yet"</p> }.into_view()
            } else {
                view! {
                    <ol class="space-y-2">
                        {entries.into_iter().map(|(name, count)| view! {
                            <li class="flex justify-between">
                                <span>{name}</span>
                                <span class="text-gray-400">{format_number(count)}</span>
                            </li>
                        }).collect_view()}
                    </ol>
                }.into_view()
            }}
        </section>
    }
}
