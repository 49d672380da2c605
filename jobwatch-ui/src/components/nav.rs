//! Navigation Component
//!
//! Header navigation bar with logo and channel links.

use leptos::*;
use leptos_router::*;

use super::RefreshButton;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💼"</span>
                        <span class="text-xl font-bold text-white">"Jobwatch"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/jobs/campus" label="Campus" />
                        <NavLink href="/jobs/intern" label="Internships" />
                        <NavLink href="/jobs/experienced" label="Experienced" />
                        <RefreshButton />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
            exact=true
        >
            {label}
        </A>
    }
}
