//! Jobwatch Dashboard
//!
//! Job listing dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Statistics overview with top cities and departments
//! - Per-channel listings with search, city and department filters
//! - On-demand data refresh with a blocking overlay, toasts and reload
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Jobwatch API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod refresh;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
