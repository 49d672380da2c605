//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod jobs;

pub use dashboard::Dashboard;
pub use jobs::Jobs;
