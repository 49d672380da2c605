//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod refresh_button;
pub mod stat_card;
pub mod toast;

pub use loading::{Loading, LoadingOverlay};
pub use nav::Nav;
pub use refresh_button::RefreshButton;
pub use stat_card::{RankingCard, StatCard};
pub use toast::Toast;
