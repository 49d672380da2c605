//! State Management
//!
//! Global application state shared through context.

pub mod global;

pub use global::{provide_global_state, GlobalState, ToastKind, ToastMessage};
