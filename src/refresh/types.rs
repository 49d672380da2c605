//! Refresh results, outcomes and notification kinds

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a `POST /api/refresh` reply as the controller reads it
///
/// The server sends more (message, timestamp); only `success` drives
/// the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResult {
    pub success: bool,
}

/// Why a refresh did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// Server was reached and replied `success: false`
    #[error("Server reported that the refresh failed")]
    LogicalFailure,

    /// Request did not complete or the reply was unreadable
    #[error("Refresh request failed: {0}")]
    TransportFailure(String),
}

/// What a call to `RefreshController::refresh` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Another refresh was in flight; nothing was sent
    Skipped,
    /// Data refreshed and a reload was scheduled
    Succeeded,
    /// Refresh failed; the user has been notified
    Failed(RefreshError),
}

impl RefreshOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RefreshOutcome::Succeeded)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RefreshOutcome::Skipped)
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
