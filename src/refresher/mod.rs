//! Data Refresher
//!
//! Server side of `POST /api/refresh`: re-runs the scraper that rewrites
//! the job cache.
//!
//! The scraper is an external program. [`CommandRefresher`] runs it with a
//! timeout; tests and embedders can plug in their own [`DataRefresher`].

mod command;

pub use command::{CommandRefresher, CommandSpec};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Something that can rebuild the job cache
#[async_trait]
pub trait DataRefresher: Send + Sync {
    /// Run one refresh to completion
    async fn refresh(&self) -> Result<RefreshReport, RefresherError>;
}

/// Summary of a completed refresh
#[derive(Debug, Clone, Default)]
pub struct RefreshReport {
    /// Wall time of the run
    pub duration_ms: u64,
    /// Last lines the scraper printed, for logs
    pub output_tail: String,
}

/// Errors that can occur while refreshing
#[derive(Error, Debug)]
pub enum RefresherError {
    /// Scraper could not be started
    #[error("Failed to start refresh command: {0}")]
    Spawn(#[from] std::io::Error),

    /// Scraper ran and reported failure
    #[error("Refresh command failed ({}): {stderr}", exit_label(.exit_code))]
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Scraper did not finish in time and was killed
    #[error("Refresh timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

fn exit_label(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string())
}

/// Keep the last `max_lines` lines of process output
pub(crate) fn tail_lines(output: &[u8], max_lines: usize) -> String {
    let text = String::from_utf8_lossy(output);
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_lines() {
        assert_eq!(tail_lines(b"a\nb\nc\n", 2), "b\nc");
        assert_eq!(tail_lines(b"only", 5), "only");
        assert_eq!(tail_lines(b"", 3), "");
    }

    #[test]
    fn test_error_messages() {
        let err = RefresherError::Failed {
            exit_code: Some(2),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Refresh command failed (2): boom");

        let err = RefresherError::Timeout(Duration::from_secs(300));
        assert_eq!(err.to_string(), "Refresh timed out after 300s");
    }
}
