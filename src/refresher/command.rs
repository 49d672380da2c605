//! External scraper command

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

use super::{tail_lines, DataRefresher, RefreshReport, RefresherError};

/// Lines of scraper output kept for logs and error messages
const OUTPUT_TAIL_LINES: usize = 20;

/// Program, arguments and working directory of the scraper
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Builder method: add an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Builder method: set the working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

/// Runs the scraper as a child process with a timeout
pub struct CommandRefresher {
    spec: CommandSpec,
    timeout: Duration,
}

impl CommandRefresher {
    pub fn new(spec: CommandSpec, timeout: Duration) -> Self {
        Self { spec, timeout }
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl DataRefresher for CommandRefresher {
    async fn refresh(&self) -> Result<RefreshReport, RefresherError> {
        let start = Instant::now();

        let mut command = Command::new(&self.spec.program);
        command
            .args(&self.spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.spec.working_dir {
            command.current_dir(dir);
        }

        tracing::info!(
            program = %self.spec.program,
            args = ?self.spec.args,
            timeout_secs = self.timeout.as_secs(),
            "Running refresh command"
        );

        let child = command.spawn()?;

        // Dropping the wait future on timeout kills the child (kill_on_drop)
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "Refresh command timed out");
                return Err(RefresherError::Timeout(self.timeout));
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;

        if output.status.success() {
            tracing::info!(duration_ms, "Refresh command completed");
            Ok(RefreshReport {
                duration_ms,
                output_tail: tail_lines(&output.stdout, OUTPUT_TAIL_LINES),
            })
        } else {
            let stderr = tail_lines(&output.stderr, OUTPUT_TAIL_LINES);
            tracing::error!(
                exit_code = ?output.status.code(),
                duration_ms,
                stderr = %stderr,
                "Refresh command failed"
            );
            Err(RefresherError::Failed {
                exit_code: output.status.code(),
                stderr,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> CommandSpec {
        CommandSpec::new("sh").arg("-c").arg(script)
    }

    #[tokio::test]
    async fn test_success() {
        let refresher = CommandRefresher::new(shell("echo scraped 12 jobs"), Duration::from_secs(5));

        let report = refresher.refresh().await.unwrap();
        assert_eq!(report.output_tail, "scraped 12 jobs");
    }

    #[tokio::test]
    async fn test_failure_carries_stderr() {
        let refresher =
            CommandRefresher::new(shell("echo 'login expired' >&2; exit 3"), Duration::from_secs(5));

        match refresher.refresh().await {
            Err(RefresherError::Failed { exit_code, stderr }) => {
                assert_eq!(exit_code, Some(3));
                assert_eq!(stderr, "login expired");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout() {
        let refresher = CommandRefresher::new(shell("sleep 5"), Duration::from_millis(100));

        let started = Instant::now();
        let result = refresher.refresh().await;
        assert!(matches!(result, Err(RefresherError::Timeout(_))));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let refresher = CommandRefresher::new(
            CommandSpec::new("/nonexistent/jobwatch-scraper"),
            Duration::from_secs(1),
        );

        assert!(matches!(
            refresher.refresh().await,
            Err(RefresherError::Spawn(_))
        ));
    }

    #[tokio::test]
    async fn test_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let refresher = CommandRefresher::new(
            shell("touch marker").current_dir(dir.path()),
            Duration::from_secs(5),
        );

        refresher.refresh().await.unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
