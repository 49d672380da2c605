//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::jobs::{JobStore, CACHE_FILE_NAME};
use crate::refresh::DEFAULT_RELOAD_DELAY;
use crate::refresher::CommandSpec;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Job cache location
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("jobwatch").to_string_lossy().to_string())
        .unwrap_or_else(|| "./data".to_string())
}

fn default_cache_file() -> String {
    CACHE_FILE_NAME.to_string()
}

fn expand_home(dir: &str) -> PathBuf {
    let rest = match dir.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(dir),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(dir),
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache_file: default_cache_file(),
        }
    }
}

impl DataConfig {
    /// Full path of the cache file, with a leading `~` expanded
    pub fn cache_path(&self) -> PathBuf {
        expand_home(&self.data_dir).join(&self.cache_file)
    }

    /// Store reading this cache
    pub fn store(&self) -> JobStore {
        JobStore::new(self.cache_path())
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Scraper command run by `POST /api/refresh`
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_refresh_command")]
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Directory the command runs in (default: current directory)
    pub working_dir: Option<String>,

    #[serde(default = "default_refresh_timeout")]
    pub timeout_secs: u64,
}

fn default_refresh_command() -> String {
    "jobwatch-scraper".to_string()
}

fn default_refresh_timeout() -> u64 {
    300
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            command: default_refresh_command(),
            args: Vec::new(),
            working_dir: None,
            timeout_secs: default_refresh_timeout(),
        }
    }
}

impl RefreshConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn command_spec(&self) -> CommandSpec {
        let mut spec = CommandSpec::new(&self.command);
        spec.args = self.args.clone();
        spec.working_dir = self.working_dir.as_ref().map(PathBuf::from);
        spec
    }
}

/// Settings for the refresh controller and CLI
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_reload_delay")]
    pub reload_delay_ms: u64,

    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_reload_delay() -> u64 {
    1000
}

fn default_toast_duration() -> u64 {
    3000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            reload_delay_ms: default_reload_delay(),
            toast_duration_ms: default_toast_duration(),
        }
    }
}

impl ClientConfig {
    /// Configured reload delay, never below the default
    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms).max(DEFAULT_RELOAD_DELAY)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("jobwatch").join("config.toml")),
            Some(PathBuf::from("/etc/jobwatch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("JOBWATCH_DATA_DIR") {
            self.data.data_dir = data_dir;
        }

        if let Some(host) = var("JOBWATCH_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("JOBWATCH_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        if let Some(command) = var("JOBWATCH_REFRESH_COMMAND") {
            self.refresh.command = command;
        }

        if let Some(url) = var("JOBWATCH_API_URL") {
            self.client.api_url = url;
        }

        if let Some(level) = var("JOBWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("JOBWATCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Jobwatch Configuration
#
# Environment variables override these settings:
# - JOBWATCH_DATA_DIR
# - JOBWATCH_HOST
# - JOBWATCH_PORT
# - JOBWATCH_REFRESH_COMMAND
# - JOBWATCH_API_URL
# - JOBWATCH_LOG_LEVEL
# - JOBWATCH_LOG_FORMAT

[data]
# Directory holding the job cache (default: the platform data directory)
# data_dir = "/var/lib/jobwatch"

# Cache file written by the scraper
cache_file = "jobs_cache.json"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8080

[refresh]
# Scraper run by POST /api/refresh
command = "jobwatch-scraper"
args = []

# Directory the scraper runs in
# working_dir = "/opt/jobwatch"

# Kill the scraper after this many seconds
timeout_secs = 300

[client]
# Server the CLI talks to
api_url = "http://localhost:8080"

# Delay between a successful refresh and the reload (ms, at least 1000)
reload_delay_ms = 1000

# How long notifications stay visible (ms)
toast_duration_ms = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
