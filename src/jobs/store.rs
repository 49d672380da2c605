//! Job cache store
//!
//! The scraper rewrites the cache file in place, so the store holds only
//! the path and re-reads the file on every call.

use std::path::{Path, PathBuf};

use super::error::{StoreError, StoreResult};
use super::types::JobData;

/// Default cache file name inside the data directory
pub const CACHE_FILE_NAME: &str = "jobs_cache.json";

/// Reads the job cache written by the scraper
#[derive(Debug, Clone)]
pub struct JobStore {
    cache_path: PathBuf,
}

impl JobStore {
    /// Create a store for a cache file path
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
        }
    }

    /// Create a store using the default cache file inside `data_dir`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(CACHE_FILE_NAME))
    }

    /// Path of the cache file
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Make sure the directory holding the cache exists
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        match self.cache_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir).await,
            _ => Ok(()),
        }
    }

    /// Load the cache, reporting read and parse failures
    ///
    /// A missing cache file is not an error: nothing has been scraped yet.
    pub async fn try_load(&self) -> StoreResult<JobData> {
        let content = match tokio::fs::read(&self.cache_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = ?self.cache_path, "Job cache does not exist yet");
                return Ok(JobData::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.cache_path.clone(),
                    source,
                })
            }
        };

        let data: JobData = serde_json::from_slice(&content).map_err(|source| StoreError::Parse {
            path: self.cache_path.clone(),
            source,
        })?;

        tracing::debug!(total = data.total(), "Loaded job cache");
        Ok(data)
    }

    /// Load the cache, falling back to empty data on any failure
    pub async fn load(&self) -> JobData {
        match self.try_load().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load job cache, serving empty data");
                JobData::default()
            }
        }
    }

    /// Replace the cache contents
    pub async fn save(&self, data: &JobData) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.ensure_dir().await.map_err(|source| StoreError::Io {
            path: self.cache_path.clone(),
            source,
        })?;

        tokio::fs::write(&self.cache_path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: self.cache_path.clone(),
                source,
            })
    }
}
