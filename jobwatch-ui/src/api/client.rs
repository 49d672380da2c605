//! HTTP API Client
//!
//! Functions for communicating with the Jobwatch REST API.

use gloo_net::http::{Request, Response};
use std::collections::BTreeMap;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

const API_URL_KEY: &str = "jobwatch_api_url";

/// API base URL from local storage (`jobwatch_api_url`) or the default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub recent_jobs: usize,
    #[serde(default)]
    pub top_cities: Vec<(String, usize)>,
    #[serde(default)]
    pub top_departments: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct City {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Job {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub publish_time: String,
    #[serde(default)]
    pub city_list: Vec<City>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct Facets {
    pub cities: Vec<String>,
    pub departments: Vec<String>,
}

/// Reply of `POST /api/refresh`; only `success` is read
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct RefreshReply {
    pub success: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Listing filters; blank values are left out of the query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub search: String,
    pub city: String,
    pub department: String,
}

impl JobFilter {
    fn query(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", self.search.as_str()),
            ("city", self.city.as_str()),
            ("department", self.department.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

// ============ API Functions ============

/// `GET /api/stats`
pub async fn fetch_stats() -> Result<Statistics, String> {
    let response = Request::get(&format!("{}/api/stats", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// `GET /api/jobs/{type}` with filters
pub async fn fetch_jobs(job_type: &str, filter: &JobFilter) -> Result<Vec<Job>, String> {
    let response = Request::get(&format!("{}/api/jobs/{}", get_api_base(), job_type))
        .query(filter.query())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// `GET /api/jobs/{type}/facets`
pub async fn fetch_facets(job_type: &str) -> Result<Facets, String> {
    let response = Request::get(&format!("{}/api/jobs/{}/facets", get_api_base(), job_type))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// `POST /api/refresh`
///
/// The body is read whatever the status, since failures come back as
/// 4xx/5xx with `success: false`. `Err` means no usable reply.
pub async fn request_refresh() -> Result<RefreshReply, String> {
    let response = Request::post(&format!("{}/api/refresh", get_api_base()))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Log the current statistics to the console
pub async fn check_for_updates() {
    match fetch_stats().await {
        Ok(stats) => web_sys::console::log_1(&format!("Data statistics: {:?}", stats).into()),
        Err(e) => web_sys::console::error_1(&format!("Failed to check for data updates: {}", e).into()),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let message = match response.json::<ApiError>().await {
            Ok(error) => error.error.message,
            Err(_) => format!("HTTP {}", response.status()),
        };
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_skips_blank_values() {
        let filter = JobFilter {
            search: "rust".to_string(),
            city: "  ".to_string(),
            department: "Infra".to_string(),
        };
        assert_eq!(filter.query(), vec![("search", "rust"), ("department", "Infra")]);
        assert!(JobFilter::default().query().is_empty());
    }

    #[test]
    fn test_refresh_reply_reads_success_only() {
        let reply: RefreshReply =
            serde_json::from_str(r#"{"success":false,"message":"boom","timestamp":"x"}"#).unwrap();
        assert!(!reply.success);
        assert!(serde_json::from_str::<RefreshReply>(r#"{"message":"ok"}"#).is_err());
    }

    #[test]
    fn test_statistics_from_server_shape() {
        let stats: Statistics = serde_json::from_str(
            r#"{"total":3,"by_type":{"campus":2,"intern":1,"experienced":0},
                "recent_jobs":1,"cities":{},"departments":{},
                "top_cities":[["Beijing",2]],"top_departments":[]}"#,
        )
        .unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.top_cities, vec![("Beijing".to_string(), 2)]);
    }
}
