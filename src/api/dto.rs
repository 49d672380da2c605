//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status: "healthy"
    pub status: String,
    /// Server local time, RFC 3339
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    pub version: String,
}

// ============================================
// JOB DTOs
// ============================================

/// Filter dropdown options for one channel
#[derive(Debug, Serialize, Deserialize)]
pub struct FacetsResponse {
    /// Channel identifier ("campus", "intern", "experienced")
    pub job_type: String,
    /// Human-readable channel name
    pub name: String,
    pub cities: Vec<String>,
    pub departments: Vec<String>,
}

// ============================================
// REFRESH DTOs
// ============================================

/// Reply to `POST /api/refresh`
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    /// Server local time, RFC 3339
    pub timestamp: String,
}

impl RefreshResponse {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }
}
