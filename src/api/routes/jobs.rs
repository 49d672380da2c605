//! Job Routes
//!
//! - GET /api/jobs/:job_type - Listing, optionally filtered by
//!   `search`, `city` and `department` query parameters
//! - GET /api/jobs/:job_type/facets - City and department options
//! - GET /api/stats - Dashboard statistics

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::FacetsResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::jobs::{Facets, Job, JobFilter, JobType, Statistics};

/// GET /api/jobs/:job_type
pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
    Path(job_type): Path<String>,
    Query(filter): Query<JobFilter>,
) -> ApiResult<Json<Vec<Job>>> {
    let job_type: JobType = job_type.parse()?;

    let data = state.store.load().await;
    let jobs = data.jobs(job_type);

    let jobs: Vec<Job> = if filter.is_empty() {
        jobs.to_vec()
    } else {
        filter.apply(jobs).into_iter().cloned().collect()
    };

    tracing::debug!(job_type = %job_type, count = jobs.len(), "Listing jobs");
    Ok(Json(jobs))
}

/// GET /api/jobs/:job_type/facets
pub async fn job_facets(
    State(state): State<Arc<AppState>>,
    Path(job_type): Path<String>,
) -> ApiResult<Json<FacetsResponse>> {
    let job_type: JobType = job_type.parse()?;

    let data = state.store.load().await;
    let facets = Facets::collect(data.jobs(job_type));

    Ok(Json(FacetsResponse {
        job_type: job_type.to_string(),
        name: job_type.display_name().to_string(),
        cities: facets.cities,
        departments: facets.departments,
    }))
}

/// GET /api/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<Statistics> {
    let data = state.store.load().await;
    Json(Statistics::compute_now(&data))
}
