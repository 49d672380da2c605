//! Dashboard statistics over the job cache

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::types::JobData;

/// How many entries the top-N lists keep
pub const TOP_N: usize = 10;

/// Window for counting a job as recently published
pub const RECENT_DAYS: i64 = 7;

/// Aggregated view of the job cache
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    /// Jobs across all channels
    pub total: usize,
    /// Jobs per channel
    pub by_type: BTreeMap<String, usize>,
    /// Jobs published within the last week
    pub recent_jobs: usize,
    /// Job count per city (a job in two cities counts for both)
    pub cities: BTreeMap<String, usize>,
    /// Job count per department
    pub departments: BTreeMap<String, usize>,
    /// Most common cities as `[name, count]`
    pub top_cities: Vec<(String, usize)>,
    /// Most common departments as `[name, count]`
    pub top_departments: Vec<(String, usize)>,
}

impl Statistics {
    /// Compute statistics relative to `now`
    pub fn compute(data: &JobData, now: NaiveDateTime) -> Self {
        let week_ago = now - Duration::days(RECENT_DAYS);

        let mut stats = Statistics {
            total: data.total(),
            ..Default::default()
        };
        let mut cities: HashMap<&str, usize> = HashMap::new();
        let mut departments: HashMap<&str, usize> = HashMap::new();

        for (job_type, jobs) in data.iter() {
            stats.by_type.insert(job_type.to_string(), jobs.len());

            for job in jobs {
                if parse_publish_time(&job.publish_time).is_some_and(|t| t >= week_ago) {
                    stats.recent_jobs += 1;
                }

                for city in job.city_names() {
                    *cities.entry(city).or_insert(0) += 1;
                }

                if !job.department.is_empty() {
                    *departments.entry(job.department.as_str()).or_insert(0) += 1;
                }
            }
        }

        stats.top_cities = most_common(&cities, TOP_N);
        stats.top_departments = most_common(&departments, TOP_N);
        stats.cities = cities.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        stats.departments = departments
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        stats
    }

    /// Compute statistics relative to the local clock
    pub fn compute_now(data: &JobData) -> Self {
        Self::compute(data, chrono::Local::now().naive_local())
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} jobs ({} published in the last {} days)",
            self.total, self.recent_jobs, RECENT_DAYS
        )
    }
}

/// Parse a scraper timestamp (`%Y-%m-%d %H:%M:%S` or a bare `%Y-%m-%d`)
pub fn parse_publish_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Highest counts first; ties broken by name so output is stable
fn most_common(counts: &HashMap<&str, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
