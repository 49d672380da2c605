//! Core data types for job listings
//!
//! - `JobType`: Recruiting channel a listing belongs to
//! - `Job`: A single scraped job posting
//! - `City`: A location entry in a posting's city list
//! - `JobData`: The full cache, one list per channel

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::StoreError;

/// Recruiting channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Campus,
    Intern,
    Experienced,
}

impl JobType {
    /// All channels, in display order
    pub const ALL: [JobType; 3] = [JobType::Campus, JobType::Intern, JobType::Experienced];

    /// Identifier used in URLs and the cache file
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Campus => "campus",
            JobType::Intern => "intern",
            JobType::Experienced => "experienced",
        }
    }

    /// Human-readable channel name
    pub fn display_name(&self) -> &'static str {
        match self {
            JobType::Campus => "Campus Recruiting",
            JobType::Intern => "Internships",
            JobType::Experienced => "Experienced Hires",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "campus" => Ok(JobType::Campus),
            "intern" => Ok(JobType::Intern),
            "experienced" => Ok(JobType::Experienced),
            other => Err(StoreError::InvalidJobType(other.to_string())),
        }
    }
}

/// A location a job is offered in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub name: String,
    /// Fields the scraper recorded that we don't interpret (code, etc.)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A single job posting as written by the scraper
///
/// The scraper output is loosely typed: text fields may be `null` and
/// `city_list` may contain entries without a name. Both are tolerated
/// on read so one bad record never hides the rest of the cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Job {
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub requirement: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub code: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub department: String,
    /// `%Y-%m-%d` or `%Y-%m-%d %H:%M:%S`
    #[serde(default, deserialize_with = "string_or_null")]
    pub publish_time: String,
    #[serde(default, deserialize_with = "lenient_cities")]
    pub city_list: Vec<City>,
    /// Everything else the scraper stored (links, highlight flags, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    /// Create a job with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set department
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Builder method: set publish time
    pub fn published(mut self, publish_time: impl Into<String>) -> Self {
        self.publish_time = publish_time.into();
        self
    }

    /// Builder method: add a city
    pub fn city(mut self, name: impl Into<String>) -> Self {
        self.city_list.push(City::new(name));
        self
    }

    /// Names of all cities this job is offered in
    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.city_list.iter().map(|c| c.name.as_str())
    }
}

/// Contents of the job cache file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobData {
    #[serde(default)]
    pub campus: Vec<Job>,
    #[serde(default)]
    pub intern: Vec<Job>,
    #[serde(default)]
    pub experienced: Vec<Job>,
}

impl JobData {
    /// Jobs for one channel
    pub fn jobs(&self, job_type: JobType) -> &[Job] {
        match job_type {
            JobType::Campus => &self.campus,
            JobType::Intern => &self.intern,
            JobType::Experienced => &self.experienced,
        }
    }

    /// Mutable access to one channel's jobs
    pub fn jobs_mut(&mut self, job_type: JobType) -> &mut Vec<Job> {
        match job_type {
            JobType::Campus => &mut self.campus,
            JobType::Intern => &mut self.intern,
            JobType::Experienced => &mut self.experienced,
        }
    }

    /// Iterate over every channel with its jobs
    pub fn iter(&self) -> impl Iterator<Item = (JobType, &[Job])> {
        JobType::ALL.into_iter().map(move |t| (t, self.jobs(t)))
    }

    /// Total number of jobs across all channels
    pub fn total(&self) -> usize {
        self.iter().map(|(_, jobs)| jobs.len()).sum()
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_cities<'de, D>(deserializer: D) -> Result<Vec<City>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter(|entry| entry.get("name").is_some_and(|n| n.is_string()))
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_parse() {
        assert_eq!("campus".parse::<JobType>().unwrap(), JobType::Campus);
        assert_eq!("experienced".parse::<JobType>().unwrap(), JobType::Experienced);
        assert!("fulltime".parse::<JobType>().is_err());
    }

    #[test]
    fn test_job_tolerates_nulls_and_bad_cities() {
        let raw = r#"{
            "title": "Backend Engineer",
            "description": null,
            "department": "Infra",
            "publish_time": "2024-03-01 10:00:00",
            "city_list": [{"name": "Beijing", "code": "CT_11"}, "Shanghai", {"code": "CT_2"}],
            "job_link": "https://example.com/1"
        }"#;

        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.description, "");
        assert_eq!(job.city_names().collect::<Vec<_>>(), vec!["Beijing"]);
        assert_eq!(job.city_list[0].extra.get("code").unwrap(), "CT_11");
        assert_eq!(job.extra.get("job_link").unwrap(), "https://example.com/1");
    }

    #[test]
    fn test_city_list_not_a_list() {
        let job: Job = serde_json::from_str(r#"{"title": "x", "city_list": "Beijing"}"#).unwrap();
        assert!(job.city_list.is_empty());
    }

    #[test]
    fn test_job_data_missing_channels() {
        let data: JobData = serde_json::from_str(r#"{"intern": [{"title": "a"}]}"#).unwrap();
        assert_eq!(data.total(), 1);
        assert!(data.jobs(JobType::Campus).is_empty());
        assert_eq!(data.jobs(JobType::Intern)[0].title, "a");
    }
}
