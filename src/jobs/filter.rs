//! Listing filters and facet options

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::Job;

/// Optional listing filters, combined with AND
///
/// Blank values are ignored, so a form submitted with empty fields
/// matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobFilter {
    /// Case-insensitive substring of title or description
    #[serde(default)]
    pub search: Option<String>,
    /// Exact city name
    #[serde(default)]
    pub city: Option<String>,
    /// Substring of the department
    #[serde(default)]
    pub department: Option<String>,
}

impl JobFilter {
    /// Builder method: set search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Builder method: set city
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Builder method: set department
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        non_blank(&self.search).is_none()
            && non_blank(&self.city).is_none()
            && non_blank(&self.department).is_none()
    }

    /// Check whether a job passes every criterion
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(search) = non_blank(&self.search) {
            let needle = search.to_lowercase();
            if !job.title.to_lowercase().contains(&needle)
                && !job.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(city) = non_blank(&self.city) {
            if !job.city_names().any(|c| c == city) {
                return false;
            }
        }

        if let Some(department) = non_blank(&self.department) {
            if !job.department.contains(department) {
                return false;
            }
        }

        true
    }

    /// Apply the filter, keeping order
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Options for the filter dropdowns of one channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Facets {
    /// Distinct city names, sorted
    pub cities: Vec<String>,
    /// Distinct non-empty departments, sorted
    pub departments: Vec<String>,
}

impl Facets {
    /// Collect facets from an unfiltered listing
    pub fn collect(jobs: &[Job]) -> Self {
        let mut cities = BTreeSet::new();
        let mut departments = BTreeSet::new();

        for job in jobs {
            cities.extend(job.city_names().map(str::to_string));
            if !job.department.is_empty() {
                departments.insert(job.department.clone());
            }
        }

        Self {
            cities: cities.into_iter().collect(),
            departments: departments.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<Job> {
        vec![
            Job::new("Rust Backend Engineer")
                .description("Build storage services")
                .department("Infrastructure")
                .city("Beijing"),
            Job::new("Frontend Engineer")
                .description("React and RUST tooling")
                .department("Web Platform")
                .city("Shanghai")
                .city("Hangzhou"),
            Job::new("Recruiter").department("HR").city("Beijing"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let jobs = jobs();
        let filter = JobFilter::default().search("   ");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&jobs).len(), 3);
    }

    #[test]
    fn test_search_title_and_description() {
        let jobs = jobs();
        let hits = JobFilter::default().search("rust").apply(&jobs);
        let titles: Vec<_> = hits.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Rust Backend Engineer", "Frontend Engineer"]);
    }

    #[test]
    fn test_city_is_exact() {
        let jobs = jobs();
        assert_eq!(JobFilter::default().city("Beijing").apply(&jobs).len(), 2);
        assert_eq!(JobFilter::default().city("Bei").apply(&jobs).len(), 0);
    }

    #[test]
    fn test_combined_criteria() {
        let jobs = jobs();
        let hits = JobFilter::default()
            .city("Beijing")
            .department("Infra")
            .apply(&jobs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rust Backend Engineer");
    }

    #[test]
    fn test_facets() {
        let facets = Facets::collect(&jobs());
        assert_eq!(facets.cities, vec!["Beijing", "Hangzhou", "Shanghai"]);
        assert_eq!(facets.departments, vec!["HR", "Infrastructure", "Web Platform"]);
    }
}
