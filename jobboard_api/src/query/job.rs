//! Query builder for the `/jobs` listing endpoint.

use std::str::FromStr;

use url::Url;

use super::common::{Query, QueryCommon};
use crate::types::JobType;

/// Sort key for job listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobSortBy {
    /// Publication date. This is the default.
    #[default]
    PostedAt,
    /// Lower bound of the advertised salary range.
    Salary,
    /// Company name, alphabetical.
    Company,
}

impl JobSortBy {
    pub fn as_param(self) -> &'static str {
        match self {
            JobSortBy::PostedAt => "postedAt",
            JobSortBy::Salary => "salary",
            JobSortBy::Company => "company",
        }
    }
}

impl FromStr for JobSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posted" | "postedAt" => Ok(JobSortBy::PostedAt),
            "salary" => Ok(JobSortBy::Salary),
            "company" => Ok(JobSortBy::Company),
            _ => Err(()),
        }
    }
}

/// Filters for listing jobs: full-text search, location, employment type,
/// and recency, plus the shared pagination/sort fields.
#[derive(Clone, Debug, Default)]
pub struct JobQuery {
    common: QueryCommon,
    search: Option<String>,
    location: Option<String>,
    job_type: Option<JobType>,
    posted_within_days: Option<i64>,
    sort_by: Option<JobSortBy>,
}

impl JobQuery {
    /// Full-text search over title, company, and skills.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filters by location substring (e.g. "Berlin", "remote").
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Filters by employment type.
    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    /// Keeps only jobs posted within the last N days.
    pub fn with_posted_within_days(mut self, days: i64) -> Self {
        self.posted_within_days = Some(days);
        self
    }

    /// Sets the sort key.
    pub fn with_sort_by(mut self, sort_by: JobSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

impl Query for JobQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search);
        }
        if let Some(location) = &self.location {
            url.query_pairs_mut().append_pair("location", location);
        }
        if let Some(job_type) = self.job_type {
            url.query_pairs_mut()
                .append_pair("jobType", job_type.as_param());
        }
        if let Some(days) = self.posted_within_days {
            url.query_pairs_mut()
                .append_pair("posted", format!("{}d", days).as_str());
        }
        if let Some(sort_by) = self.sort_by {
            url.query_pairs_mut()
                .append_pair("sortBy", sort_by.as_param());
        }
        url
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
