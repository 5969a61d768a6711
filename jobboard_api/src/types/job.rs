use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employment type of a listing. Serialized in the backend's kebab-case
/// convention ("full-time", "part-time", ...).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_param(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for JobType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" | "fulltime" => Ok(JobType::FullTime),
            "part-time" | "parttime" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            _ => Err(()),
        }
    }
}

/// Advertised salary range, annual, in the given currency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
    pub currency: String,
}

/// A published job listing.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    pub company: String,

    pub location: String,

    pub job_type: JobType,

    pub description: String,

    #[serde(default)]
    pub skills: Vec<String>,

    pub salary: Option<SalaryRange>,

    pub posted_at: DateTime<Utc>,

    #[serde(rename = "_employerId")]
    pub employer_id: String,
}

/// Payload for creating a listing. The backend fills in the id, the
/// employer, and the publication timestamp.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
}
