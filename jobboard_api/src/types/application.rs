use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a submitted application.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Accepted,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::InReview => "in review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// A candidate's application to one listing. The backend denormalizes the
/// job title and company so lists render without extra lookups.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_jobId")]
    pub job_id: String,

    pub job_title: String,

    pub company: String,

    pub status: ApplicationStatus,

    pub cover_note: Option<String>,

    pub applied_at: DateTime<Utc>,
}

/// Payload for applying to a listing.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_note: Option<String>,
}
