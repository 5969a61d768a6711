use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role. Candidates browse and apply; employers post listings.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Candidate => "candidate",
            Role::Employer => "employer",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(Role::Candidate),
            "employer" => Ok(Role::Employer),
            _ => Err(()),
        }
    }
}

/// Sign-in payload.
#[derive(Serialize, Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload.
#[derive(Serialize, Clone, Debug)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// An account profile as returned by the backend.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub email: String,

    pub role: Role,

    pub headline: Option<String>,

    pub location: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,
}

/// Returned by both `signup` and `signin`: a bearer token plus the profile
/// it belongs to. Not wrapped in the `data` envelope.
#[derive(Deserialize, Clone, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: Profile,
}

/// Partial profile update; `None` fields are left untouched by the backend.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}
