//! Typed client for the job-board REST API.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    normalize::normalize_failure,
    query::{JobQuery, Query},
    transport::{HttpTransport, Method, PreparedRequest, Transport},
    types::{
        Application, AuthResponse, Credentials, Job, NewApplication, NewJob, PaginatedResponse,
        Profile, ProfileUpdate, Response, SignupRequest,
    },
    Error,
};

/// Typed client for the job-board REST API.
///
/// One method per endpoint; failures surface as [`Error::Api`] carrying the
/// same normalized message the request executor would produce. Endpoints
/// that need authentication send the bearer token set via
/// [`with_token`](Client::with_token).
pub struct Client<T: Transport = HttpTransport> {
    base_url: String,
    token: Option<String>,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client for the given base URL over the production
    /// transport, e.g. `https://api.jobboard.example` or a local backend.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a custom transport. Used for testing with a
    /// fake transport or a wiremock base URL.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            transport,
        }
    }

    /// Attaches the bearer token returned by `signup`/`signin`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Registers a new account. `POST /auth/signup`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, Error> {
        self.request::<AuthResponse, JobQuery>(
            Method::Post,
            "/auth/signup",
            None,
            Some(to_body(request)?),
            false,
        )
        .await
    }

    /// Exchanges credentials for a token. `POST /auth/signin`.
    pub async fn signin(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
        self.request::<AuthResponse, JobQuery>(
            Method::Post,
            "/auth/signin",
            None,
            Some(to_body(credentials)?),
            false,
        )
        .await
    }

    /// Lists jobs matching the given query. `GET /jobs`.
    pub async fn jobs(&self, query: &JobQuery) -> Result<PaginatedResponse<Job>, Error> {
        self.request::<PaginatedResponse<Job>, JobQuery>(
            Method::Get,
            "/jobs",
            Some(query),
            None,
            false,
        )
        .await
    }

    /// Fetches one listing by id. `GET /jobs/{id}`.
    pub async fn job(&self, job_id: &str) -> Result<Response<Job>, Error> {
        self.request::<Response<Job>, JobQuery>(
            Method::Get,
            format!("/jobs/{}", job_id).as_str(),
            None,
            None,
            false,
        )
        .await
    }

    /// Publishes a listing. `POST /jobs`, employer token required.
    pub async fn post_job(&self, job: &NewJob) -> Result<Response<Job>, Error> {
        self.request::<Response<Job>, JobQuery>(
            Method::Post,
            "/jobs",
            None,
            Some(to_body(job)?),
            true,
        )
        .await
    }

    /// Fetches the authenticated account's profile. `GET /profile`.
    pub async fn profile(&self) -> Result<Response<Profile>, Error> {
        self.request::<Response<Profile>, JobQuery>(Method::Get, "/profile", None, None, true)
            .await
    }

    /// Applies a partial profile update. `PUT /profile`.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Response<Profile>, Error> {
        self.request::<Response<Profile>, JobQuery>(
            Method::Put,
            "/profile",
            None,
            Some(to_body(update)?),
            true,
        )
        .await
    }

    /// Applies to a listing. `POST /jobs/{id}/applications`, candidate
    /// token required.
    pub async fn apply(
        &self,
        job_id: &str,
        application: &NewApplication,
    ) -> Result<Response<Application>, Error> {
        self.request::<Response<Application>, JobQuery>(
            Method::Post,
            format!("/jobs/{}/applications", job_id).as_str(),
            None,
            Some(to_body(application)?),
            true,
        )
        .await
    }

    /// Lists the authenticated candidate's applications.
    /// `GET /applications`.
    pub async fn applications(&self) -> Result<PaginatedResponse<Application>, Error> {
        self.request::<PaginatedResponse<Application>, JobQuery>(
            Method::Get,
            "/applications",
            None,
            None,
            true,
        )
        .await
    }

    fn url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.base_url, path).as_str())
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn request<R, Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
        Q: Query,
    {
        let url = self.url(path, query)?;

        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if authenticated {
            let token = self.token.as_ref().ok_or(Error::MissingToken)?;
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }

        let request = PreparedRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        };
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("No response from {} {}: {}", method, path, e);
                return Err(Error::Api {
                    status: None,
                    message: normalize_failure(None),
                });
            }
        };

        if !response.is_success() {
            let payload = serde_json::from_str::<Value>(&response.body).ok();
            let message = normalize_failure(payload.as_ref());
            tracing::error!(
                "{} {} failed with status {}: {}",
                method,
                path,
                response.status,
                truncate_body(&response.body)
            );
            return Err(Error::Api {
                status: Some(response.status),
                message,
            });
        }

        serde_json::from_str::<R>(&response.body).map_err(|e| {
            tracing::error!(
                "Failed to parse response from {}: {} | body: {}",
                path,
                e,
                truncate_body(&response.body)
            );
            Error::Api {
                status: Some(response.status),
                message: normalize_failure(None),
            }
        })
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, Error> {
    Ok(serde_json::to_value(body)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte bodies never panic.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn short_body_is_untouched() {
        assert_eq!(truncate_body("{\"message\":\"boom\"}"), "{\"message\":\"boom\"}");
    }

    #[test]
    fn long_body_is_truncated_with_marker() {
        let body = "a".repeat(5000);
        let snippet = truncate_body(&body);
        assert_eq!(snippet.len(), 2000 + "...[truncated]".len());
        assert!(snippet.ends_with("...[truncated]"));
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        // Byte 2000 lands inside a two-byte character.
        let body = format!("{}{}", "a".repeat(1999), "é".repeat(200));
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(&snippet[..1999], "a".repeat(1999));
    }
}
