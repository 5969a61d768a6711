//! HTTP transport boundary.
//!
//! All network traffic goes through the [`Transport`] trait so that the
//! executor and the typed client can be tested against a fake transport.
//! [`HttpTransport`] is the production implementation over `reqwest`.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use serde_json::Value;

/// HTTP methods supported by the job-board API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A fully-assembled request, ready for the transport to send.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    /// JSON body, serialized by the transport when present.
    pub body: Option<Value>,
}

/// A response the transport actually received, success or not.
/// Status interpretation and body parsing happen above the transport.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received at all: connection refused, DNS failure,
/// or the connection dropped before the body arrived.
#[derive(thiserror::Error, Debug)]
#[error("No response received: {0}")]
pub struct TransportError(pub String);

/// Sends one prepared request and yields whatever came back.
///
/// Implementations must not interpret the response: a 500 with a body is an
/// `Ok(TransportResponse)`, not an error. `Err` is reserved for the case
/// where no response exists.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: PreparedRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// Production transport backed by a shared `reqwest` client.
///
/// No timeout is configured: a hung request stays in flight until the
/// caller gives up, mirroring the behavior the executor's state model
/// documents.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: PreparedRequest,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
