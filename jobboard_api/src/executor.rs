//! The request executor: one HTTP call per invocation, with observable
//! `data`/`error`/`loading` state.
//!
//! Each form or page owns its own [`Executor`]; there is no shared global
//! instance. The executor never panics or returns an error to its caller;
//! every failure is normalized into the `error` field and the invocation
//! resolves to `None`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::normalize::normalize_failure;
use crate::transport::{Method, PreparedRequest, Transport};

/// Lifecycle state of the most recent request.
///
/// After a completed request exactly one of `data`/`error` is set; both are
/// `None` before the first invocation. `data` keeps its previous value when
/// a later invocation fails, so stale results remain visible alongside the
/// new error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestState {
    pub data: Option<Value>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Where and how the executor sends its requests. Immutable once the
/// executor is constructed.
#[derive(Clone, Debug)]
pub struct RequestConfig {
    pub url: String,
    pub method: Method,
    /// Extra headers; these override the default `Content-Type` on key
    /// collision.
    pub headers: HashMap<String, String>,
}

impl RequestConfig {
    pub fn new(url: impl Into<String>, method: Method) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Issues one request per [`invoke`](Executor::invoke) call and tracks the
/// outcome in a [`RequestState`].
///
/// Concurrent invocations on the same executor are not fenced: each updates
/// the state in the order it resolves, so the last response to arrive wins.
/// Superseded in-flight requests are not cancelled. This matches the usage
/// pattern of one request per form submission; the race is pinned by a test
/// rather than guarded against.
pub struct Executor<T: Transport> {
    config: RequestConfig,
    transport: T,
    state: Mutex<RequestState>,
}

impl<T: Transport> Executor<T> {
    pub fn new(config: RequestConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            state: Mutex::new(RequestState::default()),
        }
    }

    /// Snapshot of the current request state.
    pub fn state(&self) -> RequestState {
        self.lock_state().clone()
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Performs one request with the configured URL and method.
    ///
    /// Returns the parsed response payload on success and `None` on any
    /// failure; failures land in `state().error` as a normalized message.
    /// With an empty configured URL the call is a no-op: it resolves to
    /// `None` without touching the state.
    pub async fn invoke(&self, body: Option<Value>) -> Option<Value> {
        if self.config.url.is_empty() {
            return None;
        }

        {
            let mut state = self.lock_state();
            state.loading = true;
            state.error = None;
        }

        let outcome = self.perform(body).await;

        let mut state = self.lock_state();
        state.loading = false;
        match outcome {
            Ok(payload) => {
                state.data = Some(payload.clone());
                Some(payload)
            }
            Err(message) => {
                state.error = Some(message);
                None
            }
        }
    }

    async fn perform(&self, body: Option<Value>) -> Result<Value, String> {
        let mut headers = HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        headers.extend(self.config.headers.clone());

        let request = PreparedRequest {
            method: self.config.method,
            url: self.config.url.clone(),
            headers,
            body,
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("No response from {} {}: {}", self.config.method, self.config.url, e);
                return Err(normalize_failure(None));
            }
        };

        let payload = serde_json::from_str::<Value>(&response.body).ok();
        if response.is_success() {
            match payload {
                Some(payload) => Ok(payload),
                None => {
                    tracing::error!(
                        "Unparseable success body from {} (status {})",
                        self.config.url,
                        response.status
                    );
                    Err(normalize_failure(None))
                }
            }
        } else {
            tracing::error!(
                "Request to {} failed with status {}",
                self.config.url,
                response.status
            );
            Err(normalize_failure(payload.as_ref()))
        }
    }

    // The lock is only held for field updates, never across an await, so
    // poisoning can only come from a panicking caller; recover the state
    // rather than propagating the panic.
    fn lock_state(&self) -> MutexGuard<'_, RequestState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
