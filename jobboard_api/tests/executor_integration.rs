use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use jobboard_api::{
    Executor, Method, PreparedRequest, RequestConfig, RequestState, Transport, TransportError,
    TransportResponse, GENERIC_FAILURE_MESSAGE,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_executor(url: String, m: Method) -> Executor<jobboard_api::HttpTransport> {
    Executor::new(
        RequestConfig::new(url, m),
        jobboard_api::HttpTransport::new(),
    )
}

#[tokio::test]
async fn success_stores_data_and_returns_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "ada@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/auth/signin", server.uri()), Method::Post);
    let result = executor
        .invoke(Some(json!({"email": "ada@example.com", "password": "hunter2"})))
        .await;

    assert_eq!(result, Some(json!({"token": "abc123"})));
    let state = executor.state();
    assert_eq!(state.data, Some(json!({"token": "abc123"})));
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn configured_headers_override_the_default_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("Content-Type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let executor = Executor::new(
        RequestConfig::new(format!("{}/upload", server.uri()), Method::Post)
            .with_header("Content-Type", "text/plain"),
        jobboard_api::HttpTransport::new(),
    );

    assert_eq!(executor.invoke(None).await, Some(json!({"ok": true})));
}

#[tokio::test]
async fn validation_error_list_is_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [
                {"msg": "Email required"},
                {"msg": "Password too short"},
            ]
        })))
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/auth/signup", server.uri()), Method::Post);
    let result = executor.invoke(Some(json!({}))).await;

    assert_eq!(result, None);
    let state = executor.state();
    assert_eq!(
        state.error.as_deref(),
        Some("Email required, Password too short")
    );
    assert_eq!(state.data, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn message_field_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/auth/signin", server.uri()), Method::Post);
    assert_eq!(executor.invoke(Some(json!({}))).await, None);
    assert_eq!(executor.state().error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn error_field_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "Server busy"})))
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/jobs", server.uri()), Method::Get);
    assert_eq!(executor.invoke(None).await, None);
    assert_eq!(executor.state().error.as_deref(), Some("Server busy"));
}

#[tokio::test]
async fn unstructured_failure_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/jobs", server.uri()), Method::Get);
    assert_eq!(executor.invoke(None).await, None);
    assert_eq!(
        executor.state().error.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn unparseable_success_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/jobs", server.uri()), Method::Get);
    assert_eq!(executor.invoke(None).await, None);
    assert_eq!(
        executor.state().error.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn connection_refused_uses_generic_message() {
    // Start a server only to learn a free port, then shut it down.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let executor = http_executor(format!("{}/jobs", uri), Method::Get);
    assert_eq!(executor.invoke(None).await, None);
    assert_eq!(
        executor.state().error.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
    assert!(!executor.state().loading);
}

#[tokio::test]
async fn empty_url_is_a_no_op() {
    let transport = CountingTransport::default();
    let calls = transport.calls.clone();
    let executor = Executor::new(RequestConfig::new("", Method::Post), transport);

    let result = executor.invoke(Some(json!({"email": "ada@example.com"}))).await;

    assert_eq!(result, None);
    assert_eq!(executor.state(), RequestState::default());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn repeated_success_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Ada"})))
        .expect(2)
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/profile", server.uri()), Method::Get);
    let first = executor.invoke(None).await;
    let first_state = executor.state();
    let second = executor.invoke(None).await;

    assert_eq!(first, second);
    assert_eq!(executor.state(), first_state);
}

#[tokio::test]
async fn data_is_retained_when_a_later_call_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Ada"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let executor = http_executor(format!("{}/profile", server.uri()), Method::Get);
    assert_eq!(executor.invoke(None).await, Some(json!({"name": "Ada"})));
    assert_eq!(executor.invoke(None).await, None);

    // Stale data stays visible next to the new error.
    let state = executor.state();
    assert_eq!(state.data, Some(json!({"name": "Ada"})));
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[tokio::test]
async fn loading_is_observable_while_a_request_is_in_flight() {
    let executor = Arc::new(Executor::new(
        RequestConfig::new("fake://echo", Method::Post),
        DelayedEcho,
    ));

    // The "slow" tag keeps the fake transport busy for 250ms; sample the
    // state well before that.
    let in_flight = {
        let executor = executor.clone();
        tokio::spawn(async move { executor.invoke(Some(json!({"tag": "slow"}))).await })
    };
    tokio::time::sleep(Duration::from_millis(40)).await;
    assert!(executor.state().loading);

    let result = in_flight.await.unwrap();
    assert_eq!(result, Some(json!({"winner": "slow"})));
    assert!(!executor.state().loading);
}

// Concurrent invocations are not fenced or cancelled: whichever response
// resolves last overwrites the state, regardless of invocation order.
// This pins the behavior inherited from one-request-per-form usage.
#[tokio::test]
async fn last_resolved_response_wins_the_race() {
    let executor = Executor::new(RequestConfig::new("fake://echo", Method::Post), DelayedEcho);

    let (slow, fast) = tokio::join!(
        executor.invoke(Some(json!({"tag": "slow"}))),
        executor.invoke(Some(json!({"tag": "fast"}))),
    );

    assert_eq!(slow, Some(json!({"winner": "slow"})));
    assert_eq!(fast, Some(json!({"winner": "fast"})));

    let state = executor.state();
    assert_eq!(state.data, Some(json!({"winner": "slow"})));
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

/// Echoes the request's `tag` field back as `winner`, taking 250ms for
/// `"slow"` tags and 10ms otherwise.
struct DelayedEcho;

impl Transport for DelayedEcho {
    async fn execute(
        &self,
        request: PreparedRequest,
    ) -> Result<TransportResponse, TransportError> {
        let tag = request
            .body
            .as_ref()
            .and_then(|b| b.get("tag"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let delay = if tag == "slow" { 250 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(TransportResponse {
            status: 200,
            body: json!({"winner": tag}).to_string(),
        })
    }
}

/// Counts executions and fails every request; used to prove the transport
/// is never consulted for unconfigured executors.
#[derive(Default)]
struct CountingTransport {
    calls: Arc<AtomicUsize>,
}

impl Transport for CountingTransport {
    async fn execute(
        &self,
        _request: PreparedRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TransportError("unreachable".to_string()))
    }
}
