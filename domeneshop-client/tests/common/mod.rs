//! Shared test helpers: an in-process stand-in for the Domeneshop API.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use domeneshop_client::{Credentials, DomeneshopClient};
use tokio::net::TcpListener;

/// Skips a test when any of the given environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Path and query, e.g. `/v0/domains?domain=.no`.
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

struct Script {
    status: u16,
    body: String,
    delay: Option<Duration>,
    requests: Vec<CapturedRequest>,
}

#[derive(Clone)]
struct MockState(Arc<Mutex<Script>>);

/// Answers every request with the same scripted status and body.
pub struct MockApi {
    addr: SocketAddr,
    state: MockState,
}

impl MockApi {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, None).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Option<Duration>) -> Self {
        let state = MockState(Arc::new(Mutex::new(Script {
            status,
            body: body.to_string(),
            delay,
            requests: Vec::new(),
        })));

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock API");
        let addr = listener.local_addr().expect("mock API address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v0", self.addr)
    }

    /// Client authenticated as `stian:stian` against this server.
    pub fn client(&self) -> DomeneshopClient {
        DomeneshopClient::builder(Credentials::new("stian", "stian"))
            .base_url(self.base_url())
            .build()
            .expect("build client")
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.0.lock().expect("mock state").requests.clone()
    }

    pub fn only_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests[0].clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let (status, reply, delay) = {
        let mut script = state.0.lock().expect("mock state");
        script.requests.push(CapturedRequest {
            method: method.to_string(),
            uri: uri.to_string(),
            headers,
            body,
        });
        (script.status, script.body.clone(), script.delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, reply)
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("ephemeral port address");
    drop(listener);
    format!("http://{addr}/v0")
}

/// Unique host label for records created by live tests.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}
