//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use club_gateway::config::GatewayConfig;
use club_gateway::lifecycle::{startup, Shutdown};
use tokio::net::TcpListener;

/// Base path the mock upstream is mounted under.
pub const UPSTREAM_PREFIX: &str = "/api/v1";

/// One request as the upstream saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<Vec<u8>>,
    pub request_id: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

type Responder = dyn Fn(&Recorded) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    respond: Arc<Responder>,
}

/// A programmable upstream that records every request it receives.
pub struct MockUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, UPSTREAM_PREFIX)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one upstream call: {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_owned),
        authorization: headers
            .get(header::AUTHORIZATION)
            .map(|v| v.as_bytes().to_vec()),
        request_id: headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body,
    };

    let (status, body) = (state.respond)(&recorded);
    state.requests.lock().unwrap().push(recorded);

    let status = StatusCode::from_u16(status).unwrap();
    if body.is_empty() {
        status.into_response()
    } else {
        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}

/// Start a mock upstream answering every request with `respond`.
pub async fn start_mock_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        requests: requests.clone(),
        respond: Arc::new(respond),
    };
    let app = Router::new().fallback(record).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, requests }
}

/// Start a mock upstream answering every request with a fixed reply.
pub async fn start_fixed_upstream(status: u16, body: &str) -> MockUpstream {
    let body = body.to_string();
    start_mock_upstream(move |_| (status, body.clone())).await
}

/// An upstream that accepts connections and never answers.
pub async fn start_silent_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://{}{}", addr, UPSTREAM_PREFIX)
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, UPSTREAM_PREFIX)
}

/// A running gateway.
pub struct Gateway {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl Gateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the gateway on an ephemeral port, forwarding to `base_url`.
pub async fn start_gateway(base_url: &str) -> Gateway {
    start_gateway_with(base_url, |_| {}).await
}

/// Like [`start_gateway`], with a chance to adjust the config first.
pub async fn start_gateway_with<F>(base_url: &str, configure: F) -> Gateway
where
    F: FnOnce(&mut GatewayConfig),
{
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = base_url.to_string();
    config.upstream.connect_timeout_secs = 2;
    configure(&mut config);

    let started = startup::start(config).await.unwrap();
    let addr = started.local_addr;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = started.server.run(started.listener, server_shutdown).await;
    });

    Gateway { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
