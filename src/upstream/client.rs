//! Outbound calls to the backend API.
//!
//! # Responsibilities
//! - Resolve an upstream-relative path against the configured base URL
//! - Copy the inbound authorization credential and query string verbatim
//! - Issue exactly one call and classify the outcome
//!
//! # Design Decisions
//! - Connection pooling is left to reqwest
//! - Every call carries its own deadline; running out of time is a transport failure
//! - Failures are logged here, once, with the upstream's own wording

use std::time::{Duration, Instant};

use axum::http::{header, HeaderValue, StatusCode};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;
use crate::upstream::error::{ClientError, UpstreamError};
use crate::upstream::request::{ForwardOptions, InboundRequest, UpstreamPath};
use crate::upstream::result::BackendResult;

/// Longest upstream error text copied into a log line.
const MAX_LOGGED_ERROR: usize = 256;

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl BackendClient {
    /// Create a client for the configured upstream.
    ///
    /// `request_timeout` bounds each call from send to the last body byte.
    pub fn new(config: &UpstreamConfig, request_timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::NotABase(config.base_url.clone()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url,
            request_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the absolute upstream URL for `path` and an optional raw query.
    ///
    /// Segments are percent-encoded one by one, `/` included.
    pub fn endpoint(&self, path: &UpstreamPath, query: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path.segments());
        }
        url.set_query(query);
        url
    }

    /// Forward one request to the upstream.
    ///
    /// Never fails: transport errors, non-2xx answers and unreadable bodies
    /// all come back as [`BackendResult::Failure`].
    pub async fn forward(
        &self,
        inbound: &InboundRequest,
        path: &UpstreamPath,
        options: ForwardOptions,
    ) -> BackendResult {
        let start = Instant::now();
        let method = options.method.clone();
        let url = self.endpoint(path, inbound.query.as_deref());

        tracing::debug!(
            request_id = %inbound.request_id(),
            method = %method,
            url = %url,
            "Forwarding request"
        );

        let outcome = self.send(inbound, url, options).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok((status, data)) => {
                tracing::info!(
                    request_id = %inbound.request_id(),
                    method = %method,
                    path = %path,
                    status = status.as_u16(),
                    elapsed_ms,
                    "Upstream call succeeded"
                );
                metrics::record_upstream(method.as_str(), status.as_u16(), start);
                BackendResult::Success { data, status }
            }
            Err(err) => {
                let status = err.status();
                tracing::warn!(
                    request_id = %inbound.request_id(),
                    method = %method,
                    path = %path,
                    status = status.as_u16(),
                    elapsed_ms,
                    error = %err,
                    "Upstream call failed"
                );
                metrics::record_upstream(method.as_str(), status.as_u16(), start);
                BackendResult::Failure {
                    error: err.to_string(),
                    status,
                }
            }
        }
    }

    async fn send(
        &self,
        inbound: &InboundRequest,
        url: Url,
        options: ForwardOptions,
    ) -> Result<(StatusCode, Option<Value>), UpstreamError> {
        let mut request = self
            .client
            .request(options.method, url)
            .timeout(self.request_timeout)
            .header(header::ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(auth) = &inbound.authorization {
            request = request.header(header::AUTHORIZATION, auth.clone());
        }
        if let Some(id) = &inbound.request_id {
            request = request.header(X_REQUEST_ID, id.clone());
        }
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body).map_err(UpstreamError::Encode)?;
            request = request
                .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes);
        }

        let response = request.send().await.map_err(UpstreamError::Transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(UpstreamError::Body)?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                message: error_message(&bytes),
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok((status, None));
        }

        let data = serde_json::from_slice(&bytes).map_err(UpstreamError::Decode)?;
        Ok((status, Some(data)))
    }
}

/// Pull a human-readable message out of an upstream error body.
///
/// Prefers a `message` or `error` string field, falls back to the raw text.
fn error_message(body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "empty response body".to_string();
    }
    text.chars().take(MAX_LOGGED_ERROR).collect()
}
