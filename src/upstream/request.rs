//! What a route handler hands to the adapter.

use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap, HeaderValue, Method};
use serde_json::Value;

use crate::http::request::X_REQUEST_ID;

/// The inbound pieces that travel to the upstream unchanged.
#[derive(Debug, Clone, Default)]
pub struct InboundRequest {
    /// Raw `Authorization` header, forwarded byte-for-byte.
    pub authorization: Option<HeaderValue>,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
    pub request_id: Option<HeaderValue>,
}

impl InboundRequest {
    pub fn new(headers: &HeaderMap, query: Option<&str>) -> Self {
        Self {
            authorization: headers.get(header::AUTHORIZATION).cloned(),
            query: query.filter(|q| !q.is_empty()).map(str::to_owned),
            request_id: headers.get(X_REQUEST_ID).cloned(),
        }
    }

    /// Request id for log fields.
    pub fn request_id(&self) -> &str {
        self.request_id
            .as_ref()
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

impl<S> FromRequestParts<S> for InboundRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(&parts.headers, parts.uri.query()))
    }
}

/// Upstream path relative to the base URL, held as individual segments.
///
/// A segment may contain `/`; it is percent-encoded when the URL is built
/// and never splits into more segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamPath {
    segments: Vec<String>,
}

impl UpstreamPath {
    /// Split a literal path on `/`, skipping empty segments.
    pub fn literal(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for UpstreamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment.replace('/', "%2F"))?;
        }
        Ok(())
    }
}

/// Per-call options for `BackendClient::forward`.
#[derive(Debug, Clone)]
pub struct ForwardOptions {
    pub method: Method,
    /// Serialized as the JSON request body when present.
    pub body: Option<Value>,
}

impl Default for ForwardOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }
}

impl ForwardOptions {
    pub fn new(method: Method) -> Self {
        Self { method, body: None }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_raw_authorization_and_query() {
        let mut headers = HeaderMap::new();
        let raw = HeaderValue::from_bytes(b"Bearer abc.def\xff").unwrap();
        headers.insert(header::AUTHORIZATION, raw.clone());

        let inbound = InboundRequest::new(&headers, Some("page=2&q=run"));
        assert_eq!(inbound.authorization.as_ref().unwrap().as_bytes(), raw.as_bytes());
        assert_eq!(inbound.query.as_deref(), Some("page=2&q=run"));
        assert_eq!(inbound.request_id(), "unknown");
    }

    #[test]
    fn test_empty_query_is_dropped() {
        let inbound = InboundRequest::new(&HeaderMap::new(), Some(""));
        assert!(inbound.query.is_none());
        assert!(inbound.authorization.is_none());
    }

    #[test]
    fn test_upstream_path_keeps_segments_whole() {
        let mut path = UpstreamPath::literal("/clubs/");
        path.push("5/members/9");
        assert_eq!(path.segments(), ["clubs", "5/members/9"]);
        assert_eq!(path.to_string(), "/clubs/5%2Fmembers%2F9");
        assert_eq!(UpstreamPath::literal("").to_string(), "/");
    }

    #[test]
    fn test_default_options_are_get_without_body() {
        let options = ForwardOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
    }
}
