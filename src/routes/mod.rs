//! The `/api` route surface.
//!
//! # Data Flow
//! ```text
//! resource module (clubs.rs, challenges.rs, ...)
//!     → Vec<ProxyRoute> (method, inbound path, upstream template, fallback)
//!     → mount() groups routes by path into axum MethodRouters
//!     → dispatch(): path params → upstream segments, JSON body → forward → normalize
//! ```
//!
//! # Design Decisions
//! - Routes are data; only handlers with local validation are hand-written
//! - Upstream templates reuse the inbound `{param}` names, one parameter per segment
//! - Parameter names at the same path position must agree (axum/matchit rule)

pub mod achievements;
pub mod activities;
pub mod challenges;
pub mod clubs;
pub mod events;
pub mod integrations;
pub mod messages;
pub mod races;
pub mod templates;
pub mod users;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{MethodFilter, MethodRouter},
    Router,
};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::upstream::{
    normalize, normalize_no_content, ForwardOptions, InboundRequest, UpstreamPath,
};

/// How a successful upstream answer is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessMode {
    /// Upstream status and payload, unchanged.
    Mirror,
    /// `204 No Content` regardless of the upstream payload.
    NoContent,
}

/// One pass-through endpoint.
#[derive(Debug, Clone)]
pub struct ProxyRoute {
    pub method: Method,
    /// Inbound path relative to `/api`, in axum syntax (`/clubs/{id}`).
    pub path: &'static str,
    /// Upstream path relative to the base URL, same `{param}` names.
    pub upstream: &'static str,
    pub fallback: &'static str,
    pub success: SuccessMode,
}

impl ProxyRoute {
    pub fn new(
        method: Method,
        path: &'static str,
        upstream: &'static str,
        fallback: &'static str,
    ) -> Self {
        Self {
            method,
            path,
            upstream,
            fallback,
            success: SuccessMode::Mirror,
        }
    }

    pub fn get(path: &'static str, upstream: &'static str, fallback: &'static str) -> Self {
        Self::new(Method::GET, path, upstream, fallback)
    }

    pub fn post(path: &'static str, upstream: &'static str, fallback: &'static str) -> Self {
        Self::new(Method::POST, path, upstream, fallback)
    }

    pub fn put(path: &'static str, upstream: &'static str, fallback: &'static str) -> Self {
        Self::new(Method::PUT, path, upstream, fallback)
    }

    pub fn patch(path: &'static str, upstream: &'static str, fallback: &'static str) -> Self {
        Self::new(Method::PATCH, path, upstream, fallback)
    }

    pub fn delete(path: &'static str, upstream: &'static str, fallback: &'static str) -> Self {
        Self::new(Method::DELETE, path, upstream, fallback)
    }

    pub fn no_content(mut self) -> Self {
        self.success = SuccessMode::NoContent;
        self
    }

    /// Substitute captured path parameters into the upstream template.
    ///
    /// Each parameter fills exactly one segment, whatever it contains.
    /// Placeholders without a matching parameter are left as written.
    /// Returns `None` for a parameter that cannot stand as a segment
    /// (empty, `.` or `..`).
    pub fn upstream_path(&self, params: &HashMap<String, String>) -> Option<UpstreamPath> {
        let mut path = UpstreamPath::default();

        for segment in self.upstream.split('/').filter(|s| !s.is_empty()) {
            let value = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .and_then(|name| params.get(name));
            match value.map(String::as_str) {
                Some("" | "." | "..") => return None,
                Some(value) => path.push(value),
                None => path.push(segment),
            }
        }

        Some(path)
    }

    fn has_params(&self) -> bool {
        self.path.contains('{')
    }
}

/// Every table-driven route across all resource groups.
pub fn all_routes() -> Vec<ProxyRoute> {
    [
        clubs::routes(),
        challenges::routes(),
        events::routes(),
        races::routes(),
        activities::routes(),
        integrations::routes(),
        templates::routes(),
        users::routes(),
        achievements::routes(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The router mounted at `/api`.
pub fn api_router() -> Router<AppState> {
    mount(clubs::router(), all_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Register table-driven routes, grouping methods that share a path.
pub fn mount(mut router: Router<AppState>, routes: Vec<ProxyRoute>) -> Router<AppState> {
    let mut by_path: BTreeMap<&'static str, MethodRouter<AppState>> = BTreeMap::new();

    for route in routes {
        let path = route.path;
        let filter = match MethodFilter::try_from(route.method.clone()) {
            Ok(filter) => filter,
            Err(_) => {
                tracing::warn!(method = %route.method, path, "Skipping route with unsupported method");
                continue;
            }
        };
        let method_router = by_path.remove(path).unwrap_or_else(MethodRouter::new);
        by_path.insert(path, add_handler(method_router, filter, route));
    }

    for (path, method_router) in by_path {
        router = router.route(path, method_router);
    }
    router
}

fn add_handler(
    method_router: MethodRouter<AppState>,
    filter: MethodFilter,
    route: ProxyRoute,
) -> MethodRouter<AppState> {
    let route = Arc::new(route);

    if route.has_params() {
        method_router.on(
            filter,
            move |State(state): State<AppState>,
                  params: Result<Path<HashMap<String, String>>, PathRejection>,
                  inbound: InboundRequest,
                  body: Result<Bytes, BytesRejection>| {
                let route = Arc::clone(&route);
                async move {
                    match params {
                        Ok(Path(params)) => dispatch(&state, &route, &params, inbound, body).await,
                        Err(rejection) => {
                            tracing::debug!(error = %rejection, path = route.path, "Bad path parameters");
                            ApiError::validation(messages::INVALID_PATH).into_response()
                        }
                    }
                }
            },
        )
    } else {
        method_router.on(
            filter,
            move |State(state): State<AppState>,
                  inbound: InboundRequest,
                  body: Result<Bytes, BytesRejection>| {
                let route = Arc::clone(&route);
                async move { dispatch(&state, &route, &HashMap::new(), inbound, body).await }
            },
        )
    }
}

/// Forward one table-driven request and shape the answer.
async fn dispatch(
    state: &AppState,
    route: &ProxyRoute,
    params: &HashMap<String, String>,
    inbound: InboundRequest,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejected(route, &inbound, rejection).into_response(),
    };

    let Some(path) = route.upstream_path(params) else {
        return ApiError::validation(messages::INVALID_PATH).into_response();
    };

    let body = match parse_body(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                request_id = %inbound.request_id(),
                path = route.path,
                error = %e,
                "Rejecting malformed JSON body"
            );
            return ApiError::internal(route.fallback).into_response();
        }
    };

    let mut options = ForwardOptions::new(route.method.clone());
    if let Some(body) = body {
        options = options.with_body(body);
    }

    let result = state
        .backend
        .forward(&inbound, &path, options)
        .await;

    match route.success {
        SuccessMode::Mirror => normalize(result, route.fallback),
        SuccessMode::NoContent => normalize_no_content(result, route.fallback),
    }
}

fn body_rejected(
    route: &ProxyRoute,
    inbound: &InboundRequest,
    rejection: BytesRejection,
) -> ApiError {
    tracing::warn!(
        request_id = %inbound.request_id(),
        path = route.path,
        error = %rejection,
        "Could not read request body"
    );
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::internal(route.fallback)
    }
}

/// An empty (or whitespace-only) body means "no body".
pub fn parse_body(bytes: &[u8]) -> Result<Option<Value>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn placeholders(template: &str) -> Vec<&str> {
        template
            .split('/')
            .filter_map(|s| s.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }

    #[test]
    fn test_upstream_path_substitution() {
        let route = ProxyRoute::delete(
            "/clubs/{id}/members/{memberId}",
            "/clubs/{id}/members/{memberId}",
            messages::REMOVE_MEMBER_FAILED,
        );
        let params = HashMap::from([
            ("id".to_string(), "12".to_string()),
            ("memberId".to_string(), "u-9".to_string()),
        ]);
        let path = route.upstream_path(&params).unwrap();
        assert_eq!(path.segments(), ["clubs", "12", "members", "u-9"]);

        let path = route.upstream_path(&HashMap::new()).unwrap();
        assert_eq!(path.segments(), ["clubs", "{id}", "members", "{memberId}"]);
    }

    #[test]
    fn test_parameter_with_slashes_is_one_segment() {
        let route = ProxyRoute::delete("/clubs/{id}", "/clubs/{id}", messages::DELETE_CLUB_FAILED);
        let params = HashMap::from([("id".to_string(), "5/members/9".to_string())]);

        let path = route.upstream_path(&params).unwrap();
        assert_eq!(path.segments(), ["clubs", "5/members/9"]);
        assert_eq!(path.to_string(), "/clubs/5%2Fmembers%2F9");
    }

    #[test]
    fn test_dot_segments_are_not_substituted() {
        let route = ProxyRoute::get("/clubs/{id}", "/clubs/{id}", messages::GET_CLUB_FAILED);
        for value in ["", ".", ".."] {
            let params = HashMap::from([("id".to_string(), value.to_string())]);
            assert!(route.upstream_path(&params).is_none(), "{value:?} was substituted");
        }
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), None);
        assert_eq!(parse_body(b" \n").unwrap(), None);
        assert_eq!(
            parse_body(br#"{"distance":5.2}"#).unwrap(),
            Some(serde_json::json!({ "distance": 5.2 }))
        );
        assert!(parse_body(b"{not json").is_err());
    }

    #[test]
    fn test_route_table_is_consistent() {
        let routes = all_routes();
        let mut seen = HashSet::new();

        for route in &routes {
            assert!(route.path.starts_with('/'), "{} must start with /", route.path);
            assert!(!route.fallback.is_empty());
            assert!(
                seen.insert((route.method.clone(), route.path)),
                "duplicate route {} {}",
                route.method,
                route.path
            );

            for template in [route.path, route.upstream] {
                let braces = template.matches('{').count();
                assert_eq!(
                    placeholders(template).len(),
                    braces,
                    "{template}: placeholders must fill whole segments"
                );
            }

            let inbound: HashSet<_> = placeholders(route.path).into_iter().collect();
            for name in placeholders(route.upstream) {
                assert!(
                    inbound.contains(name),
                    "{} {}: upstream param {{{}}} is not captured",
                    route.method,
                    route.path,
                    name
                );
            }
        }

        assert!(routes.len() >= 70, "expected the full surface, got {}", routes.len());
    }

    #[test]
    fn test_only_invitation_delete_is_no_content() {
        let no_content: Vec<_> = all_routes()
            .into_iter()
            .filter(|r| r.success == SuccessMode::NoContent)
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(no_content, vec![(Method::DELETE, "/challenges/invitations/{id}")]);
    }

    #[test]
    fn test_api_router_builds() {
        let _ = api_router();
    }
}
