//! Club endpoints.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::{messages, ProxyRoute};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::upstream::{normalize, ForwardOptions, InboundRequest, UpstreamPath};

pub fn routes() -> Vec<ProxyRoute> {
    vec![
        ProxyRoute::get("/clubs", "/clubs", messages::LIST_CLUBS_FAILED),
        ProxyRoute::post("/clubs", "/clubs", messages::CREATE_CLUB_FAILED),
        ProxyRoute::get("/clubs/me", "/clubs/me", messages::MY_CLUBS_FAILED),
        ProxyRoute::get("/clubs/{id}", "/clubs/{id}", messages::GET_CLUB_FAILED),
        ProxyRoute::put("/clubs/{id}", "/clubs/{id}", messages::UPDATE_CLUB_FAILED),
        ProxyRoute::delete("/clubs/{id}", "/clubs/{id}", messages::DELETE_CLUB_FAILED),
        ProxyRoute::get("/clubs/{id}/members", "/clubs/{id}/members", messages::LIST_MEMBERS_FAILED),
        ProxyRoute::post("/clubs/{id}/join", "/clubs/{id}/join", messages::JOIN_CLUB_FAILED),
        ProxyRoute::post("/clubs/{id}/leave", "/clubs/{id}/leave", messages::LEAVE_CLUB_FAILED),
        ProxyRoute::delete(
            "/clubs/{id}/members/{memberId}",
            "/clubs/{id}/members/{memberId}",
            messages::REMOVE_MEMBER_FAILED,
        ),
        ProxyRoute::patch(
            "/clubs/{id}/members/{memberId}",
            "/clubs/{id}/members/{memberId}/role",
            messages::UPDATE_MEMBER_ROLE_FAILED,
        ),
        ProxyRoute::get(
            "/clubs/{id}/join-requests",
            "/clubs/{id}/join-requests",
            messages::LIST_JOIN_REQUESTS_FAILED,
        ),
        ProxyRoute::post(
            "/clubs/{id}/join-requests/{requestId}/approve",
            "/clubs/{id}/join-requests/{requestId}/approve",
            messages::APPROVE_JOIN_REQUEST_FAILED,
        ),
        ProxyRoute::post(
            "/clubs/{id}/join-requests/{requestId}/reject",
            "/clubs/{id}/join-requests/{requestId}/reject",
            messages::REJECT_JOIN_REQUEST_FAILED,
        ),
        ProxyRoute::get(
            "/clubs/{id}/leaderboard",
            "/clubs/{id}/leaderboard",
            messages::CLUB_LEADERBOARD_FAILED,
        ),
        ProxyRoute::get(
            "/clubs/{id}/activities",
            "/clubs/{id}/activities",
            messages::CLUB_ACTIVITIES_FAILED,
        ),
    ]
}

/// Hand-written club routes; the table-driven ones are added by `mount`.
pub fn router() -> Router<AppState> {
    Router::new().route("/clubs/search", get(search))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// `GET /api/clubs/search?q=...`
///
/// A blank `q` is answered locally with 400; the full query string
/// (paging, filters) is forwarded untouched otherwise.
pub async fn search(
    State(state): State<AppState>,
    inbound: InboundRequest,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let has_query = params
        .ok()
        .and_then(|Query(p)| p.q)
        .is_some_and(|q| !q.trim().is_empty());
    if !has_query {
        return ApiError::validation(messages::SEARCH_QUERY_REQUIRED).into_response();
    }

    let result = state
        .backend
        .forward(
            &inbound,
            &UpstreamPath::literal("/clubs/search"),
            ForwardOptions::default(),
        )
        .await;
    normalize(result, messages::SEARCH_CLUBS_FAILED)
}
